use log::warn;
use tokio::sync::Mutex;

use crate::models::CandidateReport;

/// Collects candidate reports from concurrent tasks.
///
/// Reports are stored in one slot per input index, so the finalized sequence
/// is in input order no matter which task finished first.
pub struct ResultSink {
    slots: Mutex<Vec<Option<CandidateReport>>>,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ResultSink {
            slots: Mutex::new(vec![None; capacity]),
        }
    }

    /// Store a finished report in the slot for its index
    pub async fn record(&self, report: CandidateReport) {
        let mut slots = self.slots.lock().await;
        let index = report.index;

        if index >= slots.len() {
            slots.resize(index + 1, None);
        }
        if slots[index].is_some() {
            warn!("Replacing existing report for line {}", index + 1);
        }
        slots[index] = Some(report);
    }

    /// Number of reports recorded so far
    pub async fn len(&self) -> usize {
        self.slots.lock().await.iter().filter(|slot| slot.is_some()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Take every recorded report, ordered by input index
    pub async fn finalize(&self) -> Vec<CandidateReport> {
        let mut slots = self.slots.lock().await;
        std::mem::take(&mut *slots).into_iter().flatten().collect()
    }
}

impl Default for ResultSink {
    fn default() -> Self {
        Self::new()
    }
}
