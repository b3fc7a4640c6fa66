use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Spawn a task that logs scan progress every `interval`.
///
/// The task ends once every candidate has completed or `done` is cancelled.
pub fn spawn_progress_reporter(
    completed: Arc<AtomicUsize>,
    total: usize,
    interval: Duration,
    done: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut last_reported = 0;

        loop {
            tokio::select! {
                _ = done.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }

            let finished = completed.load(Ordering::SeqCst);
            if total > 0 && finished != last_reported {
                info!("Progress: {}", format_progress(finished, total));
                last_reported = finished;
            }

            if finished >= total {
                break;
            }
        }
    })
}

/// Render `finished/total (pct%)`
pub fn format_progress(finished: usize, total: usize) -> String {
    let percentage = if total == 0 {
        100.0
    } else {
        (finished as f64 / total as f64) * 100.0
    };
    format!("{}/{} entries ({:.1}%)", finished, total, percentage)
}
