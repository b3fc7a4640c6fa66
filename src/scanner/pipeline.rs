use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use futures::future;
use log::{debug, info, warn};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::cloud::listing::{HttpListingProbe, ListingProbe};
use crate::cloud::resolver::{ExistenceResolver, HostResolver};
use crate::cloud::retry::RetryPolicy;
use crate::config::ScanConfig;
use crate::constants::DEFAULT_CONCURRENCY;
use crate::models::{Candidate, CandidateReport, ProbeResult, ValidationOutcome};
use crate::scanner::sink::ResultSink;
use crate::security::name_validator::validate;

/// Tunables for a scan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// Maximum number of candidates in flight
    pub concurrency: usize,
    pub retry: RetryPolicy,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            retry: RetryPolicy::default(),
        }
    }
}

impl From<&ScanConfig> for ScanSettings {
    fn from(config: &ScanConfig) -> Self {
        Self {
            concurrency: config.concurrency,
            retry: RetryPolicy::new(
                config.max_retries,
                Duration::from_millis(config.retry_base_delay_ms),
            ),
        }
    }
}

/// Result of a scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// One report per dispatched line, in input order
    pub reports: Vec<CandidateReport>,
    /// Lines never dispatched because the run was cancelled
    pub skipped: usize,
}

/// Runs candidates through validation, resolution and probing with bounded
/// concurrency.
pub struct Scanner {
    resolver: Arc<dyn ExistenceResolver>,
    probe: Arc<dyn ListingProbe>,
    settings: ScanSettings,
    completed: Arc<AtomicUsize>,
}

impl Scanner {
    pub fn new(
        resolver: Arc<dyn ExistenceResolver>,
        probe: Arc<dyn ListingProbe>,
        settings: ScanSettings,
    ) -> Self {
        Scanner {
            resolver,
            probe,
            settings: ScanSettings {
                concurrency: settings.concurrency.max(1),
                ..settings
            },
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Build a scanner that uses the host resolver and real HTTP requests
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let resolver = HostResolver::new(config.provider.clone(), config.dns_timeout());
        let probe = HttpListingProbe::new(config.provider.clone(), config.probe_timeout())?;

        Ok(Self::new(
            Arc::new(resolver),
            Arc::new(probe),
            ScanSettings::from(config),
        ))
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Counter of finished candidates, shared with progress reporting
    pub fn completed_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.completed)
    }

    /// Scan every line, returning reports in input order.
    ///
    /// Cancelling `cancel` stops dispatch of further lines. Candidates that
    /// are already running finish normally and are included in the outcome.
    pub async fn run(&self, lines: Vec<String>, cancel: CancellationToken) -> ScanOutcome {
        let total = lines.len();
        let sink = Arc::new(ResultSink::with_capacity(total));
        let semaphore = Arc::new(Semaphore::new(self.settings.concurrency));
        let mut handles = Vec::with_capacity(total);
        let mut dispatched_lines = Vec::with_capacity(total);

        debug!(
            "Scanning {} candidates with concurrency {}",
            total, self.settings.concurrency
        );

        for (index, line) in lines.into_iter().enumerate() {
            let permit = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    warn!("Scan cancelled, {} candidates not dispatched", total - index);
                    break;
                }
                permit = Arc::clone(&semaphore).acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => break,
                },
            };

            let resolver = Arc::clone(&self.resolver);
            let probe = Arc::clone(&self.probe);
            let retry = self.settings.retry.clone();
            let sink = Arc::clone(&sink);
            let completed = Arc::clone(&self.completed);

            let task_line = line.clone();
            handles.push(tokio::spawn(async move {
                let report =
                    scan_candidate(index, &task_line, resolver.as_ref(), probe.as_ref(), &retry).await;
                sink.record(report).await;
                completed.fetch_add(1, Ordering::SeqCst);
                drop(permit);
            }));
            dispatched_lines.push(line);
        }

        // A task that panicked never recorded its report
        let dispatched = handles.len();
        let results = future::join_all(handles).await;
        for (index, (line, result)) in dispatched_lines.iter().zip(results).enumerate() {
            if let Err(e) = result {
                warn!("Candidate task for line {} failed: {}", index + 1, e);
                sink.record(failed_task_report(index, line, &e.to_string())).await;
                self.completed.fetch_add(1, Ordering::SeqCst);
            }
        }

        let reports = sink.finalize().await;
        info!("Scanned {} of {} candidates", reports.len(), total);

        ScanOutcome {
            reports,
            skipped: total - dispatched,
        }
    }
}

/// Process a single name list line.
///
/// Invalid names stop before any network traffic, and an account that does
/// not resolve is never probed.
pub async fn scan_candidate(
    index: usize,
    line: &str,
    resolver: &dyn ExistenceResolver,
    probe: &dyn ListingProbe,
    retry: &RetryPolicy,
) -> CandidateReport {
    let candidate = Candidate::parse(line);
    let validation = validate(&candidate.account_name, &candidate.container_name);

    let probe_result = match &validation {
        ValidationOutcome::Valid => {
            Some(resolve_and_probe(&candidate, resolver, probe, retry).await)
        }
        ValidationOutcome::InvalidAccount(reason) => {
            debug!("Invalid storage account name {}: {}", candidate.account_name, reason);
            None
        }
        ValidationOutcome::InvalidContainer(reason) => {
            debug!("Invalid container name {}: {}", candidate.container_name, reason);
            None
        }
    };

    CandidateReport {
        index,
        candidate,
        validation,
        probe: probe_result,
    }
}

/// Report for a line whose task died before recording anything
fn failed_task_report(index: usize, line: &str, cause: &str) -> CandidateReport {
    let candidate = Candidate::parse(line);
    let validation = validate(&candidate.account_name, &candidate.container_name);

    CandidateReport {
        index,
        candidate,
        validation,
        probe: Some(ProbeResult::ConnectionFailed(format!("Candidate task failed: {}", cause))),
    }
}

async fn resolve_and_probe(
    candidate: &Candidate,
    resolver: &dyn ExistenceResolver,
    probe: &dyn ListingProbe,
    retry: &RetryPolicy,
) -> ProbeResult {
    if !resolver.resolve(&candidate.account_name).await {
        debug!("Storage account {} does not resolve", candidate.account_name);
        return ProbeResult::DoesNotResolve;
    }

    let result = retry
        .probe(probe, &candidate.account_name, &candidate.container_name)
        .await;

    if let ProbeResult::Found(_) = result {
        info!("Listable container found: {}", candidate.raw_line);
    }
    result
}
