use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde_json::json;
use uuid::Uuid;

use crate::config::ScanConfig;
use crate::models::{CandidateReport, ScanStatus};
use crate::scanner::ScanOutcome;

/// Count reports per status
pub fn count_by_status(reports: &[CandidateReport]) -> BTreeMap<ScanStatus, usize> {
    let mut counts = BTreeMap::new();
    for report in reports {
        *counts.entry(report.status()).or_insert(0) += 1;
    }
    counts
}

/// Create a JSON summary of a scan.
///
/// Generates a JSON report containing the scan settings, per-status counts
/// and every candidate report in input order. Listing bodies are embedded
/// verbatim.
///
/// # Arguments
///
/// * `outcome` - The finished scan
/// * `config` - Configuration the scan ran with
/// * `started` - When the scan started
/// * `finished` - When the last candidate completed
///
/// # Example Output
///
/// ```json
/// {
///   "scan_id": "550e8400-e29b-41d4-a716-446655440000",
///   "hostname": "assessor-01",
///   "started": "2024-01-15T14:30:52Z",
///   "provider": "azure-blob",
///   "candidate_count": 3,
///   "counts": {"success": 1, "invalid_account_name": 1, ...},
///   "reports": [...]
/// }
/// ```
pub fn create_scan_summary(
    outcome: &ScanOutcome,
    config: &ScanConfig,
    started: DateTime<Utc>,
    finished: DateTime<Utc>,
) -> Result<String> {
    let hostname = hostname::get()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let counts: BTreeMap<String, usize> = count_by_status(&outcome.reports)
        .into_iter()
        .map(|(status, count)| (status.to_string(), count))
        .collect();

    let summary = json!({
        "scan_id": Uuid::new_v4().to_string(),
        "hostname": hostname,
        "started": started.to_rfc3339(),
        "finished": finished.to_rfc3339(),
        "duration_seconds": (finished - started).num_milliseconds() as f64 / 1000.0,
        "scanner_version": env!("CARGO_PKG_VERSION"),
        "provider": config.provider.name,
        "host_suffix": config.provider.host_suffix,
        "concurrency": config.concurrency,
        "candidate_count": outcome.reports.len() + outcome.skipped,
        "skipped": outcome.skipped,
        "counts": counts,
        "reports": outcome.reports,
    });

    serde_json::to_string_pretty(&summary).context("Failed to serialize scan summary to JSON")
}

/// Write a summary to disk
pub fn write_scan_summary(path: &Path, summary: &str) -> Result<()> {
    fs::write(path, summary).context(format!("Failed to write scan summary to {}", path.display()))?;
    info!("Scan summary written to {}", path.display());
    Ok(())
}
