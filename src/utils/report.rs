use crate::models::{CandidateReport, ProbeResult, ValidationOutcome};

/// Render one human-readable entry for a report.
pub fn render_entry(report: &CandidateReport) -> String {
    let candidate = &report.candidate;
    let line_no = report.index + 1;

    match (&report.validation, &report.probe) {
        (ValidationOutcome::InvalidAccount(reason), _) => format!(
            "[{}] Invalid storage account name {} ({}), skipping.",
            line_no, candidate.account_name, reason
        ),
        (ValidationOutcome::InvalidContainer(reason), _) => format!(
            "[{}] Invalid container name {} ({}), skipping.",
            line_no, candidate.container_name, reason
        ),
        (ValidationOutcome::Valid, None) | (ValidationOutcome::Valid, Some(ProbeResult::DoesNotResolve)) => {
            format!(
                "[{}] Skipping storage account {} (does not resolve)",
                line_no, candidate.account_name
            )
        }
        (ValidationOutcome::Valid, Some(ProbeResult::NotFound(status))) => format!(
            "[{}] Container not found or not accessible: {} (Status code: {})",
            line_no, candidate.raw_line, status
        ),
        (ValidationOutcome::Valid, Some(ProbeResult::ConnectionFailed(cause))) => {
            format!("[{}] {}", line_no, cause)
        }
        (ValidationOutcome::Valid, Some(ProbeResult::Found(body))) => format!(
            "[{}] Valid storage account and container name: {}\nBlob data objects:\n{}",
            line_no, candidate.raw_line, body
        ),
    }
}

/// Render the full text report.
///
/// With `only_found` set, entries that did not produce a listing are left
/// out.
pub fn render_text(reports: &[CandidateReport], only_found: bool) -> String {
    let mut out = String::from("Results:\n");

    for report in reports {
        if only_found && !matches!(report.probe, Some(ProbeResult::Found(_))) {
            continue;
        }
        out.push_str(&render_entry(report));
        out.push('\n');
    }

    out
}
