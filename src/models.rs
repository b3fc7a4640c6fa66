use std::fmt;

use serde::Serialize;

use crate::constants::CANDIDATE_SEPARATOR;

/// One account/container pair under test, parsed from a name list line.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub raw_line: String,
    pub account_name: String,
    pub container_name: String,
}

impl Candidate {
    /// Parse a name list line.
    ///
    /// `account:container` is split at the first separator. A line without a
    /// separator is used as both the account and the container name.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let (account, container) = match trimmed.split_once(CANDIDATE_SEPARATOR) {
            Some((account, container)) => (account, container),
            None => (trimmed, trimmed),
        };

        Candidate {
            raw_line: trimmed.to_string(),
            account_name: account.to_string(),
            container_name: container.to_string(),
        }
    }
}

/// Why a name was rejected.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NameError {
    TooShort { len: usize, min: usize },
    TooLong { len: usize, max: usize },
    InvalidCharacter { character: char },
    ConsecutiveHyphens,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::TooShort { len, min } => {
                write!(f, "too short ({} characters, minimum {})", len, min)
            }
            NameError::TooLong { len, max } => {
                write!(f, "too long ({} characters, maximum {})", len, max)
            }
            NameError::InvalidCharacter { character } => {
                write!(f, "invalid character {:?}", character)
            }
            NameError::ConsecutiveHyphens => write!(f, "contains consecutive hyphens"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    InvalidAccount(NameError),
    InvalidContainer(NameError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Outcome of the network stages for a candidate that passed validation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "result", content = "detail", rename_all = "snake_case")]
pub enum ProbeResult {
    DoesNotResolve,
    /// Any non-200 status. 403 and 404 are deliberately not told apart.
    NotFound(u16),
    ConnectionFailed(String),
    /// Raw listing body, unparsed
    Found(String),
}

/// Per-candidate status, flattened for summaries and counters.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    InvalidAccountName,
    InvalidContainerName,
    DnsNotResolved,
    ConnectionFailure,
    HttpNonSuccess,
    Success,
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanStatus::InvalidAccountName => "invalid_account_name",
            ScanStatus::InvalidContainerName => "invalid_container_name",
            ScanStatus::DnsNotResolved => "dns_not_resolved",
            ScanStatus::ConnectionFailure => "connection_failure",
            ScanStatus::HttpNonSuccess => "http_non_success",
            ScanStatus::Success => "success",
        };
        write!(f, "{}", name)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CandidateReport {
    /// Zero-based position of the line in the input
    pub index: usize,
    pub candidate: Candidate,
    pub validation: ValidationOutcome,
    /// Absent when validation failed
    pub probe: Option<ProbeResult>,
}

impl CandidateReport {
    pub fn status(&self) -> ScanStatus {
        match (&self.validation, &self.probe) {
            (ValidationOutcome::InvalidAccount(_), _) => ScanStatus::InvalidAccountName,
            (ValidationOutcome::InvalidContainer(_), _) => ScanStatus::InvalidContainerName,
            (ValidationOutcome::Valid, Some(ProbeResult::Found(_))) => ScanStatus::Success,
            (ValidationOutcome::Valid, Some(ProbeResult::NotFound(_))) => ScanStatus::HttpNonSuccess,
            (ValidationOutcome::Valid, Some(ProbeResult::ConnectionFailed(_))) => {
                ScanStatus::ConnectionFailure
            }
            (ValidationOutcome::Valid, Some(ProbeResult::DoesNotResolve) | None) => {
                ScanStatus::DnsNotResolved
            }
        }
    }
}
