//! Test utilities for rs-blobfinder
//!
//! This module provides common testing utilities and fixtures for use across
//! the unit test modules.

#![cfg(test)]

use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary file with the given content
pub fn create_temp_file(content: &[u8]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content)?;
    file.flush()?;
    Ok(file)
}

/// Creates a name list file with one entry per line
pub fn create_name_list(lines: &[&str]) -> Result<NamedTempFile> {
    create_temp_file(lines.join("\n").as_bytes())
}

/// Creates a test YAML configuration file
pub fn create_test_config() -> Result<NamedTempFile> {
    let config_content = r#"
version: "1.0"
description: "Test configuration"
concurrency: 2
dns_timeout_secs: 1
probe_timeout_secs: 2
max_retries: 0
provider:
  name: "test-provider"
  host_suffix: ".blob.example.test"
  listing_query: "?restype=container&comp=list"
"#;

    create_temp_file(config_content.as_bytes())
}

/// Test data generators for common types
pub mod generators {
    use crate::models::{Candidate, CandidateReport, NameError, ProbeResult, ValidationOutcome};

    /// One report of each common outcome, indexed 0..4
    pub fn sample_reports() -> Vec<CandidateReport> {
        vec![
            CandidateReport {
                index: 0,
                candidate: Candidate::parse("falsimentis:falsimentis-container"),
                validation: ValidationOutcome::Valid,
                probe: Some(ProbeResult::NotFound(404)),
            },
            CandidateReport {
                index: 1,
                candidate: Candidate::parse("ab"),
                validation: ValidationOutcome::InvalidAccount(NameError::TooShort { len: 2, min: 3 }),
                probe: None,
            },
            CandidateReport {
                index: 2,
                candidate: Candidate::parse("doesnotexist123"),
                validation: ValidationOutcome::Valid,
                probe: Some(ProbeResult::DoesNotResolve),
            },
            CandidateReport {
                index: 3,
                candidate: Candidate::parse("validacct:public-data"),
                validation: ValidationOutcome::Valid,
                probe: Some(ProbeResult::Found(
                    "<EnumerationResults>...</EnumerationResults>".to_string(),
                )),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;

    #[test]
    fn test_create_name_list() -> Result<()> {
        let file = create_name_list(&["a", "b"])?;
        assert_eq!(std::fs::read_to_string(file.path())?, "a\nb");
        Ok(())
    }

    #[test]
    fn test_create_test_config_parses() -> Result<()> {
        let file = create_test_config()?;
        let config = ScanConfig::from_yaml_file(file.path())?;
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.provider.host_suffix, ".blob.example.test");
        assert_eq!(config.provider.scheme, "https");
        Ok(())
    }
}
