//! Storage naming rule validation.
//!
//! Candidates that fail these checks are never resolved or probed, so the
//! rules mirror the provider's constraints exactly. No normalization is done:
//! an uppercase character makes the name invalid rather than being lowered.

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{
    ACCOUNT_NAME_MAX_LEN, ACCOUNT_NAME_MIN_LEN, CONTAINER_NAME_MAX_LEN, CONTAINER_NAME_MIN_LEN,
};
use crate::models::{NameError, ValidationOutcome};

lazy_static! {
    /// First character outside the account alphabet
    static ref ACCOUNT_DISALLOWED: Regex = Regex::new(r"[^a-z0-9]").unwrap();

    /// First character outside the container alphabet
    static ref CONTAINER_DISALLOWED: Regex = Regex::new(r"[^a-z0-9-]").unwrap();
}

/// Validate an account/container pair.
///
/// The account is checked first; if both names are invalid only the account
/// failure is reported.
///
/// # Example
///
/// ```
/// use rust_blobfinder::security::name_validator::validate;
/// use rust_blobfinder::models::ValidationOutcome;
///
/// assert_eq!(validate("falsimentis", "my-container-1"), ValidationOutcome::Valid);
/// assert!(!validate("ab", "my-container-1").is_valid());
/// ```
pub fn validate(account_name: &str, container_name: &str) -> ValidationOutcome {
    if let Err(reason) = validate_account_name(account_name) {
        return ValidationOutcome::InvalidAccount(reason);
    }
    if let Err(reason) = validate_container_name(container_name) {
        return ValidationOutcome::InvalidContainer(reason);
    }
    ValidationOutcome::Valid
}

/// Storage account names: 3-23 characters from `[a-z0-9]`.
pub fn validate_account_name(name: &str) -> Result<(), NameError> {
    check_alphabet(name, &ACCOUNT_DISALLOWED)?;
    check_length(name, ACCOUNT_NAME_MIN_LEN, ACCOUNT_NAME_MAX_LEN)
}

/// Container names: 3-63 characters from `[a-z0-9-]` with no `--`.
pub fn validate_container_name(name: &str) -> Result<(), NameError> {
    check_alphabet(name, &CONTAINER_DISALLOWED)?;
    if name.contains("--") {
        return Err(NameError::ConsecutiveHyphens);
    }
    check_length(name, CONTAINER_NAME_MIN_LEN, CONTAINER_NAME_MAX_LEN)
}

fn check_alphabet(name: &str, disallowed: &Regex) -> Result<(), NameError> {
    match disallowed.find(name).and_then(|m| m.as_str().chars().next()) {
        Some(character) => Err(NameError::InvalidCharacter { character }),
        None => Ok(()),
    }
}

// Only ASCII survives check_alphabet, so byte length equals character count.
fn check_length(name: &str, min: usize, max: usize) -> Result<(), NameError> {
    let len = name.len();
    if len < min {
        Err(NameError::TooShort { len, min })
    } else if len > max {
        Err(NameError::TooLong { len, max })
    } else {
        Ok(())
    }
}
