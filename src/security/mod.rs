//! Input validation for scan candidates.
//!
//! This module provides the naming rule checks applied to every candidate
//! before any network traffic is generated for it.

pub mod name_validator;

pub use name_validator::{validate, validate_account_name, validate_container_name};
