//! # rs-blobfinder
//!
//! A concurrent scanner for publicly listable cloud storage containers,
//! written in Rust.
//!
//! ## Overview
//!
//! rs-blobfinder takes a list of candidate storage account and container
//! names and finds out which of them exist and allow anonymous listing. Each
//! candidate goes through three stages:
//!
//! 1. **Validation** against the provider's naming rules. Invalid names never
//!    generate network traffic.
//! 2. **Resolution** of the account host name. Without a DNS record there is
//!    no account, and no listing request is sent.
//! 3. **Probing** with a single unauthenticated container listing request.
//!
//! ## Features
//!
//! - **Bounded concurrency**: a fixed number of candidates in flight
//! - **Ordered output**: reports come back in name list order
//! - **Retry with backoff**: connection failures are retried, HTTP answers are not
//! - **Cancellation**: Ctrl-C stops dispatch and lets in-flight work finish
//! - **Provider profiles**: DNS suffix and listing URL shape are configurable
//! - **Reporting**: text output and a JSON summary
//!
//! ## Usage
//!
//! ```no_run
//! use rust_blobfinder::config::ScanConfig;
//! use rust_blobfinder::scanner::Scanner;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let scanner = Scanner::from_config(&ScanConfig::default())?;
//! let lines = vec![
//!     "falsimentis:falsimentis-container".to_string(),
//!     "falsimentis".to_string(),
//! ];
//!
//! let outcome = scanner.run(lines, CancellationToken::new()).await;
//! for report in &outcome.reports {
//!     println!("{}: {}", report.candidate.raw_line, report.status());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Candidates, outcomes and reports
//! - [`security`]: Storage naming rule validation
//! - [`cloud`]: DNS existence checks, listing requests and retry policy
//! - [`scanner`]: Concurrent scheduling and ordered result collection
//! - [`config`]: YAML configuration and provider profiles
//! - [`utils`]: Name list input, text report and JSON summary
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models and structures used throughout the application
pub mod models;

/// Storage naming rule validation
pub mod security;

/// Network checks against the storage provider
pub mod cloud;

/// Candidate scheduling and result collection
pub mod scanner;

/// Configuration management and provider profiles
pub mod config;

/// Input and reporting helpers
pub mod utils;

/// Application constants and configuration values
pub mod constants;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
