//! Input and reporting helpers around the scanner.
//!
//! ## Components
//!
//! - **Input**: name list reading
//! - **Report**: human-readable text rendering
//! - **Summary**: JSON scan summary for archiving and post-processing
//!
//! ## Common Use Cases
//!
//! ### Rendering a Report
//!
//! ```no_run
//! use rust_blobfinder::utils::input::read_name_list;
//! use rust_blobfinder::utils::report::render_text;
//! use rust_blobfinder::scanner::Scanner;
//! use rust_blobfinder::config::ScanConfig;
//! use tokio_util::sync::CancellationToken;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let lines = read_name_list(Path::new("names.txt"))?;
//! let scanner = Scanner::from_config(&ScanConfig::default())?;
//! let outcome = scanner.run(lines, CancellationToken::new()).await;
//!
//! print!("{}", render_text(&outcome.reports, false));
//! # Ok(())
//! # }
//! ```

/// Name list reading
pub mod input;

/// Text rendering of scan reports
pub mod report;

/// JSON scan summary generation
pub mod summary;
