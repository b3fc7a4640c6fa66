//! Network-facing stages of a scan.
//!
//! Each candidate that passes name validation goes through two network
//! checks against the storage provider:
//!
//! - **Existence**: the account host name is resolved through the host
//!   resolver. Providers without wildcard DNS only publish records for
//!   accounts that exist.
//! - **Listing**: an unauthenticated container listing request is issued and
//!   its status classified.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────┐     ┌───────────────┐     ┌───────────────┐
//! │ ExistenceResolver │────▶│  RetryPolicy  │────▶│ ListingProbe  │
//! └─────────┬─────────┘     └───────────────┘     └───────┬───────┘
//!           │                                             │
//!     ┌─────▼──────┐                              ┌───────▼───────┐
//!     │  Host DNS  │                              │ Listing URL   │
//!     └────────────┘                              └───────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::time::Duration;
//! use rust_blobfinder::cloud::listing::{HttpListingProbe, ListingProbe};
//! use rust_blobfinder::cloud::resolver::{ExistenceResolver, HostResolver};
//! use rust_blobfinder::config::ProviderProfile;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let provider = ProviderProfile::default();
//! let resolver = HostResolver::new(provider.clone(), Duration::from_secs(5));
//! let probe = HttpListingProbe::new(provider, Duration::from_secs(10))?;
//!
//! if resolver.resolve("falsimentis").await {
//!     let result = probe.probe("falsimentis", "falsimentis-container").await;
//!     println!("{:?}", result);
//! }
//! # Ok(())
//! # }
//! ```

/// DNS-based account existence checks
pub mod resolver;

/// Unauthenticated container listing requests
pub mod listing;

/// Backoff policy for connection failures
pub mod retry;
