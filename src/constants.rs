//! Global constants for the rs-blobfinder application.
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make configuration changes easier. Everything here can be overridden
//! through [`crate::config::ScanConfig`].

// Provider defaults (Azure Blob Storage)
/// Provider name recorded in reports
pub const DEFAULT_PROVIDER_NAME: &str = "azure-blob";

/// URL scheme used for listing requests
pub const DEFAULT_SCHEME: &str = "https";

/// DNS suffix appended to the storage account name
pub const STORAGE_HOST_SUFFIX: &str = ".blob.core.windows.net";

/// Query string that turns a container URL into a listing request
pub const LISTING_QUERY: &str = "?restype=container&comp=list";

// Naming rules
/// Minimum storage account name length
pub const ACCOUNT_NAME_MIN_LEN: usize = 3;

/// Maximum storage account name length
pub const ACCOUNT_NAME_MAX_LEN: usize = 23;

/// Minimum container name length
pub const CONTAINER_NAME_MIN_LEN: usize = 3;

/// Maximum container name length
pub const CONTAINER_NAME_MAX_LEN: usize = 63;

/// Separator between account and container in a name list line
pub const CANDIDATE_SEPARATOR: char = ':';

// Concurrency constants
/// Default number of candidates probed concurrently
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Upper bound accepted for the concurrency setting
pub const MAX_CONCURRENCY: usize = 256;

// Timeout and retry constants
/// DNS resolution timeout in seconds
pub const DEFAULT_DNS_TIMEOUT_SECS: u64 = 5;

/// Listing request timeout in seconds
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Retries allowed after a connection failure
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Base retry delay in milliseconds
pub const RETRY_BASE_DELAY_MS: u64 = 250;

/// Maximum retry delay in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 30;

/// Progress reporting interval in seconds
pub const PROGRESS_REPORT_INTERVAL_SECS: u64 = 2;

/// Port used when resolving through the host resolver
pub const RESOLVE_PORT: u16 = 443;

// Default file names
pub const DEFAULT_CONFIG_NAME: &str = "blobfinder.yaml";
