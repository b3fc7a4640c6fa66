// Re-export all items from the submodules
mod scan_config;

pub use scan_config::{load_or_create_config, ProviderProfile, ScanConfig};
