use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_DNS_TIMEOUT_SECS, DEFAULT_MAX_RETRIES, DEFAULT_PROBE_TIMEOUT_SECS,
    DEFAULT_PROVIDER_NAME, DEFAULT_SCHEME, LISTING_QUERY, MAX_CONCURRENCY, RETRY_BASE_DELAY_MS,
    STORAGE_HOST_SUFFIX,
};

/// The URL shape of a storage provider.
///
/// A listing request is issued against
/// `{scheme}://{account}{host_suffix}/{container}{listing_query}`, and
/// existence is checked by resolving `{account}{host_suffix}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub name: String,
    #[serde(default = "default_scheme")]
    pub scheme: String,
    pub host_suffix: String,
    pub listing_query: String,
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

impl Default for ProviderProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROVIDER_NAME.to_string(),
            scheme: default_scheme(),
            host_suffix: STORAGE_HOST_SUFFIX.to_string(),
            listing_query: LISTING_QUERY.to_string(),
        }
    }
}

impl ProviderProfile {
    /// Host name whose resolution decides whether an account exists
    pub fn account_host(&self, account_name: &str) -> String {
        format!("{}{}", account_name, self.host_suffix)
    }

    /// Unauthenticated listing URL for a container
    pub fn listing_url(&self, account_name: &str, container_name: &str) -> String {
        format!(
            "{}://{}/{}{}",
            self.scheme,
            self.account_host(account_name),
            container_name,
            self.listing_query
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub version: String,
    pub description: String,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_dns_timeout")]
    pub dns_timeout_secs: u64,
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay")]
    pub retry_base_delay_ms: u64,
    #[serde(default)]
    pub provider: ProviderProfile,
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_dns_timeout() -> u64 {
    DEFAULT_DNS_TIMEOUT_SECS
}

fn default_probe_timeout() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_retry_delay() -> u64 {
    RETRY_BASE_DELAY_MS
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            description: "Azure Blob Storage container discovery".to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            dns_timeout_secs: DEFAULT_DNS_TIMEOUT_SECS,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay_ms: RETRY_BASE_DELAY_MS,
            provider: ProviderProfile::default(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: ScanConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        fs::write(path, yaml).context(format!("Failed to write config to {}", path.display()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Write the default configuration to `path`
    pub fn create_default_config_file(path: &Path) -> Result<()> {
        Self::default().save_to_yaml_file(path)
    }

    /// Reject settings the scanner cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            bail!("Concurrency must be at least 1");
        }
        if self.concurrency > MAX_CONCURRENCY {
            bail!(
                "Concurrency {} exceeds the maximum of {}",
                self.concurrency,
                MAX_CONCURRENCY
            );
        }
        if self.dns_timeout_secs == 0 || self.probe_timeout_secs == 0 {
            bail!("Timeouts must be at least one second");
        }
        if self.provider.host_suffix.is_empty() {
            bail!("Provider '{}' has an empty host suffix", self.provider.name);
        }
        if self.provider.scheme != "https" && self.provider.scheme != "http" {
            bail!("Unsupported URL scheme '{}'", self.provider.scheme);
        }
        Ok(())
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

/// Load the configuration file if one was given, otherwise use the defaults
pub fn load_or_create_config(config_path: Option<&Path>) -> Result<ScanConfig> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ScanConfig::from_yaml_file(path)?
        }
        None => {
            debug!("No configuration file given, using defaults");
            ScanConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}
