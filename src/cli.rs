use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ScanConfig;
use crate::constants::DEFAULT_CONFIG_NAME;

/// Command-line arguments for the blobfinder tool.
///
/// Scan tunables given here override the values from the configuration
/// file.
#[derive(Parser, Debug)]
#[clap(
    name = "rust-blobfinder",
    about = "Test for the presence of publicly listable cloud storage containers",
    after_help = "The name list file holds one entry per line, either storageaccount:containername \
                  or a single string used as both the storage account and container name \
                  (ex. falsimentis:falsimentis-container or falsimentis). Invalid names are skipped."
)]
pub struct Args {
    /// Name list file (required unless a subcommand is given)
    pub name_list: Option<PathBuf>,

    /// Path to configuration YAML file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Number of candidates probed concurrently
    #[clap(short = 'w', long)]
    pub concurrency: Option<usize>,

    /// DNS resolution timeout in seconds
    #[clap(long)]
    pub dns_timeout: Option<u64>,

    /// Listing request timeout in seconds
    #[clap(long)]
    pub probe_timeout: Option<u64>,

    /// Retries after a connection failure
    #[clap(long)]
    pub retries: Option<u32>,

    /// Write a JSON summary of the scan to this path
    #[clap(long)]
    pub json: Option<PathBuf>,

    /// Only print candidates whose container listing succeeded
    #[clap(long)]
    pub only_found: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut ScanConfig) {
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if let Some(secs) = self.dns_timeout {
            config.dns_timeout_secs = secs;
        }
        if let Some(secs) = self.probe_timeout {
            config.probe_timeout_secs = secs;
        }
        if let Some(retries) = self.retries {
            config.max_retries = retries;
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default configuration file
    InitConfig {
        /// Path to output configuration file
        #[clap(default_value = DEFAULT_CONFIG_NAME)]
        path: PathBuf,
    },
}
