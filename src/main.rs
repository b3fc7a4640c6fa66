use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::Parser;
use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use rust_blobfinder::cli::{Args, Commands};
use rust_blobfinder::config::{load_or_create_config, ScanConfig};
use rust_blobfinder::constants::PROGRESS_REPORT_INTERVAL_SECS;
use rust_blobfinder::scanner::progress::spawn_progress_reporter;
use rust_blobfinder::scanner::{ScanOutcome, Scanner};
use rust_blobfinder::utils::{input, report, summary};

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    // Handle subcommands
    if let Some(cmd) = &args.command {
        return handle_subcommand(cmd);
    }

    let name_list = args
        .name_list
        .as_deref()
        .ok_or_else(|| anyhow!("A name list file is required, see --help for usage"))?;

    // Load and process configuration
    let config = load_and_process_config(&args)?;

    let lines = input::read_name_list(name_list)?;
    info!("Processing {} entries from the name list file...", lines.len());

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    let started = Utc::now();
    let outcome = runtime.block_on(run_scan(&config, lines))?;
    let finished = Utc::now();

    print!("{}", report::render_text(&outcome.reports, args.only_found));

    if let Some(path) = &args.json {
        write_summary(path, &outcome, &config, started, finished)?;
    }

    if outcome.skipped > 0 {
        warn!("Scan interrupted: {} entries were not processed", outcome.skipped);
    }
    info!("Processing complete.");
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Handle subcommands
fn handle_subcommand(cmd: &Commands) -> Result<()> {
    match cmd {
        Commands::InitConfig { path } => {
            info!("Creating default configuration file at {}", path.display());
            ScanConfig::create_default_config_file(path)?;
            info!("Configuration created successfully");
            Ok(())
        }
    }
}

/// Load configuration and apply command-line overrides
fn load_and_process_config(args: &Args) -> Result<ScanConfig> {
    let mut config = load_or_create_config(args.config.as_deref())?;
    args.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Run the scan with Ctrl-C cancellation and periodic progress logging
async fn run_scan(config: &ScanConfig, lines: Vec<String>) -> Result<ScanOutcome> {
    let scanner = Scanner::from_config(config)?;
    let total = lines.len();

    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, finishing in-flight entries");
            signal_token.cancel();
        }
    });

    let done = CancellationToken::new();
    let progress = spawn_progress_reporter(
        scanner.completed_counter(),
        total,
        Duration::from_secs(PROGRESS_REPORT_INTERVAL_SECS),
        done.clone(),
    );

    let outcome = scanner.run(lines, cancel).await;

    done.cancel();
    if let Err(e) = progress.await {
        warn!("Progress reporter failed: {}", e);
    }

    Ok(outcome)
}

/// Write the JSON scan summary
fn write_summary(
    path: &Path,
    outcome: &ScanOutcome,
    config: &ScanConfig,
    started: chrono::DateTime<Utc>,
    finished: chrono::DateTime<Utc>,
) -> Result<()> {
    let json = summary::create_scan_summary(outcome, config, started, finished)?;
    summary::write_scan_summary(path, &json)
}
