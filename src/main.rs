// src/main.rs

use anyhow::Result;
use clap::Parser;
use readbench::cli::Cli;
use readbench::config::ConfigBuilder;
use readbench::errors::Error;
#[cfg(feature = "progress")]
use readbench::progress::IndicatifProgress;
use readbench::progress::ProgressReporter;
use readbench::shutdown::setup_signal_handler;
use readbench::{run, RunStatus};
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if cfg!(debug_assertions) {
            "readbench=debug"
        } else {
            "readbench=info"
        },
    ))
    .init();

    log::info!("Starting readbench v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let args = Cli::parse();

    // Decide whether to show a progress bar. Show it if stderr is a TTY.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Configuration & Execution ---
    let config = ConfigBuilder::from_cli(args).build()?;
    log::debug!("Configuration built successfully: {:?}", config);

    let token = setup_signal_handler()?;

    // --- Error Handling & Exit Status ---
    match run(&config, &token, progress_reporter) {
        Ok(RunStatus::Clean) => Ok(()),
        Ok(RunStatus::Partial) => {
            eprintln!("readbench: comparison finished with failures; see report.");
            std::process::exit(2);
        }
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
