//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `host_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C handling
//! - Exit codes: 0 on completion, 1 on fatal errors, 130 when interrupted

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use tokio_util::sync::CancellationToken;

use host_status::initialization::init_logger_with;
use host_status::{run_probe, Config, ConsoleSink, InputError, Opt};

const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping workers");
            on_interrupt.cancel();
        }
    });

    let sink = ConsoleSink::stdout(config.output, config.color);
    match run_probe(config, sink, cancel).await {
        Ok(report) if report.cancelled => process::exit(EXIT_INTERRUPTED),
        Ok(_) => Ok(()),
        Err(e) => {
            if e.downcast_ref::<InputError>().is_some() {
                eprintln!("host_status error: {:#} (no targets were probed)", e);
            } else {
                eprintln!("host_status error: {:#}", e);
            }
            process::exit(1);
        }
    }
}
