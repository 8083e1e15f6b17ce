//! xa
//!
//! Command-line entry point.

#![allow(clippy::print_stdout)]

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, init_logging};
use presentation_cli::cli::Cli;
use presentation_cli::commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging, cli.log_level())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &config, &mut out).await?;
    out.flush()?;
    Ok(())
}
