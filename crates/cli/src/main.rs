// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shopmon: Shopware Monitoring CLI.
//!
//! Parses arguments, resolves configuration once, and delegates to command
//! implementations. Commands return exit codes; only this file terminates
//! the process.

mod commands;
mod exit_error;

use clap::{Parser, Subcommand};
use shopmon_core::{Config, SystemClock};
use shopmon_telemetry::TelemetryClient;
use std::path::Path;

use exit_error::ExitError;

#[derive(Parser)]
#[command(
    name = "shopmon",
    version,
    about = "Shopware Monitoring CLI",
    long_about = "A CLI tool for monitoring and managing Shopware applications."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute and monitor deployment commands
    #[command(
        after_help = "Examples:\n  shopmon deploy -- php artisan migrate\n  shopmon deploy -- composer install"
    )]
    Deploy {
        /// Command to execute, given after `--`
        #[arg(raw = true)]
        command: Vec<String>,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();

    let outcome = match cli.command {
        Commands::Deploy { command } => deploy(&config, &command),
    };

    match outcome {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.code);
        }
    }
}

fn deploy(config: &Config, command: &[String]) -> Result<i32, ExitError> {
    if config.api_token.is_none() {
        return Err(ExitError::new(
            1,
            "SHOPMON_API_KEY environment variable must be set to use this command",
        ));
    }

    let telemetry = TelemetryClient::new(config);
    let mut stdout = std::io::stdout();
    commands::deploy::run(
        config,
        command,
        Path::new(commands::deploy::COMPOSER_MANIFEST),
        &mut stdout,
        &telemetry,
        &SystemClock,
    )
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
