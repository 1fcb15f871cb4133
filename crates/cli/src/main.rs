// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kj - run Python scripts as Kubernetes Jobs

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::{job, presets, submit};
use error::KjError;
use kj_core::Config;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "kj",
    version,
    about = "kj - Run Python scripts and functions as Kubernetes Jobs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a Python script as a job
    Submit(submit::SubmitArgs),
    /// Show the status of a job
    Status(job::StatusArgs),
    /// Delete a job and its pods
    Delete(job::DeleteArgs),
    /// Preset document management
    Presets {
        #[command(subcommand)]
        command: presets::PresetsCommand,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();
    let config = Config::from_env();

    let result = match cli.command {
        Commands::Submit(args) => submit::handle(args, &config).await,
        Commands::Status(args) => job::status(args, &config).await,
        Commands::Delete(args) => job::delete(args, &config).await,
        Commands::Presets { command } => presets::handle(command, &config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<KjError>() {
                Some(kj) => eprint!("{}", kj),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
