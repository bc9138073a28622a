// SPDX-License-Identifier: Apache-2.0

//! IssueLens - AI-assisted GitHub issue analysis.
//!
//! A CLI tool that fetches one issue, analyzes its text locally, asks a
//! generative-language service for qualitative insight, and assembles the
//! combined findings into text and HTML reports.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use issuelens_core::{load_config, parse_owner_repo};
use tracing::debug;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // Load config early so a broken setup fails before any pipeline work
    let mut config = load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    // Apply CLI overrides to config
    if let Some(repo) = &cli.repo {
        let (owner, name) = parse_owner_repo(repo)?;
        debug!(owner = %owner, repo = %name, "Overriding target repository");
        config.github.owner = owner;
        config.github.repo = name;
    }

    if let Some(model) = &cli.model {
        config.ai.model.clone_from(model);
        debug!("Overriding AI model to: {model}");
    }

    match commands::run(cli.command, config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Err(e)
        }
    }
}
