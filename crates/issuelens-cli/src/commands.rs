// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the IssueLens CLI.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use issuelens_core::{AppConfig, Pipeline};

use crate::cli::Commands;
use crate::output;

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, config: AppConfig) -> Result<()> {
    let pipeline = Pipeline::new(config)?;

    match command {
        Commands::Analyze { number } => {
            debug!(number, "Running analysis");
            let report = pipeline.analyze_issue(number).await;
            println!("{report}");
        }

        Commands::Labels { number } => {
            debug!(number, "Suggesting labels");
            let labels = pipeline.suggest_labels(number).await;
            output::render_labels(&labels);
        }

        Commands::Priority { number } => {
            debug!(number, "Suggesting priority");
            let priority = pipeline.prioritize_issue(number).await;
            output::render_priority(&priority);
        }

        Commands::Report { number, out } => {
            debug!(number, "Generating HTML report");
            let artifact = pipeline.generate_html_report(number).await;
            let path = out.unwrap_or_else(|| PathBuf::from(&artifact.filename));
            output::write_report(&path, &artifact)?;
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}
