// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for IssueLens.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// IssueLens - AI-assisted GitHub issue analysis.
///
/// Fetches one issue, derives structural facts about its text, asks a
/// generative-language service for qualitative insight, and assembles the
/// combined findings into a report. Advisory only: the issue tracker is
/// never modified.
#[derive(Parser)]
#[command(name = "issuelens")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Target repository in owner/repo format (overrides config)
    #[arg(long, short = 'r', global = true)]
    pub repo: Option<String>,

    /// Override the configured AI model for insight and labels
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the plain text analysis report for an issue
    Analyze {
        /// Issue number
        number: u64,
    },

    /// Print AI-suggested labels for an issue
    Labels {
        /// Issue number
        number: u64,
    },

    /// Print an AI-suggested priority for an issue
    Priority {
        /// Issue number
        number: u64,
    },

    /// Write the full HTML report for an issue
    Report {
        /// Issue number
        number: u64,

        /// Output path (defaults to issue-{number}-report.html)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}
