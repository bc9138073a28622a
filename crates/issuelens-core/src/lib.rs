// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # IssueLens Core
//!
//! Core library for the IssueLens CLI - AI-assisted GitHub issue analysis.
//!
//! This crate provides reusable components for:
//! - Fetching a single issue from GitHub
//! - Local text analysis (code blocks, mentions, summary)
//! - Heuristic language detection
//! - Rule-based suggestions
//! - AI-generated insight, label, and priority suggestions
//! - Assembling the combined findings into text and HTML reports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use issuelens_core::{Pipeline, load_config};
//!
//! # async fn example() -> issuelens_core::Result<()> {
//! // Load configuration (repository target plus AI settings)
//! let config = load_config()?;
//!
//! // Build the pipeline (validates credentials up front)
//! let pipeline = Pipeline::new(config)?;
//!
//! // Produce the text analysis report for issue #42
//! let report = pipeline.analyze_issue(42).await;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ai`] - AI integration (insight, labels, priority)
//! - [`analysis`] - local text analysis, language detection, suggestions
//! - [`config`] - configuration loading and paths
//! - [`error`] - error types
//! - [`github`] - GitHub API (client, issue fetch)
//! - [`pipeline`] - the top-level orchestration
//! - [`report`] - text and HTML report assembly

// ============================================================================
// Error Handling
// ============================================================================

pub use error::IssueLensError;

/// Convenience Result type for IssueLens operations.
///
/// This is equivalent to `std::result::Result<T, IssueLensError>`.
pub type Result<T> = std::result::Result<T, IssueLensError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AiConfig, AppConfig, GitHubConfig, TaskType, config_dir, config_file_path, load_config,
};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::issues::IssueDetails;
pub use github::parse_owner_repo;

// ============================================================================
// Local Analysis
// ============================================================================

pub use analysis::{AnalysisResult, CodeBlock, LanguageDetector};

// ============================================================================
// AI Integration
// ============================================================================

pub use ai::InsightClient;

// ============================================================================
// Reports
// ============================================================================

pub use report::{ReportArtifact, assemble_html, assemble_text, escape_html};

// ============================================================================
// Pipeline
// ============================================================================

pub use pipeline::Pipeline;

// ============================================================================
// Modules
// ============================================================================

pub mod ai;
pub mod analysis;
pub mod config;
pub mod error;
pub mod github;
pub mod pipeline;
pub mod report;
pub mod utils;
