// SPDX-License-Identifier: Apache-2.0

//! The issue analysis pipeline.
//!
//! Sequences fetch, local analysis, AI calls, and report assembly, exposing
//! one entry point per report type. Every entry point issues a fresh fetch
//! (no caching across operations; a mutation of the remote issue between
//! calls may be observed) and never surfaces a raw error: fetch or AI
//! failures are logged and replaced with fixed degraded placeholders.
//! Within one report, the three AI calls degrade independently; a fetch
//! failure degrades the whole operation since nothing downstream is
//! computable without the issue.

use octocrab::Octocrab;
use secrecy::SecretString;
use tracing::{instrument, warn};

use crate::Result;
use crate::ai::InsightClient;
use crate::analysis;
use crate::config::{AppConfig, GITHUB_TOKEN_ENV};
use crate::error::IssueLensError;
use crate::github;
use crate::github::issues::{IssueDetails, fetch_issue};
use crate::report::{self, ReportArtifact};

/// Placeholder when the analysis report cannot be produced.
pub const DEGRADED_ANALYSIS: &str =
    "Analysis unavailable: the issue could not be fetched from GitHub.";

/// Placeholder when the AI insight call fails.
pub const DEGRADED_INSIGHT: &str =
    "AI insight unavailable: the generative service did not respond.";

/// Placeholder when label suggestion fails.
pub const DEGRADED_LABELS: &str =
    "Label suggestions unavailable: the issue could not be analyzed.";

/// Placeholder when prioritization fails.
pub const DEGRADED_PRIORITY: &str =
    "Priority suggestion unavailable: the issue could not be analyzed.";

/// Placeholder document body when the HTML report cannot be produced.
pub const DEGRADED_REPORT: &str =
    "Report unavailable: the issue could not be fetched from GitHub.";

/// The top-level pipeline over one configured repository.
pub struct Pipeline {
    config: AppConfig,
    github: Octocrab,
    ai: InsightClient,
}

impl Pipeline {
    /// Creates a pipeline from configuration.
    ///
    /// Resolves the GitHub token from the environment and builds both
    /// remote clients. All configuration is validated here, before any
    /// pipeline operation runs.
    ///
    /// # Errors
    ///
    /// Returns `IssueLensError::Config` if the target repository, the
    /// `GITHUB_TOKEN` environment variable, or the AI key is missing.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.require_github_repo()?;

        let token = std::env::var(GITHUB_TOKEN_ENV).map_err(|_| IssueLensError::Config {
            message: format!(
                "Missing {GITHUB_TOKEN_ENV} environment variable.\n\
                 Set it with: export {GITHUB_TOKEN_ENV}=your_token"
            ),
        })?;
        let github = github::build_client(&SecretString::from(token))?;
        let ai = InsightClient::new(&config.ai)?;

        Ok(Self { config, github, ai })
    }

    /// Creates a pipeline with injected clients.
    ///
    /// Used by tests and embedders that resolve credentials themselves.
    ///
    /// # Errors
    ///
    /// Returns `IssueLensError::Config` if no target repository is
    /// configured.
    pub fn with_clients(config: AppConfig, github: Octocrab, ai: InsightClient) -> Result<Self> {
        config.require_github_repo()?;
        Ok(Self { config, github, ai })
    }

    /// Fetches the issue fresh from the configured repository.
    async fn fetch(&self, number: u64) -> Result<IssueDetails> {
        fetch_issue(
            &self.github,
            &self.config.github.owner,
            &self.config.github.repo,
            number,
        )
        .await
    }

    /// Produces the plain text analysis report for an issue.
    ///
    /// Returns [`DEGRADED_ANALYSIS`] if the issue cannot be fetched; a
    /// failed AI insight call degrades only the insight section.
    #[instrument(skip(self))]
    pub async fn analyze_issue(&self, number: u64) -> String {
        let issue = match self.fetch(number).await {
            Ok(issue) => issue,
            Err(e) => {
                warn!(error = %e, number, "Analysis degraded: fetch failed");
                return DEGRADED_ANALYSIS.to_string();
            }
        };

        let result = analysis::analyze(&issue);
        let insight = degrade(self.ai.get_insight(&issue).await, DEGRADED_INSIGHT);

        report::assemble_text(&issue, &result, &insight)
    }

    /// Suggests labels for an issue.
    ///
    /// Returns a single [`DEGRADED_LABELS`] line if the fetch or the AI
    /// call fails.
    #[instrument(skip(self))]
    pub async fn suggest_labels(&self, number: u64) -> Vec<String> {
        let labels = match self.fetch(number).await {
            Ok(issue) => self.ai.suggest_labels(&issue).await,
            Err(e) => Err(e),
        };

        match labels {
            Ok(labels) => labels,
            Err(e) => {
                warn!(error = %e, number, "Label suggestion degraded");
                vec![DEGRADED_LABELS.to_string()]
            }
        }
    }

    /// Suggests a priority for an issue.
    ///
    /// Returns [`DEGRADED_PRIORITY`] if the fetch or the AI call fails.
    #[instrument(skip(self))]
    pub async fn prioritize_issue(&self, number: u64) -> String {
        let priority = match self.fetch(number).await {
            Ok(issue) => self.ai.prioritize(&issue).await,
            Err(e) => Err(e),
        };

        degrade(priority, DEGRADED_PRIORITY)
    }

    /// Produces the full HTML report artifact for an issue.
    ///
    /// The three AI calls degrade independently: a failed label suggestion
    /// does not block prioritization, and vice versa. Only a fetch failure
    /// degrades the whole document.
    #[instrument(skip(self))]
    pub async fn generate_html_report(&self, number: u64) -> ReportArtifact {
        let filename = report::report_filename(number);

        let issue = match self.fetch(number).await {
            Ok(issue) => issue,
            Err(e) => {
                warn!(error = %e, number, "Report degraded: fetch failed");
                return ReportArtifact {
                    filename,
                    html: degraded_report_html(number),
                };
            }
        };

        let result = analysis::analyze(&issue);
        let insight = degrade(self.ai.get_insight(&issue).await, DEGRADED_INSIGHT);
        let labels = match self.ai.suggest_labels(&issue).await {
            Ok(labels) => labels,
            Err(e) => {
                warn!(error = %e, number, "Label suggestion degraded");
                vec![DEGRADED_LABELS.to_string()]
            }
        };
        let priority = degrade(self.ai.prioritize(&issue).await, DEGRADED_PRIORITY);

        ReportArtifact {
            filename,
            html: report::assemble_html(&issue, &result, &insight, &labels, &priority),
        }
    }
}

/// Substitutes a fixed placeholder for a failed pipeline output.
fn degrade(result: Result<String>, placeholder: &str) -> String {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Pipeline output degraded");
            placeholder.to_string()
        }
    }
}

/// Minimal HTML document carrying the degraded-report message.
fn degraded_report_html(number: u64) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>Issue #{number} Analysis</title></head>\n\
         <body><p>{DEGRADED_REPORT}</p></body>\n\
         </html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrade_passes_through_success() {
        assert_eq!(degrade(Ok("fine".to_string()), DEGRADED_INSIGHT), "fine");
    }

    #[test]
    fn degrade_substitutes_placeholder_on_error() {
        let err = Err(IssueLensError::Fetch {
            message: "404 Not Found".to_string(),
        });
        assert_eq!(degrade(err, DEGRADED_ANALYSIS), DEGRADED_ANALYSIS);
    }

    #[test]
    fn degraded_report_html_is_a_complete_document() {
        let html = degraded_report_html(7);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Issue #7 Analysis"));
        assert!(html.contains(DEGRADED_REPORT));
    }

    #[tokio::test]
    async fn with_clients_rejects_missing_repo() {
        let config = AppConfig::default();
        let github = Octocrab::builder().build().unwrap();
        let ai = InsightClient::with_api_key(
            SecretString::from("test_key"),
            &crate::config::AiConfig::default(),
        )
        .unwrap();
        assert!(Pipeline::with_clients(config, github, ai).is_err());
    }

    #[tokio::test]
    async fn analyze_issue_degrades_when_fetch_fails() {
        let mut config = AppConfig::default();
        config.github.owner = "block".to_string();
        config.github.repo = "goose".to_string();

        // An octocrab client pointed at a closed local port fails fast.
        let github = Octocrab::builder()
            .base_uri("http://127.0.0.1:9")
            .unwrap()
            .build()
            .unwrap();
        let ai = InsightClient::with_api_key(
            SecretString::from("test_key"),
            &crate::config::AiConfig::default(),
        )
        .unwrap();
        let pipeline = Pipeline::with_clients(config, github, ai).unwrap();

        assert_eq!(pipeline.analyze_issue(404).await, DEGRADED_ANALYSIS);
        assert_eq!(
            pipeline.suggest_labels(404).await,
            vec![DEGRADED_LABELS.to_string()]
        );
        assert_eq!(pipeline.prioritize_issue(404).await, DEGRADED_PRIORITY);

        let artifact = pipeline.generate_html_report(404).await;
        assert_eq!(artifact.filename, "issue-404-report.html");
        assert!(artifact.html.contains(DEGRADED_REPORT));
    }
}
