// SPDX-License-Identifier: Apache-2.0

//! GitHub issue fetching.
//!
//! Retrieves a single issue's details for the analysis pipeline. Every call
//! issues a fresh authenticated request: no caching, no retries. A transient
//! failure surfaces on first occurrence.

use bon::Builder;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Result;

/// Details about an issue under analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
pub struct IssueDetails {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Issue number.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue body (markdown content, empty when the API returns null).
    pub body: String,
    /// Current labels on the issue.
    pub labels: Vec<String>,
    /// Issue author handle.
    pub author: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Issue URL.
    pub url: String,
}

/// Fetches issue details from GitHub.
///
/// # Errors
///
/// Returns `IssueLensError::Fetch` if the API request fails or the issue is
/// not found. Validation of the issue number beyond being a positive integer
/// is left to the remote API.
#[instrument(skip(client), fields(owner = %owner, repo = %repo, number = number))]
pub async fn fetch_issue(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<IssueDetails> {
    debug!("Fetching issue details");

    let issue = client.issues(owner, repo).get(number).await?;

    let labels: Vec<String> = issue.labels.iter().map(|l| l.name.clone()).collect();

    let details = IssueDetails::builder()
        .owner(owner.to_string())
        .repo(repo.to_string())
        .number(number)
        .title(issue.title)
        .body(issue.body.unwrap_or_default())
        .labels(labels)
        .author(issue.user.login)
        .created_at(issue.created_at.to_rfc3339())
        .url(issue.html_url.to_string())
        .build();

    debug!(
        labels = details.labels.len(),
        body_len = details.body.len(),
        "Fetched issue details"
    );

    Ok(details)
}
