// SPDX-License-Identifier: Apache-2.0

//! GitHub API integration.
//!
//! Provides the authenticated octocrab client and issue fetching.

pub mod issues;

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};

use crate::error::IssueLensError;

/// Builds an authenticated octocrab client from a personal token.
///
/// # Errors
///
/// Returns `IssueLensError::Fetch` if the client cannot be constructed.
pub fn build_client(token: &SecretString) -> Result<Octocrab, IssueLensError> {
    Ok(Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .build()?)
}

/// Parses an owner/repo string to extract owner and repo.
///
/// Validates format: exactly one `/`, non-empty parts.
///
/// # Errors
///
/// Returns `IssueLensError::Config` if the format is invalid.
pub fn parse_owner_repo(s: &str) -> Result<(String, String), IssueLensError> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(IssueLensError::Config {
            message: format!(
                "Invalid owner/repo format.\n\
                 Expected: owner/repo\n\
                 Got: {s}"
            ),
        });
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
