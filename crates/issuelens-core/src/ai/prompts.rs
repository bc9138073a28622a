// SPDX-License-Identifier: Apache-2.0

//! Prompt templates for the three AI operations.
//!
//! Each operation interpolates the issue's title and body into a fixed
//! natural-language template. Responses are consumed as free text.

use std::fmt::Write;

use crate::github::issues::IssueDetails;
use crate::utils::truncate_with_suffix;

/// Maximum length for issue body to stay within token limits.
pub const MAX_BODY_LENGTH: usize = 4000;

/// Placeholder used when an issue has no body.
const EMPTY_BODY_PLACEHOLDER: &str = "[No description provided]";

/// Builds the shared issue context embedded in every prompt.
fn issue_context(issue: &IssueDetails) -> String {
    let mut context = String::new();

    context.push_str("<issue_content>\n");
    let _ = writeln!(context, "Title: {}\n", issue.title);

    let body = if issue.body.is_empty() {
        EMPTY_BODY_PLACEHOLDER.to_string()
    } else if issue.body.chars().count() > MAX_BODY_LENGTH {
        format!(
            "{}\n[Body truncated - original length: {} chars]",
            truncate_with_suffix(&issue.body, MAX_BODY_LENGTH, "..."),
            issue.body.chars().count()
        )
    } else {
        issue.body.clone()
    };
    let _ = writeln!(context, "Body:\n{body}");
    context.push_str("</issue_content>");

    context
}

/// Builds the prompt for free-form insight.
///
/// Requests a structured four-part answer as free text; no parsing is
/// imposed on the response.
#[must_use]
pub fn build_insight_prompt(issue: &IssueDetails) -> String {
    format!(
        "You are an OSS issue analysis assistant. Analyze the following GitHub \
         issue and respond in plain text with four short sections:\n\
         1. Summary - what the issue is about\n\
         2. Root Cause - the most likely underlying cause\n\
         3. Fix Plan - concrete steps to resolve it\n\
         4. Recommendations - anything the reporter or maintainers should do\n\n\
         Be concise and actionable.\n\n{}",
        issue_context(issue)
    )
}

/// Builds the prompt for label suggestion.
///
/// Requests 3-5 labels, one per line, with no extra commentary.
#[must_use]
pub fn build_labels_prompt(issue: &IssueDetails) -> String {
    format!(
        "Suggest 3-5 GitHub labels for the following issue. Respond with one \
         label per line and nothing else - no numbering, no commentary. \
         Common labels include: bug, enhancement, documentation, question, \
         performance, security.\n\n{}",
        issue_context(issue)
    )
}

/// Builds the prompt for prioritization.
///
/// Requests one of Low, Medium, High, or Critical plus a justification. The
/// response is surfaced verbatim; callers must not assume a literal match
/// to the four levels.
#[must_use]
pub fn build_priority_prompt(issue: &IssueDetails) -> String {
    format!(
        "Assign a priority to the following GitHub issue. Respond with one of \
         Low, Medium, High, or Critical, followed by a one-sentence \
         justification.\n\n{}",
        issue_context(issue)
    )
}
