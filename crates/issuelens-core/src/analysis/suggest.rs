// SPDX-License-Identifier: Apache-2.0

//! Rule-based advisory suggestions over the issue shape.
//!
//! Deterministic rules evaluated in a fixed order; all matching rules fire.
//! The output always begins with a fixed header line, even when no rule
//! fires.

use crate::github::issues::IssueDetails;

use super::text::extract_code_blocks;

/// Header line always present as the first element of the suggestion list.
pub const SUGGESTIONS_HEADER: &str = "Suggestions:";

/// Minimum body length (characters) below which the "too short" rule fires.
const MIN_BODY_CHARS: usize = 50;

/// Advisory for a missing or empty body.
const NO_DESCRIPTION_ADVICE: &str =
    "- Add a description: the issue has no body for contributors to work from.";

/// Advisory for a very short body.
const SHORT_DESCRIPTION_ADVICE: &str =
    "- The description is very short; more detail would help reproduce the problem.";

/// Advisory for a body without code blocks.
const NO_CODE_BLOCKS_ADVICE: &str =
    "- No code blocks found; a minimal reproduction snippet speeds up triage.";

/// Advisory for an unlabeled issue.
const NO_LABELS_ADVICE: &str =
    "- No labels are set; labeling the issue improves discoverability.";

/// Generates advisory lines for an issue.
///
/// Rules, in order:
/// 1. Missing or empty body, or else
/// 2. body shorter than 50 characters;
/// 3. no extractable code blocks;
/// 4. zero labels.
///
/// Rules 1 and 2 are mutually exclusive; 3 and 4 fire independently. Each
/// fired rule appends exactly one line below the header.
#[must_use]
pub fn suggest(issue: &IssueDetails) -> Vec<String> {
    let mut lines = vec![SUGGESTIONS_HEADER.to_string()];

    if issue.body.trim().is_empty() {
        lines.push(NO_DESCRIPTION_ADVICE.to_string());
    } else if issue.body.chars().count() < MIN_BODY_CHARS {
        lines.push(SHORT_DESCRIPTION_ADVICE.to_string());
    }

    if extract_code_blocks(&issue.body).is_empty() {
        lines.push(NO_CODE_BLOCKS_ADVICE.to_string());
    }

    if issue.labels.is_empty() {
        lines.push(NO_LABELS_ADVICE.to_string());
    }

    lines
}
