// SPDX-License-Identifier: Apache-2.0

//! Local issue analysis.
//!
//! Pure, synchronous derivation of structural and heuristic facts from one
//! fetched issue: summary, code blocks, detected languages, mentions, and
//! rule-based suggestions. No I/O; results are ephemeral and recomputed on
//! every pipeline run.

pub mod language;
pub mod suggest;
pub mod text;

use std::collections::BTreeSet;

use crate::github::issues::IssueDetails;

pub use language::LanguageDetector;
pub use text::{CodeBlock, NO_DESCRIPTION};

/// Derived facts about one issue, owned by a single pipeline invocation.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Short summary of the body text.
    pub summary: String,
    /// Fenced code blocks, in body order.
    pub code_blocks: Vec<CodeBlock>,
    /// Detected language tags, deduplicated.
    pub languages: BTreeSet<String>,
    /// `@handle` mentions, in order of appearance, duplicates preserved.
    pub mentions: Vec<String>,
    /// Advisory lines, header first.
    pub suggestions: Vec<String>,
}

/// Runs the full local analysis over a fetched issue.
#[must_use]
pub fn analyze(issue: &IssueDetails) -> AnalysisResult {
    let code_blocks = text::extract_code_blocks(&issue.body);
    let languages = LanguageDetector::new().detect(&code_blocks);

    AnalysisResult {
        summary: text::summarize(&issue.body),
        mentions: text::extract_mentions(&issue.body),
        suggestions: suggest::suggest(issue),
        code_blocks,
        languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_issue() -> IssueDetails {
        IssueDetails::builder()
            .owner("block".to_string())
            .repo("goose".to_string())
            .number(2)
            .title("Bug: crash on startup".to_string())
            .body("App crashes at boot.\n```\nfunction foo() {}\n```\ncc @maintainer".to_string())
            .labels(vec!["bug".to_string(), "p1".to_string()])
            .author("reporter".to_string())
            .created_at("2026-07-01T12:00:00+00:00".to_string())
            .url("https://github.com/block/goose/issues/2".to_string())
            .build()
    }

    #[test]
    fn analyze_composes_all_analyzers() {
        let result = analyze(&sample_issue());
        assert_eq!(result.code_blocks.len(), 1);
        assert!(result.languages.contains("javascript"));
        assert_eq!(result.mentions, vec!["maintainer".to_string()]);
        assert!(result.summary.starts_with("App crashes at boot."));
        assert_eq!(result.suggestions[0], suggest::SUGGESTIONS_HEADER);
    }

    #[test]
    fn analyze_is_idempotent() {
        let issue = sample_issue();
        let first = analyze(&issue);
        let second = analyze(&issue);
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.code_blocks, second.code_blocks);
        assert_eq!(first.languages, second.languages);
        assert_eq!(first.mentions, second.mentions);
        assert_eq!(first.suggestions, second.suggestions);
    }
}
