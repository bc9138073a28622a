// SPDX-License-Identifier: Apache-2.0

//! Pure text analysis over issue bodies.
//!
//! Provides code-fence extraction, mention extraction, and body
//! summarization. All functions are pure: same input, same output, no I/O.

use std::sync::LazyLock;

use regex::Regex;

/// Fence marker for embedded code blocks.
const FENCE_MARKER: &str = "```";

/// Maximum number of body lines included in a summary.
const SUMMARY_MAX_LINES: usize = 5;

/// Maximum number of characters in a summary before the ellipsis.
const SUMMARY_MAX_CHARS: usize = 200;

/// Ellipsis appended to every non-empty summary.
const SUMMARY_ELLIPSIS: &str = "...";

/// Sentinel returned when an issue has no body to summarize.
pub const NO_DESCRIPTION: &str = "No description provided.";

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)").expect("valid mention pattern"));

/// A fenced code block extracted from an issue body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Block text, trimmed of leading/trailing whitespace.
    pub content: String,
}

/// Extracts fenced code blocks from an issue body, in body order.
///
/// Scans lines with a single in-fence/out-of-fence state, toggled by any
/// line whose trimmed content starts with the triple-backtick marker. Lines
/// inside a fence are accumulated verbatim, each followed by a line
/// terminator, and the accumulated text is trimmed before being emitted.
///
/// An opening fence that is never closed contributes no block: the content
/// after the dangling fence is dropped, not emitted and not an error. An
/// empty body yields an empty sequence.
#[must_use]
pub fn extract_code_blocks(body: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut inside_fence = false;
    let mut current = String::new();

    for line in body.lines() {
        if line.trim().starts_with(FENCE_MARKER) {
            if inside_fence {
                blocks.push(CodeBlock {
                    content: current.trim().to_string(),
                });
                current.clear();
            }
            inside_fence = !inside_fence;
            continue;
        }
        if inside_fence {
            current.push_str(line);
            current.push('\n');
        }
    }

    blocks
}

/// Extracts `@handle` mentions from an issue body, in order of appearance.
///
/// A handle is the maximal run of word characters (letters, digits,
/// underscore) following `@`. Duplicates are preserved, not deduplicated.
#[must_use]
pub fn extract_mentions(body: &str) -> Vec<String> {
    MENTION_RE
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Summarizes an issue body.
///
/// Takes at most the first five lines, joins them with a line terminator,
/// truncates to at most 200 characters (character count, UTF-8 safe), and
/// appends a fixed ellipsis whether or not truncation occurred. An empty or
/// whitespace-only body yields the [`NO_DESCRIPTION`] sentinel instead.
#[must_use]
pub fn summarize(body: &str) -> String {
    if body.trim().is_empty() {
        return NO_DESCRIPTION.to_string();
    }

    let joined = body
        .lines()
        .take(SUMMARY_MAX_LINES)
        .collect::<Vec<_>>()
        .join("\n");
    let clipped: String = joined.chars().take(SUMMARY_MAX_CHARS).collect();

    format!("{clipped}{SUMMARY_ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // extract_code_blocks() tests
    // ========================================================================

    #[test]
    fn extract_single_block() {
        let body = "Intro\n```\nfunction foo() {}\n```\nOutro";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "function foo() {}");
    }

    #[test]
    fn extract_multiple_blocks_in_body_order() {
        let body = "```\nfirst\n```\ntext\n```\nsecond\n```";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, "first");
        assert_eq!(blocks[1].content, "second");
    }

    #[test]
    fn block_count_is_floor_of_fence_pairs() {
        // 5 fence lines -> 2 blocks, dangling content dropped
        let body = "```\na\n```\n```\nb\n```\n```\ndangling";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks.len(), 2);
        assert!(!blocks.iter().any(|b| b.content.contains("dangling")));
    }

    #[test]
    fn unterminated_fence_yields_no_block() {
        let body = "before\n```\nnever closed";
        assert!(extract_code_blocks(body).is_empty());
    }

    #[test]
    fn empty_body_yields_empty_sequence() {
        assert!(extract_code_blocks("").is_empty());
    }

    #[test]
    fn fence_with_language_tag_toggles() {
        let body = "```rust\nfn main() {}\n```";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "fn main() {}");
    }

    #[test]
    fn indented_fence_line_toggles() {
        let body = "  ```\nindented\n  ```";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "indented");
    }

    #[test]
    fn multiline_block_preserves_interior_lines() {
        let body = "```\nline one\n\nline three\n```";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks[0].content, "line one\n\nline three");
    }

    #[test]
    fn empty_block_still_counts() {
        let body = "```\n```";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "");
    }

    // ========================================================================
    // extract_mentions() tests
    // ========================================================================

    #[test]
    fn extract_mentions_in_order() {
        assert_eq!(
            extract_mentions("hi @alice and @bob_2"),
            vec!["alice".to_string(), "bob_2".to_string()]
        );
    }

    #[test]
    fn extract_mentions_keeps_duplicates() {
        assert_eq!(
            extract_mentions("@x @x"),
            vec!["x".to_string(), "x".to_string()]
        );
    }

    #[test]
    fn extract_mentions_stops_at_non_word_characters() {
        assert_eq!(extract_mentions("ping @carol."), vec!["carol".to_string()]);
    }

    #[test]
    fn extract_mentions_none_in_plain_text() {
        assert!(extract_mentions("no handles here").is_empty());
    }

    #[test]
    fn bare_at_sign_is_not_a_mention() {
        assert!(extract_mentions("a @ b").is_empty());
    }

    // ========================================================================
    // summarize() tests
    // ========================================================================

    #[test]
    fn summarize_empty_body_returns_sentinel() {
        assert_eq!(summarize(""), NO_DESCRIPTION);
        assert_eq!(summarize("   \n  "), NO_DESCRIPTION);
    }

    #[test]
    fn summarize_takes_first_five_lines() {
        let body = "1\n2\n3\n4\n5\n6\n7";
        let summary = summarize(body);
        assert!(summary.contains('5'));
        assert!(!summary.contains('6'));
    }

    #[test]
    fn summarize_always_appends_ellipsis() {
        assert_eq!(summarize("short"), "short...");
    }

    #[test]
    fn summarize_never_exceeds_203_chars() {
        let body = "x".repeat(1000);
        let summary = summarize(&body);
        assert_eq!(summary.chars().count(), 203);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn summarize_is_utf8_safe() {
        let body = "héllo wörld ".repeat(50);
        let summary = summarize(&body);
        assert!(summary.chars().count() <= 203);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn summarize_is_idempotent_per_input() {
        let body = "same input\nsecond line";
        assert_eq!(summarize(body), summarize(body));
    }
}
