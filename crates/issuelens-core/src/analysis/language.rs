// SPDX-License-Identifier: Apache-2.0

//! Heuristic source-language detection for extracted code blocks.
//!
//! Substring-keyword matching against a fixed, hand-authored table. This is
//! not a tokenizing or statistical classifier: substring collisions produce
//! known false positives and languages outside the table are never detected.
//! The detector sits behind a named type so a stronger classifier can be
//! substituted without touching callers.

use std::collections::BTreeSet;

use super::text::CodeBlock;

/// A language paired with its literal substring hints.
struct LanguageHints {
    language: &'static str,
    hints: &'static [&'static str],
}

/// Ordered hint table. The first language whose any hint is a substring of a
/// block's raw text is recorded for that block; scanning for that block then
/// stops.
static LANGUAGE_HINTS: &[LanguageHints] = &[
    LanguageHints {
        language: "rust",
        hints: &["fn ", "impl ", "let mut ", "println!"],
    },
    LanguageHints {
        language: "python",
        hints: &["def ", "import ", "print(", "self."],
    },
    LanguageHints {
        language: "javascript",
        hints: &["function ", "const ", "=>", "console.log"],
    },
    LanguageHints {
        language: "typescript",
        hints: &["interface ", ": string", ": number", "export type"],
    },
    LanguageHints {
        language: "java",
        hints: &["public class ", "System.out", "import java"],
    },
    LanguageHints {
        language: "go",
        hints: &["func ", "package main", ":="],
    },
    LanguageHints {
        language: "c",
        hints: &["#include", "int main(", "printf("],
    },
    LanguageHints {
        language: "shell",
        hints: &["#!/bin/", "sudo ", "apt-get"],
    },
    LanguageHints {
        language: "sql",
        hints: &["SELECT ", "INSERT INTO", "CREATE TABLE"],
    },
];

/// Heuristic classifier mapping code blocks to probable language tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct LanguageDetector;

impl LanguageDetector {
    /// Creates a new detector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Detects probable languages across the given code blocks.
    ///
    /// First match wins per block; a block matching no hint contributes
    /// nothing. The result is deduplicated and insertion order is
    /// irrelevant.
    #[must_use]
    pub fn detect(&self, code_blocks: &[CodeBlock]) -> BTreeSet<String> {
        let mut languages = BTreeSet::new();

        for block in code_blocks {
            let matched = LANGUAGE_HINTS.iter().find(|entry| {
                entry.hints.iter().any(|hint| block.content.contains(hint))
            });
            if let Some(entry) = matched {
                languages.insert(entry.language.to_string());
            }
        }

        languages
    }
}
