// SPDX-License-Identifier: Apache-2.0

//! Report assembly.
//!
//! Composes local analysis and AI outputs into the final artifacts: a plain
//! text analysis block and an HTML document. Both assemblers are pure
//! functions of their inputs; writing the HTML to a file is delegated to an
//! external sink. All text interpolated into the HTML template is escaped
//! before embedding.

use std::fmt::Write;

use crate::analysis::AnalysisResult;
use crate::github::issues::IssueDetails;
use crate::utils::format_date;

/// The final HTML report artifact, written once to a sink then discarded.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    /// Suggested file name: `issue-{number}-report.html`.
    pub filename: String,
    /// Rendered HTML document.
    pub html: String,
}

/// Returns the report file name for an issue number.
#[must_use]
pub fn report_filename(number: u64) -> String {
    format!("issue-{number}-report.html")
}

/// Escapes text for safe interpolation into HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Assembles the plain text report.
///
/// Section order is fixed: header, metadata, labels (if any), description
/// summary, code-block count and detected languages (if any code blocks),
/// mentions (if any), suggestions, AI insight last.
#[must_use]
pub fn assemble_text(issue: &IssueDetails, analysis: &AnalysisResult, insight: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Issue Analysis Report");
    let _ = writeln!(out, "=====================");
    let _ = writeln!(out, "Issue #{}: {}", issue.number, issue.title);
    let _ = writeln!(out, "Author: {}", issue.author);
    let _ = writeln!(out, "Created: {}", issue.created_at);
    if !issue.labels.is_empty() {
        let _ = writeln!(out, "Labels: {}", issue.labels.join(", "));
    }
    out.push('\n');

    let _ = writeln!(out, "Description Summary:");
    let _ = writeln!(out, "{}", analysis.summary);
    out.push('\n');

    if !analysis.code_blocks.is_empty() {
        let _ = writeln!(out, "Code Blocks Found: {}", analysis.code_blocks.len());
        if !analysis.languages.is_empty() {
            let languages: Vec<&str> = analysis.languages.iter().map(String::as_str).collect();
            let _ = writeln!(out, "Languages detected: {}", languages.join(", "));
        }
        out.push('\n');
    }

    if !analysis.mentions.is_empty() {
        let _ = writeln!(out, "Mentions:");
        for mention in &analysis.mentions {
            let _ = writeln!(out, "- {mention}");
        }
        out.push('\n');
    }

    for line in &analysis.suggestions {
        let _ = writeln!(out, "{line}");
    }
    out.push('\n');

    let _ = writeln!(out, "AI Insight:");
    let _ = writeln!(out, "{insight}");

    out
}

/// Assembles the HTML report.
///
/// Renders the same sections as the text form into a static document
/// template, with label suggestions as discrete tags and the priority as a
/// highlighted line. Every interpolated string is escaped.
#[must_use]
pub fn assemble_html(
    issue: &IssueDetails,
    analysis: &AnalysisResult,
    insight: &str,
    label_suggestions: &[String],
    priority: &str,
) -> String {
    let mut sections = String::new();

    let _ = writeln!(
        sections,
        "  <h1>Issue #{}: {}</h1>",
        issue.number,
        escape_html(&issue.title)
    );
    let _ = writeln!(
        sections,
        "  <p class=\"meta\">Opened by {} on {}</p>",
        escape_html(&issue.author),
        escape_html(&format_date(&issue.created_at))
    );

    if !issue.labels.is_empty() {
        let _ = writeln!(sections, "  <div class=\"tags\">");
        for label in &issue.labels {
            let _ = writeln!(
                sections,
                "    <span class=\"tag\">{}</span>",
                escape_html(label)
            );
        }
        let _ = writeln!(sections, "  </div>");
    }

    let _ = writeln!(sections, "  <h2>Description Summary</h2>");
    let _ = writeln!(sections, "  <p>{}</p>", escape_html(&analysis.summary));

    if !analysis.code_blocks.is_empty() {
        let _ = writeln!(sections, "  <h2>Code</h2>");
        let _ = writeln!(
            sections,
            "  <p>Code Blocks Found: {}</p>",
            analysis.code_blocks.len()
        );
        if !analysis.languages.is_empty() {
            let languages: Vec<String> = analysis
                .languages
                .iter()
                .map(|l| escape_html(l))
                .collect();
            let _ = writeln!(
                sections,
                "  <p>Languages detected: {}</p>",
                languages.join(", ")
            );
        }
    }

    if !analysis.mentions.is_empty() {
        let _ = writeln!(sections, "  <h2>Mentions</h2>");
        let _ = writeln!(sections, "  <ul>");
        for mention in &analysis.mentions {
            let _ = writeln!(sections, "    <li>{}</li>", escape_html(mention));
        }
        let _ = writeln!(sections, "  </ul>");
    }

    let _ = writeln!(sections, "  <h2>Suggestions</h2>");
    let _ = writeln!(sections, "  <ul>");
    for line in analysis.suggestions.iter().skip(1) {
        let advice = line.strip_prefix("- ").unwrap_or(line);
        let _ = writeln!(sections, "    <li>{}</li>", escape_html(advice));
    }
    let _ = writeln!(sections, "  </ul>");

    let _ = writeln!(sections, "  <h2>AI Insight</h2>");
    let _ = writeln!(sections, "  <pre>{}</pre>", escape_html(insight));

    let _ = writeln!(sections, "  <h2>Suggested Labels</h2>");
    let _ = writeln!(sections, "  <div class=\"tags\">");
    for label in label_suggestions {
        let _ = writeln!(
            sections,
            "    <span class=\"tag suggested\">{}</span>",
            escape_html(label)
        );
    }
    let _ = writeln!(sections, "  </div>");

    let _ = writeln!(
        sections,
        "  <p class=\"priority\">Priority: {}</p>",
        escape_html(priority)
    );

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Issue #{number} Analysis</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; color: #1f2328; }}\n\
         .meta {{ color: #59636e; }}\n\
         .tag {{ display: inline-block; background: #ddf4ff; border-radius: 2em; padding: 0 10px; margin-right: 4px; }}\n\
         .tag.suggested {{ background: #fff8c5; }}\n\
         .priority {{ background: #ffebe9; font-weight: bold; padding: 6px 10px; }}\n\
         pre {{ background: #f6f8fa; padding: 10px; overflow-x: auto; white-space: pre-wrap; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {sections}\
         </body>\n\
         </html>\n",
        number = issue.number,
        sections = sections
    )
}
