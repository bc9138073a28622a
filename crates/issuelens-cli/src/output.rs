// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering and the report-file sink.

use std::fmt::Write as _;
use std::path::Path;

use console::style;
use issuelens_core::ReportArtifact;

/// Renders a styled heading with a list of lines below it.
fn render_list_section(title: &str, items: &[String]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", style(title).cyan().bold());
    for item in items {
        let _ = writeln!(output, "  {} {}", style("-").dim(), item);
    }

    output
}

/// Prints AI-suggested labels.
pub fn render_labels(labels: &[String]) {
    print!("{}", render_list_section("Suggested Labels", labels));
}

/// Prints the AI-suggested priority.
pub fn render_priority(priority: &str) {
    println!("{}", style("Suggested Priority").cyan().bold());
    println!("  {priority}");
}

/// Writes the HTML report artifact to disk.
///
/// This is the sole persisted state the pipeline produces.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_report(path: &Path, artifact: &ReportArtifact) -> anyhow::Result<()> {
    std::fs::write(path, artifact.html.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_section_contains_title_and_items() {
        let rendered = render_list_section(
            "Suggested Labels",
            &["bug".to_string(), "crash".to_string()],
        );
        assert!(rendered.contains("Suggested Labels"));
        assert!(rendered.contains("bug"));
        assert!(rendered.contains("crash"));
    }

    #[test]
    fn write_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issue-1-report.html");
        let artifact = ReportArtifact {
            filename: "issue-1-report.html".to_string(),
            html: "<!DOCTYPE html>\n<html></html>\n".to_string(),
        };

        write_report(&path, &artifact).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, artifact.html);
    }
}
