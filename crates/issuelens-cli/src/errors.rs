// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `IssueLensError` and adds hints for the
//! error kinds a user can act on. Structured error data stays in the
//! library; presentation lives here.

use std::fmt::Write;

use anyhow::Error;
use issuelens_core::IssueLensError;
use issuelens_core::ai::GEMINI_API_KEY_ENV;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not an `IssueLensError`, returns the original message.
pub fn format_error(error: &Error) -> String {
    if let Some(lens_err) = error.downcast_ref::<IssueLensError>() {
        match lens_err {
            IssueLensError::Fetch { message: _ } => {
                format!("{lens_err}\n\nTip: Check your GITHUB_TOKEN environment variable.")
            }
            IssueLensError::Ai {
                message,
                status,
                provider: _,
            } => {
                let mut msg = format!("AI provider error: {message}");
                if let Some(code) = status {
                    let _ = write!(msg, " (HTTP {code})");
                }
                let _ = write!(
                    msg,
                    "\n\nTip: Check your {GEMINI_API_KEY_ENV} environment variable."
                );
                msg
            }
            IssueLensError::Config { message: _ } => {
                format!(
                    "{lens_err}\n\nTip: Check your config file at {}",
                    issuelens_core::config_file_path().display()
                )
            }
            IssueLensError::Network(_) => {
                format!("{lens_err}\n\nTip: Check your internet connection and try again.")
            }
        }
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_gets_token_hint() {
        let err = Error::new(IssueLensError::Fetch {
            message: "404 Not Found".to_string(),
        });
        let formatted = format_error(&err);
        assert!(formatted.contains("404 Not Found"));
        assert!(formatted.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn ai_error_includes_status_and_key_hint() {
        let err = Error::new(IssueLensError::Ai {
            message: "quota exceeded".to_string(),
            status: Some(429),
            provider: "gemini".to_string(),
        });
        let formatted = format_error(&err);
        assert!(formatted.contains("HTTP 429"));
        assert!(formatted.contains(GEMINI_API_KEY_ENV));
    }

    #[test]
    fn config_error_points_at_config_file() {
        let err = Error::new(IssueLensError::Config {
            message: "no repository".to_string(),
        });
        let formatted = format_error(&err);
        assert!(formatted.contains("config.toml"));
    }

    #[test]
    fn foreign_error_passes_through() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(format_error(&err), "something else");
    }
}
