// SPDX-License-Identifier: Apache-2.0

//! Error types for IssueLens.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during IssueLens operations.
#[derive(Error, Debug)]
pub enum IssueLensError {
    /// Issue tracker error: unreachable, unauthorized, or issue not found.
    #[error("GitHub fetch error: {message}")]
    Fetch {
        /// Error message.
        message: String,
    },

    /// Generative-language service error.
    #[error("AI provider error: {message}")]
    Ai {
        /// Error message from the AI provider.
        message: String,
        /// Optional HTTP status code from the provider.
        status: Option<u16>,
        /// Name of the AI provider (e.g., `gemini`).
        provider: String,
    },

    /// Configuration error - fatal, checked before any pipeline operation.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<octocrab::Error> for IssueLensError {
    fn from(err: octocrab::Error) -> Self {
        IssueLensError::Fetch {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for IssueLensError {
    fn from(err: config::ConfigError) -> Self {
        IssueLensError::Config {
            message: err.to_string(),
        }
    }
}
