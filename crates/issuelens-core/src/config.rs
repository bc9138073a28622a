// SPDX-License-Identifier: Apache-2.0

//! Configuration management for IssueLens.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `ISSUELENS_`)
//! 2. Config file: `~/.config/issuelens/config.toml`
//! 3. Built-in defaults
//!
//! The GitHub token (`GITHUB_TOKEN`) and AI key (`GEMINI_API_KEY`) are read
//! from their own environment variables; their absence is a fatal startup
//! condition, not a pipeline error.
//!
//! # Examples
//!
//! ```bash
//! # Override the target repository via environment variables
//! ISSUELENS_GITHUB__OWNER=block ISSUELENS_GITHUB__REPO=goose cargo run -- analyze 42
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::IssueLensError;

/// Environment variable for the GitHub access token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Task type for model-tier selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    /// Free-form insight generation.
    Insight,
    /// Label suggestion.
    Labels,
    /// Priority suggestion.
    Priority,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// AI provider settings.
    pub ai: AiConfig,
}

/// GitHub API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Repository owner (organization or user).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// API request timeout in seconds.
    pub api_timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            api_timeout_seconds: 10,
        }
    }
}

/// AI provider settings.
///
/// Two model tiers are used: `model` (higher capability) for insight and
/// label suggestion, `fast_model` for prioritization.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Model identifier for insight and label suggestion.
    pub model: String,
    /// Model identifier for prioritization.
    pub fast_model: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum tokens for API responses.
    pub max_tokens: u32,
    /// Temperature for API requests (0.0-1.0).
    pub temperature: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            fast_model: "gemini-2.5-flash-lite".to_string(),
            timeout_seconds: 30,
            max_tokens: 4096,
            temperature: 0.3,
        }
    }
}

impl AppConfig {
    /// Validates that a target repository is configured.
    ///
    /// # Errors
    ///
    /// Returns `IssueLensError::Config` if `github.owner` or `github.repo`
    /// is missing. This is checked once at startup, before any pipeline
    /// operation runs.
    pub fn require_github_repo(&self) -> Result<(), IssueLensError> {
        if self.github.owner.is_empty() || self.github.repo.is_empty() {
            return Err(IssueLensError::Config {
                message: format!(
                    "No target repository configured.\n\
                     Set github.owner and github.repo in {}\n\
                     or pass --repo owner/repo",
                    config_file_path().display()
                ),
            });
        }
        Ok(())
    }
}

/// Returns the IssueLens configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/issuelens`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("issuelens");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("issuelens")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `ISSUELENS_` and double underscore
/// for nested keys (e.g., `ISSUELENS_AI__MODEL`).
///
/// # Errors
///
/// Returns `IssueLensError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, IssueLensError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("ISSUELENS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
