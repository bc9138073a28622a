// SPDX-License-Identifier: Apache-2.0

//! AI integration module.
//!
//! Wraps the Gemini OpenAI-compatible chat-completions endpoint for
//! qualitative issue insight, label suggestion, and prioritization.
//! Responses are free text: no schema is imposed beyond "non-empty lines
//! are suggestions" for the label operation.

pub mod client;
pub mod prompts;
pub mod types;

pub use client::InsightClient;

/// Provider name reported in AI errors.
pub const PROVIDER_NAME: &str = "gemini";

/// Gemini OpenAI-compatible chat completions endpoint.
pub const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";

/// Environment variable for the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
