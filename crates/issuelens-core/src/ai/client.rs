// SPDX-License-Identifier: Apache-2.0

//! Client for the generative-language service.
//!
//! Holds HTTP client, API key, and model configuration for reuse across
//! requests. The three operations are independent: each builds its own
//! prompt, issues one request, and surfaces the response as free text.
//! There are no retries; a transient failure surfaces on first occurrence.

use std::env;
use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use super::prompts;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use super::{GEMINI_API_KEY_ENV, GEMINI_API_URL, PROVIDER_NAME};
use crate::Result;
use crate::config::{AiConfig, TaskType};
use crate::error::IssueLensError;
use crate::github::issues::IssueDetails;

/// Client for AI-assisted issue insight.
#[derive(Debug)]
pub struct InsightClient {
    /// HTTP client with configured timeout.
    http: Client,
    /// Endpoint URL for chat completions.
    api_url: String,
    /// API key for provider authentication.
    api_key: SecretString,
    /// Model for insight and label suggestion.
    model: String,
    /// Model for prioritization.
    fast_model: String,
    /// Maximum tokens for API responses.
    max_tokens: u32,
    /// Temperature for API requests.
    temperature: f32,
}

impl InsightClient {
    /// Creates a new client from configuration.
    ///
    /// Fetches the API key from the environment.
    ///
    /// # Errors
    ///
    /// Returns `IssueLensError::Config` if the `GEMINI_API_KEY` environment
    /// variable is not set, or `IssueLensError::Network` if HTTP client
    /// creation fails.
    pub fn new(config: &AiConfig) -> Result<Self> {
        let api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| IssueLensError::Config {
            message: format!(
                "Missing {GEMINI_API_KEY_ENV} environment variable.\n\
                 Set it with: export {GEMINI_API_KEY_ENV}=your_api_key\n\
                 Get a free key at: https://aistudio.google.com/app/apikey"
            ),
        })?;

        Self::with_api_key(SecretString::from(api_key), config)
    }

    /// Creates a new client with a provided API key.
    ///
    /// # Errors
    ///
    /// Returns `IssueLensError::Network` if HTTP client creation fails.
    pub fn with_api_key(api_key: SecretString, config: &AiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_url: GEMINI_API_URL.to_string(),
            api_key,
            model: config.model.clone(),
            fast_model: config.fast_model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Resolves the model for a task: the capable tier for insight and
    /// labels, the fast tier for prioritization.
    fn model_for_task(&self, task: TaskType) -> &str {
        match task {
            TaskType::Insight | TaskType::Labels => &self.model,
            TaskType::Priority => &self.fast_model,
        }
    }

    /// Sends one chat completion request and returns the response text.
    async fn complete(&self, model: &str, prompt: String) -> Result<String> {
        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        let response = self
            .http
            .post(&self.api_url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 401 {
                return Err(IssueLensError::Ai {
                    message: format!(
                        "Invalid API key. Check your {GEMINI_API_KEY_ENV} environment variable."
                    ),
                    status: Some(401),
                    provider: PROVIDER_NAME.to_string(),
                });
            }
            if status.as_u16() == 429 {
                warn!("Rate limited by {PROVIDER_NAME} API");
                return Err(IssueLensError::Ai {
                    message: "Rate limit exceeded".to_string(),
                    status: Some(429),
                    provider: PROVIDER_NAME.to_string(),
                });
            }
            let error_body = response.text().await.unwrap_or_default();
            return Err(IssueLensError::Ai {
                message: error_body,
                status: Some(status.as_u16()),
                provider: PROVIDER_NAME.to_string(),
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(|e| IssueLensError::Ai {
                message: format!("Failed to parse API response: {e}"),
                status: None,
                provider: PROVIDER_NAME.to_string(),
            })?;

        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| IssueLensError::Ai {
                message: "No response from AI model".to_string(),
                status: None,
                provider: PROVIDER_NAME.to_string(),
            })?;

        debug!(response_length = content.len(), "Received AI response");

        Ok(content)
    }

    /// Requests free-form insight (summary, root cause, fix plan,
    /// recommendations) for an issue.
    ///
    /// The response is surfaced verbatim; no parsing is imposed.
    ///
    /// # Errors
    ///
    /// Returns `IssueLensError::Ai` or `IssueLensError::Network` if the
    /// request fails.
    #[instrument(skip(self, issue), fields(issue_number = issue.number))]
    pub async fn get_insight(&self, issue: &IssueDetails) -> Result<String> {
        let model = self.model_for_task(TaskType::Insight);
        debug!(model = %model, "Requesting AI insight");
        self.complete(model, prompts::build_insight_prompt(issue))
            .await
    }

    /// Requests 3-5 label suggestions for an issue.
    ///
    /// The response is split on line boundaries; blank lines are discarded
    /// and surviving lines are returned in response order, untouched. No
    /// validation against the repository's real label set is performed.
    ///
    /// # Errors
    ///
    /// Returns `IssueLensError::Ai` or `IssueLensError::Network` if the
    /// request fails.
    #[instrument(skip(self, issue), fields(issue_number = issue.number))]
    pub async fn suggest_labels(&self, issue: &IssueDetails) -> Result<Vec<String>> {
        let model = self.model_for_task(TaskType::Labels);
        debug!(model = %model, "Requesting label suggestions");
        let response = self
            .complete(model, prompts::build_labels_prompt(issue))
            .await?;
        Ok(parse_label_lines(&response))
    }

    /// Requests a priority suggestion for an issue.
    ///
    /// The response is returned verbatim, not parsed into an enum; callers
    /// must not assume a literal match to the four levels.
    ///
    /// # Errors
    ///
    /// Returns `IssueLensError::Ai` or `IssueLensError::Network` if the
    /// request fails.
    #[instrument(skip(self, issue), fields(issue_number = issue.number))]
    pub async fn prioritize(&self, issue: &IssueDetails) -> Result<String> {
        let model = self.model_for_task(TaskType::Priority);
        debug!(model = %model, "Requesting priority suggestion");
        self.complete(model, prompts::build_priority_prompt(issue))
            .await
    }
}

/// Splits an AI label response into suggestions: non-empty lines, in
/// response order, otherwise untouched.
#[must_use]
pub fn parse_label_lines(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
