//! LLM client: the single point of entry for all Anthropic API calls.
//!
//! No other module may call the Anthropic API directly. Callers depend on the
//! `CompletionProvider` trait so the conversion pipeline can run against a stub.
//!
//! Uses the text-completions endpoint: the ticket prompt prefills the opening
//! `[` of the array after the assistant turn marker, which the messages API
//! does not let us express the same way.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_COMPLETE_URL: &str = "https://api.anthropic.com/v1/complete";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Hardcoded to keep output shape stable across deployments.
pub const MODEL: &str = "claude-2.1";
const MAX_TOKENS_TO_SAMPLE: u32 = 4000;
const TEMPERATURE: f32 = 0.3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Generation halts at the next human turn or at the close of the array.
pub const STOP_SEQUENCES: [&str; 2] = [prompts::HUMAN_PROMPT, "]"];

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LlmError {
    /// The message the upstream API itself reported, if it reported one.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            LlmError::Api { message, .. } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Anything that can turn a prompt into a raw text completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn generate_completion(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens_to_sample: u32,
    temperature: f32,
    prompt: &'a str,
    stop_sequences: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub completion: String,
    pub stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Pulls `error.message` out of an Anthropic error body, falling back to the raw body.
fn extract_error_message(body: String) -> String {
    serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Thin wrapper over the Anthropic text-completions API.
/// Single attempt per call; failures surface to the caller unchanged.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
        })
    }

    /// Makes a raw call to the completions endpoint, returning the full response object.
    pub async fn complete(&self, prompt: &str) -> Result<CompletionResponse, LlmError> {
        let request_body = CompletionRequest {
            model: MODEL,
            max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
            temperature: TEMPERATURE,
            prompt,
            stop_sequences: &STOP_SEQUENCES,
        };

        let response = self
            .client
            .post(ANTHROPIC_COMPLETE_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: extract_error_message(body),
            });
        }

        let completion: CompletionResponse = response.json().await?;
        debug!(
            "Completion succeeded: {} chars, stop_reason={:?}",
            completion.completion.len(),
            completion.stop_reason
        );

        Ok(completion)
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn generate_completion(&self, prompt: &str) -> Result<String, LlmError> {
        Ok(self.complete(prompt).await?.completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_from_api_body() {
        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"prompt is too long"}}"#;
        assert_eq!(extract_error_message(body.to_string()), "prompt is too long");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_body() {
        assert_eq!(
            extract_error_message("upstream gateway timeout".to_string()),
            "upstream gateway timeout"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(CompletionRequest {
            model: MODEL,
            max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
            temperature: TEMPERATURE,
            prompt: "\n\nHuman: hi\n\nAssistant: [",
            stop_sequences: &STOP_SEQUENCES,
        })
        .unwrap();

        assert_eq!(body["model"], "claude-2.1");
        assert_eq!(body["max_tokens_to_sample"], 4000);
        assert_eq!(body["stop_sequences"][0], "\n\nHuman:");
        assert_eq!(body["stop_sequences"][1], "]");
    }

    #[test]
    fn test_upstream_message_only_for_api_errors() {
        let api = LlmError::Api {
            status: 400,
            message: "bad prompt".to_string(),
        };
        assert_eq!(api.upstream_message(), Some("bad prompt"));

        let blank = LlmError::Api {
            status: 502,
            message: " ".to_string(),
        };
        assert_eq!(blank.upstream_message(), None);

        let parse = LlmError::Parse(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(parse.upstream_message(), None);
    }
}
