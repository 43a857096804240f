//! LLM Client — the single point of entry for all inference calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
//! Every stage talks to the model through the [`InferenceProvider`] trait, so
//! tests can script responses and the pipeline never depends on a live API.
//!
//! Model responses are never trusted to be clean JSON: [`extract_json_object`]
//! searches the text for the first balanced JSON object, tolerating markdown
//! fences, leading prose, and trailing commentary.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
/// Intentionally hardcoded to prevent accidental drift between stages.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No JSON object found in model response")]
    NoJson,

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Capability seam for the inference provider.
///
/// The pipeline stages only ever see this trait; `LlmClient` is the
/// production implementation and tests supply scripted mocks.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Sends one prompt and returns the raw response text, which is expected
    /// (but not guaranteed) to contain one JSON object.
    async fn infer(&self, prompt: &str, system: &str, max_tokens: u32)
        -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl ApiResponse {
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Production inference provider backed by the Anthropic Messages API.
/// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn call(
        &self,
        prompt: &str,
        system: &str,
        max_tokens: u32,
    ) -> Result<ApiResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let api_response: ApiResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                api_response.usage.input_tokens, api_response.usage.output_tokens
            );

            return Ok(api_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl InferenceProvider for LlmClient {
    async fn infer(
        &self,
        prompt: &str,
        system: &str,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, system, max_tokens).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.to_string())
    }
}

/// Calls the provider and deserializes the first balanced JSON object in the
/// response. The prompt must instruct the model to return valid JSON.
pub async fn infer_json<T: DeserializeOwned>(
    provider: &dyn InferenceProvider,
    prompt: &str,
    system: &str,
    max_tokens: u32,
) -> Result<T, LlmError> {
    let text = provider.infer(prompt, system, max_tokens).await?;
    let json = extract_json_object(&text).ok_or(LlmError::NoJson)?;
    serde_json::from_str(json).map_err(LlmError::Parse)
}

/// Returns the first balanced `{ ... }` object in `text`, or `None`.
///
/// Brace depth is tracked outside of string literals (with escape handling),
/// so braces inside values don't break the scan. This deliberately ignores
/// markdown fences and any prose around the object.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_object() {
        let input = r#"{"key": "value"}"#;
        assert_eq!(extract_json_object(input), Some(input));
    }

    #[test]
    fn test_extract_from_markdown_fences() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json_object(input), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn test_extract_with_surrounding_prose() {
        let input = "Here is the profile you asked for:\n{\"name\": \"Jane\"}\nLet me know!";
        assert_eq!(extract_json_object(input), Some("{\"name\": \"Jane\"}"));
    }

    #[test]
    fn test_extract_nested_objects() {
        let input = r#"{"outer": {"inner": [1, 2]}} trailing"#;
        assert_eq!(
            extract_json_object(input),
            Some(r#"{"outer": {"inner": [1, 2]}}"#)
        );
    }

    #[test]
    fn test_braces_inside_strings_do_not_confuse_scan() {
        let input = r#"{"summary": "used {curly} notation \" and escapes"}"#;
        assert_eq!(extract_json_object(input), Some(input));
    }

    #[test]
    fn test_no_object_returns_none() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("{unterminated"), None);
    }
}
