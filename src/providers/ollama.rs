//! Ollama chat client
//!
//! Sends one non-streaming chat request per call to Ollama's native
//! `/api/chat` endpoint and decodes the response envelope. No retries: any
//! failure is returned to the caller as-is.

use super::types::{ChatMessage, OllamaChatRequest, OllamaChatResponse};
use crate::config::OllamaConfig;
use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_error, log_info};
use std::time::Instant;

/// Ollama local inference client
///
/// Holds a single long-lived `reqwest::Client` with the configured timeout.
/// Cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct OllamaClient {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    /// Create a new Ollama client
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if:
    /// - Configuration validation fails
    /// - HTTP client initialization fails
    pub fn new(config: OllamaConfig) -> LlmResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                LlmError::configuration_error(format!("Failed to build HTTP client: {e}"))
            })?;

        log_debug!(
            provider = "ollama",
            base_url = %config.base_url,
            model = %config.default_model,
            timeout_secs = config.request_timeout.as_secs(),
            "Ollama client initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Build the single-turn, JSON-format request for `prompt`
    pub fn build_request(&self, prompt: &str) -> OllamaChatRequest {
        OllamaChatRequest {
            model: self.config.default_model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            stream: false,
            format: "json".to_string(),
        }
    }

    /// Send `prompt` as a user message and return the decoded envelope
    pub async fn chat(&self, prompt: &str) -> LlmResult<OllamaChatResponse> {
        let url = self.config.chat_url();
        let request = self.build_request(prompt);

        log_debug!(
            provider = "ollama",
            url = %url,
            model = %request.model,
            prompt_length = prompt.len(),
            "Sending chat request"
        );

        let start_time = Instant::now();
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error("Ollama request failed", e))?;

        let status = response.status();
        let raw_body = response
            .text()
            .await
            .map_err(|e| self.read_error(e))?;

        log_info!(
            provider = "ollama",
            status = %status,
            duration_ms = start_time.elapsed().as_millis() as u64,
            raw_body = %raw_body,
            "Ollama raw response"
        );

        if !status.is_success() {
            return Err(LlmError::request_failed(
                format!("Ollama API error {status}: {raw_body}"),
                None,
            ));
        }

        serde_json::from_str(&raw_body).map_err(|e| {
            log_error!(
                error = %e,
                raw_body = %raw_body,
                "Failed to decode Ollama response"
            );
            LlmError::response_parsing_error(format!("Decode response failed: {e}"))
        })
    }

    fn transport_error(&self, context: &str, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            return LlmError::timeout(self.config.request_timeout.as_secs());
        }
        LlmError::request_failed(format!("{context}: {e}"), Some(Box::new(e)))
    }

    fn read_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            return LlmError::timeout(self.config.request_timeout.as_secs());
        }
        LlmError::response_parsing_error(format!("Read response body failed: {e}"))
    }
}
