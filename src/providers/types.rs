//! Ollama chat API data structures
//!
//! Only the fields this service sends or reads are modelled; anything else the
//! endpoint returns (timings, token counts) is ignored on decode.

use serde::{Deserialize, Serialize};

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Always `false`; the whole answer is read in one response.
    pub stream: bool,
    /// Output format hint, `"json"` for structured answers.
    pub format: String,
}

/// Non-streaming response of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaChatResponse {
    pub message: ChatMessage,
    #[serde(default)]
    pub done: bool,
}
