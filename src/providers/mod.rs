//! Inference endpoint clients
//!
//! - **ollama**: Ollama native chat API (`/api/chat`), non-streaming
//! - **types**: request/response envelopes exchanged with the endpoint

pub mod ollama;
pub mod types;

pub use ollama::OllamaClient;
pub use types::{ChatMessage, OllamaChatRequest, OllamaChatResponse};
