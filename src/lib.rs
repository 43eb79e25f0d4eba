//! # chinese-name-generator
//!
//! Web front-end that turns an English name into Chinese name suggestions by
//! prompting a locally hosted Ollama model.
//!
//! ## Flow
//!
//! `POST /api/generate-names` → [`NameGenerator`] → [`OllamaClient::chat`] →
//! [`ResponseParser::extract_json`] → [`NameSuggestion`]s back to the browser.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chinese_name_generator::{ChineseNameGenerator, NameGenerator, OllamaClient, OllamaConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OllamaClient::new(OllamaConfig::default())?;
//! let generator = ChineseNameGenerator::new(client);
//! let suggestions = generator.generate_names("Olivia").await?;
//! for s in suggestions {
//!     println!("{} ({})", s.chinese_name, s.pinyin);
//! }
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod logging;

pub mod config;
pub mod error;
pub mod names;
pub mod providers;
pub mod response_parser;
pub mod server;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{AppConfig, OllamaConfig, ServerConfig};
pub use error::{ErrorCategory, LlmError, LlmResult};
pub use names::{ChineseNameGenerator, NameGenerator, NameSuggestion, NameSuggestions};
pub use providers::OllamaClient;
pub use response_parser::ResponseParser;
pub use server::{router, AppState, NameRequest};
