//! Extraction of a JSON object embedded in free-form model output.
//!
//! Models asked for "JSON only" still wrap it in commentary now and then. The
//! extraction here takes everything from the first `{` to the last `}`,
//! inclusive. Brace balance is not checked: two separate objects, or a stray
//! `}` in trailing prose, produce a substring the JSON decoder will reject.

use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use serde::de::DeserializeOwned;

/// Response parser for model output
pub struct ResponseParser;

impl ResponseParser {
    /// Return the slice from the first `{` through the last `}`.
    ///
    /// Fails when either brace is missing or the last `}` comes before the
    /// first `{`.
    pub fn extract_json(text: &str) -> LlmResult<&str> {
        let start = text.find('{');
        let end = text.rfind('}');

        match (start, end) {
            (Some(start), Some(end)) if end >= start => Ok(&text[start..=end]),
            _ => Err(LlmError::response_parsing_error(format!(
                "No valid JSON found in response: {}",
                preview(text)
            ))),
        }
    }

    /// Extract the embedded object and decode it into `T`.
    pub fn parse_embedded<T: DeserializeOwned>(text: &str) -> LlmResult<T> {
        let json = Self::extract_json(text)?;

        log_debug!(
            content_length = text.len(),
            extracted_length = json.len(),
            "Extracted JSON object from model output"
        );

        serde_json::from_str(json).map_err(|e| {
            LlmError::response_parsing_error(format!("Parse suggestions failed: {e}, JSON: {json}"))
        })
    }
}

fn preview(text: &str) -> String {
    let head: String = text.chars().take(200).collect();
    if head.len() < text.len() {
        format!("{head}...")
    } else {
        head
    }
}
