//! Test helper utilities for chinese-name-generator integration tests
//!
//! Shared fixtures for driving the client and the router against a wiremock
//! stand-in for the Ollama endpoint.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use chinese_name_generator::{NameSuggestion, OllamaClient, OllamaConfig};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::ResponseTemplate;

pub const TEST_MODEL: &str = "glm4:9b";

/// Ollama configuration pointing at `base_url` with a short timeout
pub fn create_test_ollama_config(base_url: &str) -> OllamaConfig {
    OllamaConfig {
        base_url: base_url.to_string(),
        default_model: TEST_MODEL.to_string(),
        request_timeout: Duration::from_secs(2),
    }
}

pub fn create_test_client(base_url: &str) -> OllamaClient {
    OllamaClient::new(create_test_ollama_config(base_url)).expect("test config is valid")
}

pub fn sample_suggestion() -> NameSuggestion {
    NameSuggestion {
        chinese_name: "李明".to_string(),
        pinyin: "Lǐ Míng".to_string(),
        meaning: "明亮、聪明".to_string(),
        english_explanation: "Bright and intelligent".to_string(),
        cultural_context: "取自“光明磊落”，寓意品格正直".to_string(),
    }
}

/// Body of a non-streaming `/api/chat` answer whose message content is `content`
pub fn chat_response_body(content: &str) -> Value {
    json!({
        "model": TEST_MODEL,
        "created_at": "2024-05-01T12:00:00Z",
        "message": { "role": "assistant", "content": content },
        "done_reason": "stop",
        "done": true,
        "total_duration": 1_234_567_u64,
        "eval_count": 42
    })
}

/// Successful `/api/chat` response carrying `suggestions`, wrapped in prose
pub fn suggestions_response(suggestions: &[NameSuggestion]) -> ResponseTemplate {
    let payload = json!({ "suggestions": suggestions }).to_string();
    let content = format!("以下是推荐的名字：\n{payload}\n祝您满意！");
    ResponseTemplate::new(200).set_body_json(chat_response_body(&content))
}

/// In-memory log sink for asserting on emitted tracing records
///
/// Install with `tracing::subscriber::set_default(logs.subscriber())` inside a
/// current-thread `#[tokio::test]`; the guard scopes it to the test.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Byte offset of the first line containing `needle`, with that line
    pub fn find_line(&self, needle: &str) -> Option<(usize, String)> {
        let contents = self.contents();
        let mut offset = 0;
        for line in contents.lines() {
            if line.contains(needle) {
                return Some((offset, line.to_string()));
            }
            offset += line.len() + 1;
        }
        None
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
