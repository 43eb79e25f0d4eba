//! Test helper utilities shared across unit test modules
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use crate::config::ServerConfig;
use crate::names::NameSuggestion;
use std::path::Path;

/// Build a fully populated suggestion whose fields are derived from `name`
pub fn create_test_suggestion(name: &str) -> NameSuggestion {
    NameSuggestion {
        chinese_name: name.to_string(),
        pinyin: format!("{name}-pinyin"),
        meaning: format!("{name}-meaning"),
        english_explanation: format!("{name}-explanation"),
        cultural_context: format!("{name}-context"),
    }
}

/// Server configuration rooted at `root`, with `templates/` and `static/` below it
pub fn create_test_server_config(root: &Path) -> ServerConfig {
    ServerConfig {
        templates_dir: root.join("templates"),
        static_dir: root.join("static"),
        ..ServerConfig::default()
    }
}

/// Model output wrapping `{"suggestions": [...]}` in chatty prose
pub fn wrap_in_commentary(json: &str) -> String {
    format!("好的，以下是为您推荐的名字：\n{json}\n希望您喜欢这些名字！")
}
