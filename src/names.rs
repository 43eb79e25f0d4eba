//! Chinese name suggestions
//!
//! Builds the naming prompt, sends it through [`OllamaClient`], and decodes the
//! JSON object embedded in the model's answer into [`NameSuggestion`]s.

use crate::error::LlmResult;
use crate::logging::log_info;
use crate::providers::OllamaClient;
use crate::response_parser::ResponseParser;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as `T::default()`. Combined with `#[serde(default)]` this makes
/// missing and null fields equivalent.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Suggestion list where the list itself, or any entry, may be `null`
fn nullable_suggestions<'de, D>(deserializer: D) -> Result<Vec<NameSuggestion>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<Option<NameSuggestion>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// One candidate Chinese name
///
/// Fields the model leaves out or sets to `null` decode as empty strings;
/// nothing is rejected unless a field has the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameSuggestion {
    #[serde(deserialize_with = "null_as_default")]
    pub chinese_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pinyin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meaning: String,
    #[serde(deserialize_with = "null_as_default")]
    pub english_explanation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cultural_context: String,
}

/// `{"suggestions": [...]}`, the shape the model is asked to produce and the
/// shape returned to the browser
///
/// A missing or `null` list decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSuggestions {
    #[serde(default, deserialize_with = "nullable_suggestions")]
    pub suggestions: Vec<NameSuggestion>,
}

/// Number of suggestions requested from the model. Not enforced on the answer.
pub const REQUESTED_SUGGESTIONS: usize = 10;

/// Build the naming prompt for `english_name`
pub fn build_prompt(english_name: &str) -> String {
    format!(
        r#"你是一个专业的中文起名专家。请为英文名"{english_name}"推荐{REQUESTED_SUGGESTIONS}个富有文化内涵的中文名。
请严格按照以下JSON格式返回，不要包含任何其他内容：
{{
  "suggestions": [
    {{
      "chinese_name": "中文名",
      "pinyin": "拼音",
      "meaning": "含义解释",
      "english_explanation": "英文说明",
      "cultural_context": "文化内涵"
    }}
  ]
}}

要求：
1. 音韵和谐，尽可能与英文发音相近
2. 符合中国传统起名规范
3. 字义优美，组合得当
4. 避免文化禁忌"#
    )
}

/// Decode the suggestions embedded in raw model output
pub fn parse_suggestions(content: &str) -> LlmResult<Vec<NameSuggestion>> {
    let parsed: NameSuggestions = ResponseParser::parse_embedded(content)?;
    Ok(parsed.suggestions)
}

/// Source of name suggestions
///
/// The HTTP layer only knows this trait, so tests can substitute the upstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NameGenerator: Send + Sync {
    async fn generate_names(&self, english_name: &str) -> LlmResult<Vec<NameSuggestion>>;
}

/// [`NameGenerator`] backed by a local Ollama model
#[derive(Debug)]
pub struct ChineseNameGenerator {
    client: OllamaClient,
}

impl ChineseNameGenerator {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NameGenerator for ChineseNameGenerator {
    async fn generate_names(&self, english_name: &str) -> LlmResult<Vec<NameSuggestion>> {
        let prompt = build_prompt(english_name);
        let response = self.client.chat(&prompt).await?;
        let suggestions = parse_suggestions(&response.message.content)?;

        log_info!(
            english_name = %english_name,
            model = %self.client.config().default_model,
            suggestion_count = suggestions.len(),
            "Generated name suggestions"
        );

        Ok(suggestions)
    }
}
