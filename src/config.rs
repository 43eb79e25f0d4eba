use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Timeout applied to every call to the inference endpoint.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Ollama connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub base_url: String,
    pub default_model: String,
    pub request_timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:11434".to_string(),
            default_model: "glm4:9b".to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl OllamaConfig {
    /// Validate the connection settings
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the base URL or model is
    /// empty, or the timeout is zero.
    pub fn validate(&self) -> LlmResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(LlmError::configuration_error("Ollama base URL is required"));
        }
        if self.default_model.trim().is_empty() {
            return Err(LlmError::configuration_error("Ollama model is required"));
        }
        if self.request_timeout.is_zero() {
            return Err(LlmError::configuration_error(
                "Ollama request timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Full URL of the chat endpoint
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url.trim_end_matches('/'))
    }
}

/// HTTP listener and on-disk asset locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 7501)),
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn index_template(&self) -> PathBuf {
        self.templates_dir.join("index.html")
    }
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub ollama: OllamaConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> LlmResult<()> {
        self.ollama.validate()
    }

    /// Load configuration from environment variables on top of the defaults
    /// This is the ONLY method that should access environment variables
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if:
    /// - `OLLAMA_TIMEOUT_SECS` is not a positive integer
    /// - `NAMEGEN_BIND_ADDRESS` is not a socket address
    /// - The resulting configuration fails validation
    pub fn from_env() -> LlmResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("OLLAMA_BASE_URL") {
            config.ollama.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            config.ollama.default_model = model;
        }
        if let Ok(raw) = std::env::var("OLLAMA_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                LlmError::configuration_error(format!("Invalid OLLAMA_TIMEOUT_SECS '{raw}': {e}"))
            })?;
            config.ollama.request_timeout = Duration::from_secs(secs);
        }
        if let Ok(raw) = std::env::var("NAMEGEN_BIND_ADDRESS") {
            config.server.bind_address = raw.trim().parse().map_err(|e| {
                LlmError::configuration_error(format!("Invalid NAMEGEN_BIND_ADDRESS '{raw}': {e}"))
            })?;
        }
        if let Ok(dir) = std::env::var("NAMEGEN_TEMPLATES_DIR") {
            config.server.templates_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("NAMEGEN_STATIC_DIR") {
            config.server.static_dir = PathBuf::from(dir);
        }

        config.validate()?;

        log_debug!(
            base_url = %config.ollama.base_url,
            model = %config.ollama.default_model,
            timeout_secs = config.ollama.request_timeout.as_secs(),
            bind_address = %config.server.bind_address,
            "Configuration loaded and validated"
        );

        Ok(config)
    }
}
