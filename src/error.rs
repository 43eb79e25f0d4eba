//! Error types for name generation.
//!
//! This module provides structured error handling for everything between the
//! HTTP handler and the inference endpoint: configuration problems, transport
//! failures, timeouts, and model output that cannot be decoded.
//!
//! # Error Types
//!
//! The main error type is [`LlmError`], which covers all failure modes:
//! - Configuration errors (empty base URL, unparsable environment values)
//! - Request failures (network issues, non-success HTTP status)
//! - Timeouts
//! - Response parsing failures (bad envelope, no JSON, schema mismatch)
//!
//! Every failure is terminal for the request that hit it. Callers never see
//! the details; the HTTP layer maps all of these to a generic 500.
//!
//! # Result Type
//!
//! Use [`LlmResult<T>`] as a convenient alias for `Result<T, LlmError>`:
//!
//! ```rust
//! use chinese_name_generator::LlmResult;
//!
//! fn my_function() -> LlmResult<String> {
//!     Ok("Success".to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// High-level categorization of errors, attached to log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The inference endpoint or the network misbehaved.
    External,

    /// Local setup is wrong (bad configuration).
    Client,

    /// The endpoint did not answer in time.
    Transient,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Client => "client",
            Self::Transient => "transient",
        }
    }
}

/// Convenient result type for name generation operations.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while generating name suggestions.
///
/// Use the constructor methods, which log the error at creation:
///
/// ```rust
/// use chinese_name_generator::LlmError;
///
/// let err = LlmError::configuration_error("Ollama base URL is required");
/// let err = LlmError::timeout(30);
/// ```
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Client |
/// | `RequestFailed` | External |
/// | `ResponseParsingError` | External |
/// | `Timeout` | Transient |
#[derive(Error, Debug)]
pub enum LlmError {
    /// Configuration is invalid or incomplete.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request to the inference endpoint failed.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The endpoint answered, but its output could not be turned into
    /// suggestions.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// The endpoint did not respond within the configured timeout.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },
}

impl LlmError {
    /// Get the error category for log routing.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::Timeout { .. } => ErrorCategory::Transient,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Inference request failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "Inference response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "Inference request timed out"
        );
        Self::Timeout { timeout_seconds }
    }
}
