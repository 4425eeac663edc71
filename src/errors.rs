//! Error types for kapso-observe

use serde_json::{json, Value as JsonValue};
use thiserror::Error;

/// Main error type for kapso-observe
#[derive(Error, Debug)]
pub enum KapsoError {
    /// A required flag is missing or a flag value failed local validation
    #[error("{0}")]
    Usage(String),

    /// A required environment variable is absent
    #[error("{0}")]
    Config(String),

    /// The Kapso API answered with a non-2xx status
    #[error("Kapso API request failed with status {status}")]
    Upstream {
        status: u16,
        /// Parsed JSON body, or the (truncated) raw body text
        body: JsonValue,
    },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KapsoError {
    pub fn usage(message: impl Into<String>) -> Self {
        KapsoError::Usage(message.into())
    }

    /// Structured details forwarded verbatim in the error envelope
    pub fn details(&self) -> Option<JsonValue> {
        match self {
            KapsoError::Upstream { status, body } => Some(json!({
                "status": status,
                "body": body,
            })),
            _ => None,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, KapsoError::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, KapsoError>;
