//! Result envelopes
//!
//! Every invocation prints exactly one of these documents: success and help
//! on stdout, errors on stderr.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::errors::KapsoError;

/// `{ "ok": true, "data": ... }`
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

impl<T: Serialize> SuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// `{ "ok": false, "error": { "message": ..., "details"?: ... } }`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl From<&KapsoError> for ErrorEnvelope {
    fn from(err: &KapsoError) -> Self {
        Self {
            ok: false,
            error: ErrorBody {
                message: err.to_string(),
                details: err.details(),
            },
        }
    }
}

/// Usage document printed for `--help` / `-h`
#[derive(Debug, Serialize)]
pub struct HelpEnvelope {
    pub ok: bool,
    pub usage: String,
    pub env: Vec<&'static str>,
}

impl HelpEnvelope {
    pub fn new(usage: impl Into<String>, env: &[&'static str]) -> Self {
        Self {
            ok: true,
            usage: usage.into(),
            env: env.to_vec(),
        }
    }
}

/// Wrap upstream data in a success envelope
pub fn success(data: JsonValue) -> JsonValue {
    // serializing a struct of a bool and a Value cannot fail
    serde_json::to_value(SuccessEnvelope::new(data)).unwrap_or(JsonValue::Null)
}
