//! Kapso API requests
//!
//! One GET per call: no retries, no caching, no timeout beyond reqwest's
//! defaults. Callers decide what to do with a failure.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value as JsonValue;
use tracing::debug;

use super::auth::BearerAuth;
use crate::config::Config;
use crate::errors::{KapsoError, Result};

pub const USER_AGENT_STRING: &str = concat!("kapso-observe/", env!("CARGO_PKG_VERSION"));

/// Upper bound for raw (non-JSON) error bodies forwarded in error details
pub const MAX_RAW_BODY: usize = 2000;

/// Authenticated client for the Kapso Platform API
#[derive(Debug, Clone)]
pub struct KapsoClient {
    http: Client,
    config: Config,
}

impl KapsoClient {
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        BearerAuth::new(config.api_key.clone()).apply(&mut headers)?;

        let http = Client::builder()
            .user_agent(USER_AGENT_STRING)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// GET `base_url + path` and parse the JSON body.
    ///
    /// Non-2xx statuses become [`KapsoError::Upstream`] carrying the parsed
    /// body, or the raw text when the body is not JSON.
    pub async fn request(&self, path: &str) -> Result<JsonValue> {
        let url = self.config.url_for(path);
        debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        if !status.is_success() {
            return Err(upstream_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| KapsoError::Parse(format!("Invalid JSON in response from {}: {}", path, e)))
    }
}

fn upstream_error(status: u16, body: &str) -> KapsoError {
    let body = serde_json::from_str(body)
        .unwrap_or_else(|_| JsonValue::String(truncate_body(body, MAX_RAW_BODY)));
    KapsoError::Upstream { status, body }
}

/// Truncate to at most `max_len` bytes on a UTF-8 boundary, marking the cut
pub fn truncate_body(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut cut = max_len;
    while cut > 0 && !s.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}... [truncated {} bytes]", &s[..cut], s.len() - cut)
}
