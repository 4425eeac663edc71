//! Bearer token authentication (RFC 6750)

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::SecretString;
use crate::errors::{KapsoError, Result};

/// Bearer token authentication with the project API key
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: SecretString,
}

impl BearerAuth {
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }

    /// Insert the `Authorization` header, marked sensitive
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token.expose()))
            .map_err(|_| {
                KapsoError::Config("API key contains characters not allowed in a header".to_string())
            })?;
        value.set_sensitive(true);

        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}
