//! Kapso API configuration
//!
//! Resolved once at process start and passed by reference into
//! [`crate::client::KapsoClient`]. Nothing else reads the environment.

mod env;

pub use env::EnvVars;

use std::fmt;

use crate::errors::{KapsoError, Result};

/// Base URL of the Kapso API, e.g. `https://api.kapso.ai`
pub const BASE_URL_VAR: &str = "KAPSO_API_BASE_URL";
/// Project API key
pub const API_KEY_VAR: &str = "KAPSO_API_KEY";
/// Tracing filter directives for stderr logging
pub const LOG_VAR: &str = "KAPSO_LOG";
/// `text` or `json`
pub const LOG_FORMAT_VAR: &str = "KAPSO_LOG_FORMAT";

/// Variables every command needs, listed in help output
pub const REQUIRED_ENV: &[&str] = &[BASE_URL_VAR, API_KEY_VAR];

/// A string that redacts its value in Debug output to prevent credential leakage
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "SecretString(\"\")")
        } else {
            write!(f, "SecretString(\"[REDACTED]\")")
        }
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, "[REDACTED]")
        }
    }
}

/// Connection settings for the Kapso API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without trailing slash
    pub base_url: String,
    pub api_key: SecretString,
}

impl Config {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: SecretString::new(api_key),
        }
    }

    /// Resolve configuration from an environment snapshot.
    ///
    /// Both variables are required; an empty value counts as unset.
    pub fn from_env(vars: &EnvVars) -> Result<Self> {
        let base_url = required(vars, BASE_URL_VAR)?;
        let api_key = required(vars, API_KEY_VAR)?;
        Ok(Self::new(base_url, api_key))
    }

    /// Absolute URL for an API path (which already carries its query string)
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn required<'a>(vars: &'a EnvVars, name: &str) -> Result<&'a str> {
    match vars.get(name).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(KapsoError::Config(format!(
            "Missing required environment variable {}",
            name
        ))),
    }
}
