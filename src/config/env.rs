//! Environment snapshot used to resolve configuration
//!
//! Configuration is read from an [`EnvVars`] value rather than from the
//! process environment directly, so tests and embedders can inject it.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::Result;

/// Environment variable store
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the process environment
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Process environment layered over `./.env` when that file exists.
    /// Variables set in the process win over the file.
    pub fn load() -> Self {
        let mut vars = Self::try_load_file(Path::new(".env"));
        vars.merge(&Self::from_process());
        vars
    }

    /// Load a .env file, returning an empty store if it is missing or unreadable
    pub fn try_load_file(path: &Path) -> Self {
        match Self::load_file(path) {
            Ok(vars) => {
                debug!(path = %path.display(), count = vars.vars.len(), "Loaded .env file");
                vars
            }
            Err(_) => Self::new(),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse `.env` content. Malformed lines are skipped with a warning.
    pub fn parse(content: &str) -> Self {
        let mut vars = HashMap::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match parse_env_line(line) {
                Some((key, value)) => {
                    vars.insert(key, value);
                }
                None => warn!(line = line_num + 1, "Ignoring malformed .env line"),
            }
        }

        Self { vars }
    }

    /// Merge with another store (other takes precedence)
    pub fn merge(&mut self, other: &EnvVars) {
        for (key, value) in &other.vars {
            self.vars.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Parse `KEY=value`, `export KEY=value`, `KEY="value"` or `KEY='value'`
fn parse_env_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();

    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let value = value.trim();
    let value = match strip_quotes(value) {
        Some(inner) => inner,
        None => value.split(" #").next().unwrap_or(value).trim(),
    };

    Some((key.to_string(), value.to_string()))
}

fn strip_quotes(value: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|q| {
        value
            .strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
    })
}
