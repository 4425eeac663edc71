//! Query string construction from flag tables
//!
//! Each command declares a table of [`QueryParam`]s mapping its flags to the
//! query keys the Kapso API expects. [`build_query`] walks the table in order,
//! so the emitted parameter order is the table order and never depends on the
//! order flags were typed.

use tracing::warn;

use super::flags::{Flag, Flags};
use crate::errors::{KapsoError, Result};

/// Value transformation applied before a flag lands in the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Pass the value through unchanged
    Raw,
    /// Validate as a boolean token and emit `true`/`false`
    Boolean,
}

/// One `flag -> query key` mapping
#[derive(Debug, Clone, Copy)]
pub struct QueryParam {
    pub flag: &'static str,
    pub key: &'static str,
    pub transform: Transform,
    /// Deprecated spelling still accepted for this flag
    pub alias: Option<&'static str>,
}

impl QueryParam {
    pub const fn raw(flag: &'static str, key: &'static str) -> Self {
        Self { flag, key, transform: Transform::Raw, alias: None }
    }

    pub const fn boolean(flag: &'static str, key: &'static str) -> Self {
        Self { flag, key, transform: Transform::Boolean, alias: None }
    }

    pub const fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Look the flag up, falling back to the deprecated alias
    fn lookup<'a>(&self, flags: &'a Flags) -> Flag<'a> {
        let flag = flags.get(self.flag);
        if !flag.is_absent() {
            return flag;
        }
        match self.alias {
            Some(alias) => {
                let flag = flags.get(alias);
                if !flag.is_absent() {
                    warn!(alias, canonical = self.flag, "Deprecated flag spelling");
                }
                flag
            }
            None => Flag::Absent,
        }
    }
}

/// Parse a boolean flag token: `true/1/yes` or `false/0/no`
pub fn parse_boolean(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(KapsoError::usage(format!(
            "Invalid value for --{}: {:?} (expected true/false, 1/0 or yes/no)",
            name, value
        ))),
    }
}

/// Collect `(key, value)` pairs for every flag in `table` that was given
pub fn query_pairs(flags: &Flags, table: &[QueryParam]) -> Result<Vec<(&'static str, String)>> {
    let mut pairs = Vec::new();

    for param in table {
        let value = match (param.lookup(flags), param.transform) {
            (Flag::Absent, _) => continue,
            (Flag::Present, _) => "true".to_string(),
            (Flag::Value(v), Transform::Raw) => v.to_string(),
            (Flag::Value(v), Transform::Boolean) => parse_boolean(param.flag, v)?.to_string(),
        };
        pairs.push((param.key, value));
    }

    Ok(pairs)
}

/// Encode pairs as a query string: `?a=1&b=2`, or empty when there are none
pub fn encode_query(pairs: &[(&str, String)]) -> Result<String> {
    if pairs.is_empty() {
        return Ok(String::new());
    }
    let encoded = serde_urlencoded::to_string(pairs)
        .map_err(|e| KapsoError::Parse(format!("Failed to encode query: {}", e)))?;
    Ok(format!("?{}", encoded))
}

/// Build the query string for `flags` according to `table`
pub fn build_query(flags: &Flags, table: &[QueryParam]) -> Result<String> {
    encode_query(&query_pairs(flags, table)?)
}
