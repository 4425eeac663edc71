//! Common test utilities for kapso-observe integration tests
//!
//! This module provides shared test infrastructure including:
//! - CLI invocation helpers with an isolated environment
//! - Envelope parsing helpers
//! - A wiremock matcher for exact query strings

#![allow(dead_code)]

use std::collections::HashMap;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;
use wiremock::{Match, Request};

/// API key used by every test environment
pub const TEST_API_KEY: &str = "test-key-123";

/// Exit status codes matching the Rust application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: ExitStatus,
    pub exit_code: i32,
}

impl CliResponse {
    /// stdout parsed as one JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, self.stdout))
    }

    /// stderr parsed as one JSON document
    pub fn error_json(&self) -> serde_json::Value {
        serde_json::from_str(self.stderr.trim())
            .unwrap_or_else(|e| panic!("stderr is not JSON ({}): {}", e, self.stderr))
    }
}

/// Isolated environment for one CLI run
pub struct MockEnvironment {
    /// Working directory, so no stray `.env` is picked up
    pub work_dir: TempDir,
    pub env_vars: HashMap<String, String>,
}

impl MockEnvironment {
    /// Environment with no Kapso configuration at all
    pub fn empty() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create temp work dir"),
            env_vars: HashMap::new(),
        }
    }

    /// Environment pointing at a mock server
    pub fn for_server(base_url: &str) -> Self {
        let mut env = Self::empty();
        env.set_env("KAPSO_API_BASE_URL", base_url);
        env.set_env("KAPSO_API_KEY", TEST_API_KEY);
        env
    }

    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Write a `.env` file into the working directory
    pub fn write_dotenv(&self, content: &str) {
        std::fs::write(self.work_dir.path().join(".env"), content).expect("Failed to write .env");
    }
}

/// Run the CLI against a mock server
pub fn kapso(base_url: &str, args: &[&str]) -> CliResponse {
    kapso_with_env(args, &MockEnvironment::for_server(base_url))
}

/// Run the CLI with the given arguments and environment
pub fn kapso_with_env(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kapso-observe"));
    cmd.args(args);
    cmd.current_dir(env.work_dir.path());

    for var in ["KAPSO_API_BASE_URL", "KAPSO_API_KEY", "KAPSO_LOG", "KAPSO_LOG_FORMAT"] {
        cmd.env_remove(var);
    }
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().expect("Failed to execute command");
    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(1);

    CliResponse {
        stdout,
        stderr,
        exit_status: ExitStatus::from(exit_code),
        exit_code,
    }
}

/// Matches a request whose raw query string is exactly the given text
pub struct ExactQuery(String);

pub fn exact_query(query: impl Into<String>) -> ExactQuery {
    ExactQuery(query.into())
}

impl Match for ExactQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().unwrap_or("") == self.0
    }
}

/// JSON list response with pagination metadata
pub fn list_body(total: u64) -> serde_json::Value {
    serde_json::json!({
        "data": [],
        "meta": { "page": 1, "per_page": 1, "total_count": total }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_from_i32() {
        assert_eq!(ExitStatus::from(0), ExitStatus::Success);
        assert_eq!(ExitStatus::from(1), ExitStatus::Error);
    }
}
