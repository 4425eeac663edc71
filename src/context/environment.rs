//! Execution environment

use crate::config::EnvVars;

/// Everything an invocation reads from its surroundings
#[derive(Debug, Clone)]
pub struct Environment {
    /// Environment variables (process env over `.env`)
    pub vars: EnvVars,
    pub program_name: String,
}

impl Environment {
    /// Environment of the running process
    pub fn init() -> Self {
        Self::with_vars(EnvVars::load())
    }

    pub fn with_vars(vars: EnvVars) -> Self {
        Self {
            vars,
            program_name: "kapso-observe".to_string(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::with_vars(EnvVars::new())
    }
}
