//! Top-level command line definition using clap
//!
//! Only the command name is parsed by clap. Everything after it is handed to
//! [`crate::cli::flags::parse_flags`] untouched, because command flags follow
//! a looser `--name [value]` grammar. `--help` and `--version` are answered in
//! [`crate::core::run`] before clap sees the arguments, since help is JSON.

use clap::{Parser, ValueEnum};

/// Query the Kapso Platform API for WhatsApp observability data
#[derive(Parser, Debug, Clone)]
#[command(name = "kapso-observe", about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Command to run
    #[arg(value_enum)]
    pub command: CommandName,

    /// Command flags (`--name value` or `--name`)
    #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Available commands
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CommandName {
    /// List WhatsApp messages
    Messages,
    /// Fetch one message
    MessageDetails,
    /// List webhook deliveries
    WebhookDeliveries,
    /// List API request logs
    ApiLogs,
    /// Health of one WhatsApp phone number
    WhatsappHealth,
    /// Phone numbers plus API and webhook activity counts
    Overview,
}

impl CommandName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Messages => "messages",
            CommandName::MessageDetails => "message-details",
            CommandName::WebhookDeliveries => "webhook-deliveries",
            CommandName::ApiLogs => "api-logs",
            CommandName::WhatsappHealth => "whatsapp-health",
            CommandName::Overview => "overview",
        }
    }

    pub fn all() -> &'static [CommandName] {
        &[
            CommandName::Messages,
            CommandName::MessageDetails,
            CommandName::WebhookDeliveries,
            CommandName::ApiLogs,
            CommandName::WhatsappHealth,
            CommandName::Overview,
        ]
    }

    /// Find a command by its CLI name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log format for tracing output on stderr
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}

impl LogFormat {
    /// Parse a `KAPSO_LOG_FORMAT` value; unknown values fall back to text
    pub fn from_env_value(value: Option<&str>) -> Self {
        value
            .and_then(|v| LogFormat::from_str(v.trim(), true).ok())
            .unwrap_or_default()
    }
}
