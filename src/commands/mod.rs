//! Observability commands
//!
//! Each command runs in two steps. [`plan`] validates flags and computes the
//! request without touching configuration or the network, so usage errors
//! surface first. [`execute`] performs the request(s) and returns the document
//! to print.

pub mod api_logs;
pub mod message_details;
pub mod messages;
pub mod overview;
pub mod webhook_deliveries;
pub mod whatsapp_health;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value as JsonValue;

use crate::cli::{CommandName, Flags};
use crate::client::KapsoClient;
use crate::errors::Result;
use crate::output;

pub use overview::{Overview, OverviewRequest};

/// Versioned prefix of every Kapso Platform API path
pub const API_PREFIX: &str = "/platform/v1";

/// Characters left unescaped in a path segment, same set as JavaScript's
/// `encodeURIComponent`
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode an identifier for use as one path segment
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

pub const GENERAL_USAGE: &str = "\
Usage: kapso-observe <command> [flags]

Query the Kapso Platform API for WhatsApp observability data.

Commands:
  messages             List WhatsApp messages
  message-details      Fetch one message (--message-id)
  webhook-deliveries   List webhook delivery attempts
  api-logs             List API request logs
  whatsapp-health      Phone number health (--phone-number-id)
  overview             Phone numbers plus API and webhook counts

Run `kapso-observe <command> --help` for command flags.";

/// Usage text for a command, or the general usage
pub fn usage_for(command: Option<CommandName>) -> &'static str {
    match command {
        None => GENERAL_USAGE,
        Some(CommandName::Messages) => messages::USAGE,
        Some(CommandName::MessageDetails) => message_details::USAGE,
        Some(CommandName::WebhookDeliveries) => webhook_deliveries::USAGE,
        Some(CommandName::ApiLogs) => api_logs::USAGE,
        Some(CommandName::WhatsappHealth) => whatsapp_health::USAGE,
        Some(CommandName::Overview) => overview::USAGE,
    }
}

/// A validated command, ready to run
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// One GET whose JSON body becomes the envelope's `data`
    Single(String),
    /// The overview fan-out
    Overview(OverviewRequest),
}

/// Validate flags and compute the request(s) for `command`
pub fn plan(command: CommandName, flags: &Flags) -> Result<Plan> {
    let path = match command {
        CommandName::Messages => messages::path(flags)?,
        CommandName::MessageDetails => message_details::path(flags)?,
        CommandName::WebhookDeliveries => webhook_deliveries::path(flags)?,
        CommandName::ApiLogs => api_logs::path(flags)?,
        CommandName::WhatsappHealth => whatsapp_health::path(flags)?,
        CommandName::Overview => return Ok(Plan::Overview(OverviewRequest::from_flags(flags)?)),
    };
    Ok(Plan::Single(path))
}

/// Run a plan and return the document to print on stdout
pub async fn execute(plan: &Plan, client: &KapsoClient) -> Result<JsonValue> {
    match plan {
        Plan::Single(path) => {
            let data = client.request(path).await?;
            Ok(output::success(data))
        }
        Plan::Overview(request) => {
            let overview = overview::run(request, client).await?;
            Ok(serde_json::to_value(overview)?)
        }
    }
}
