//! `message-details`: fetch a single message

use crate::cli::{require_flag, Flags};
use crate::errors::Result;

use super::{encode_segment, API_PREFIX};

pub const USAGE: &str = "\
Usage: kapso-observe message-details --message-id <id>

Fetch one WhatsApp message with its delivery details.

Flags:
  --message-id <id>   Required";

pub fn path(flags: &Flags) -> Result<String> {
    let id = require_flag(flags, "message-id")?;
    Ok(format!("{}/whatsapp/messages/{}", API_PREFIX, encode_segment(id)))
}
