//! `whatsapp-health`: health of one phone number

use crate::cli::{require_flag, Flags};
use crate::errors::Result;

use super::{encode_segment, API_PREFIX};

pub const USAGE: &str = "\
Usage: kapso-observe whatsapp-health --phone-number-id <id>

Show messaging health for a WhatsApp phone number.

Flags:
  --phone-number-id <id>   Required";

pub fn path(flags: &Flags) -> Result<String> {
    let id = require_flag(flags, "phone-number-id")?;
    Ok(format!("{}/whatsapp/phone_numbers/{}/health", API_PREFIX, encode_segment(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_flags;

    #[test]
    fn test_path() {
        let flags = parse_flags(&["--phone-number-id", "1234567890"]);
        assert_eq!(
            path(&flags).unwrap(),
            "/platform/v1/whatsapp/phone_numbers/1234567890/health"
        );
    }

    #[test]
    fn test_switch_is_missing() {
        let err = path(&parse_flags(&["--phone-number-id"])).unwrap_err();
        assert_eq!(err.to_string(), "Missing required flag --phone-number-id");
    }
}
