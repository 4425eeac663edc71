//! `messages`: list WhatsApp messages

use crate::cli::{build_query, Flags, QueryParam};
use crate::errors::Result;

use super::API_PREFIX;

pub const USAGE: &str = "\
Usage: kapso-observe messages [flags]

List WhatsApp messages.

Flags:
  --direction <inbound|outbound>
  --status <status>
  --phone-number <e164>          Customer phone number
  --conversation-id <id>
  --message-type <type>          text, image, template, ...
  --phone-number-id <id>         WhatsApp phone number id (--phone_number_id is deprecated)
  --has-media <bool>             true/false, 1/0, yes/no
  --page <n>
  --per-page <n>";

const QUERY: &[QueryParam] = &[
    QueryParam::raw("direction", "direction"),
    QueryParam::raw("status", "status"),
    QueryParam::raw("phone-number", "phone_number"),
    QueryParam::raw("conversation-id", "conversation_id"),
    QueryParam::raw("message-type", "message_type"),
    QueryParam::raw("phone-number-id", "phone_number_id").with_alias("phone_number_id"),
    QueryParam::boolean("has-media", "has_media"),
    QueryParam::raw("page", "page"),
    QueryParam::raw("per-page", "per_page"),
];

pub fn path(flags: &Flags) -> Result<String> {
    Ok(format!("{}/whatsapp/messages{}", API_PREFIX, build_query(flags, QUERY)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_flags;

    #[test]
    fn test_full_mapping() {
        let flags = parse_flags(&[
            "--per-page", "10",
            "--direction", "inbound",
            "--status", "read",
            "--phone-number", "+15550001",
            "--conversation-id", "c1",
            "--message-type", "image",
            "--phone-number-id", "p1",
            "--has-media", "yes",
            "--page", "2",
        ]);
        assert_eq!(
            path(&flags).unwrap(),
            "/platform/v1/whatsapp/messages?direction=inbound&status=read\
             &phone_number=%2B15550001&conversation_id=c1&message_type=image\
             &phone_number_id=p1&has_media=true&page=2&per_page=10"
        );
    }

    #[test]
    fn test_no_flags() {
        let flags = parse_flags::<&str>(&[]);
        assert_eq!(path(&flags).unwrap(), "/platform/v1/whatsapp/messages");
    }

    #[test]
    fn test_has_media_false() {
        for token in ["false", "0", "no"] {
            let flags = parse_flags(&["--has-media", token]);
            assert_eq!(path(&flags).unwrap(), "/platform/v1/whatsapp/messages?has_media=false");
        }
    }

    #[test]
    fn test_has_media_invalid() {
        let flags = parse_flags(&["--has-media", "sometimes"]);
        assert!(path(&flags).unwrap_err().is_usage());
    }

    #[test]
    fn test_deprecated_phone_number_id() {
        let flags = parse_flags(&["--phone_number_id", "p1"]);
        assert_eq!(path(&flags).unwrap(), "/platform/v1/whatsapp/messages?phone_number_id=p1");
    }
}
