//! `webhook-deliveries`: list webhook delivery attempts

use crate::cli::{build_query, Flags, QueryParam};
use crate::errors::Result;

use super::API_PREFIX;

pub const USAGE: &str = "\
Usage: kapso-observe webhook-deliveries [flags]

List webhook delivery attempts.

Flags:
  --period <span>        e.g. 24h, 7d
  --status <status>      delivered, failed, ...
  --webhook-id <id>
  --errors-only <value>  Passed through as given
  --page <n>
  --per-page <n>";

pub(crate) const PATH: &str = "/webhook_deliveries";

const QUERY: &[QueryParam] = &[
    QueryParam::raw("period", "period"),
    QueryParam::raw("status", "status"),
    QueryParam::raw("webhook-id", "webhook_id"),
    QueryParam::raw("errors-only", "errors_only"),
    QueryParam::raw("page", "page"),
    QueryParam::raw("per-page", "per_page"),
];

pub fn path(flags: &Flags) -> Result<String> {
    Ok(format!("{}{}{}", API_PREFIX, PATH, build_query(flags, QUERY)?))
}
