//! `api-logs`: list API request logs

use crate::cli::{build_query, Flags, QueryParam};
use crate::errors::Result;

use super::API_PREFIX;

pub const USAGE: &str = "\
Usage: kapso-observe api-logs [flags]

List requests made against the Kapso API.

Flags:
  --period <span>          e.g. 24h, 7d
  --endpoint <path>
  --status-code <code>     Passed through as given
  --phone-number-id <id>
  --errors-only <value>    Passed through as given
  --page <n>
  --per-page <n>";

pub(crate) const PATH: &str = "/api_logs";

const QUERY: &[QueryParam] = &[
    QueryParam::raw("period", "period"),
    QueryParam::raw("endpoint", "endpoint"),
    QueryParam::raw("status-code", "status_code"),
    QueryParam::raw("phone-number-id", "phone_number_id"),
    QueryParam::raw("errors-only", "errors_only"),
    QueryParam::raw("page", "page"),
    QueryParam::raw("per-page", "per_page"),
];

pub fn path(flags: &Flags) -> Result<String> {
    Ok(format!("{}{}{}", API_PREFIX, PATH, build_query(flags, QUERY)?))
}
