//! `overview`: phone numbers plus activity counts for a period
//!
//! Counts are read from `meta.total_count` of `per_page=1` list queries, one
//! unfiltered and one with `errors_only=true`, for both API logs and webhook
//! deliveries. The four count queries run concurrently and the composite is
//! only emitted once all of them succeeded.

use serde::Serialize;
use serde_json::{Number, Value as JsonValue};
use tracing::debug;

use crate::cli::query::encode_query;
use crate::cli::{Flag, Flags};
use crate::client::KapsoClient;
use crate::errors::{KapsoError, Result};

use super::{api_logs, webhook_deliveries, API_PREFIX};

pub const USAGE: &str = "\
Usage: kapso-observe overview [flags]

Summarize WhatsApp phone numbers, API calls and webhook deliveries.

Flags:
  --period <span>    Window for the counts (default: 24h)
  --per-page <n>     Phone numbers to list (default: 50)";

pub const DEFAULT_PERIOD: &str = "24h";
pub const DEFAULT_PER_PAGE: f64 = 50.0;

/// Validated overview parameters
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewRequest {
    pub period: String,
    pub per_page: f64,
}

impl OverviewRequest {
    pub fn from_flags(flags: &Flags) -> Result<Self> {
        let period = match flags.get("period") {
            Flag::Absent => DEFAULT_PERIOD.to_string(),
            Flag::Value(v) if !v.trim().is_empty() => v.to_string(),
            _ => return Err(KapsoError::usage("Flag --period requires a value")),
        };

        let per_page = match flags.get("per-page") {
            Flag::Absent => DEFAULT_PER_PAGE,
            Flag::Present => return Err(invalid_per_page("")),
            Flag::Value(v) => parse_per_page(v)?,
        };

        Ok(Self { period, per_page })
    }

    pub fn phone_numbers_path(&self) -> Result<String> {
        let query = encode_query(&[("per_page", format_number(self.per_page))])?;
        Ok(format!("{}/whatsapp/phone_numbers{}", API_PREFIX, query))
    }

    /// Path of a `per_page=1` count query against `resource`
    pub fn count_path(&self, resource: &str, errors_only: bool) -> Result<String> {
        let mut pairs = vec![("period", self.period.clone())];
        if errors_only {
            pairs.push(("errors_only", "true".to_string()));
        }
        pairs.push(("per_page", "1".to_string()));
        Ok(format!("{}{}{}", API_PREFIX, resource, encode_query(&pairs)?))
    }
}

fn invalid_per_page(value: &str) -> KapsoError {
    KapsoError::usage(format!(
        "Invalid value for --per-page: {:?} (expected a positive number)",
        value
    ))
}

fn parse_per_page(value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(invalid_per_page(value)),
    }
}

/// `50.0` renders as `50`, `2.5` as `2.5`
fn format_number(n: f64) -> String {
    n.to_string()
}

/// Unfiltered and failed totals for one resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Counts {
    pub total: Option<Number>,
    pub failed: Option<Number>,
}

/// Composite overview document
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub ok: bool,
    pub period: String,
    pub phone_numbers: JsonValue,
    pub api_calls: Counts,
    pub webhook_deliveries: Counts,
    pub notes: Vec<String>,
}

/// `meta.total_count` when it is a number, `None` for anything else
pub fn extract_total_count(value: &JsonValue) -> Option<Number> {
    match value.pointer("/meta/total_count") {
        Some(JsonValue::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

/// The `data` array of a list response, or the whole response
fn phone_numbers_from(response: JsonValue) -> JsonValue {
    match response {
        JsonValue::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(JsonValue::Null)
        }
        other => other,
    }
}

fn build_notes(api_calls: &Counts, webhook_deliveries: &Counts) -> Vec<String> {
    let mut notes = vec![
        "Counts are meta.total_count of per_page=1 queries for the period; failed counts use errors_only=true.".to_string(),
    ];

    let missing = [
        ("api_calls.total", &api_calls.total),
        ("api_calls.failed", &api_calls.failed),
        ("webhook_deliveries.total", &webhook_deliveries.total),
        ("webhook_deliveries.failed", &webhook_deliveries.failed),
    ];
    for (field, count) in missing {
        if count.is_none() {
            notes.push(format!("{} is null: response had no numeric meta.total_count.", field));
        }
    }

    notes
}

pub async fn run(request: &OverviewRequest, client: &KapsoClient) -> Result<Overview> {
    let phone_numbers = client.request(&request.phone_numbers_path()?).await?;

    let api_total_path = request.count_path(api_logs::PATH, false)?;
    let api_failed_path = request.count_path(api_logs::PATH, true)?;
    let webhook_total_path = request.count_path(webhook_deliveries::PATH, false)?;
    let webhook_failed_path = request.count_path(webhook_deliveries::PATH, true)?;

    let (api_total, api_failed, webhook_total, webhook_failed) = futures::try_join!(
        client.request(&api_total_path),
        client.request(&api_failed_path),
        client.request(&webhook_total_path),
        client.request(&webhook_failed_path),
    )?;

    let api_calls = Counts {
        total: extract_total_count(&api_total),
        failed: extract_total_count(&api_failed),
    };
    let webhook_deliveries = Counts {
        total: extract_total_count(&webhook_total),
        failed: extract_total_count(&webhook_failed),
    };
    debug!(?api_calls, ?webhook_deliveries, "Overview counts");

    let notes = build_notes(&api_calls, &webhook_deliveries);

    Ok(Overview {
        ok: true,
        period: request.period.clone(),
        phone_numbers: phone_numbers_from(phone_numbers),
        api_calls,
        webhook_deliveries,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_flags;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let request = OverviewRequest::from_flags(&parse_flags::<&str>(&[])).unwrap();
        assert_eq!(request.period, "24h");
        assert_eq!(request.per_page, 50.0);
        assert_eq!(
            request.phone_numbers_path().unwrap(),
            "/platform/v1/whatsapp/phone_numbers?per_page=50"
        );
    }

    #[test]
    fn test_count_paths() {
        let request = OverviewRequest::from_flags(&parse_flags(&["--period", "7d"])).unwrap();
        assert_eq!(
            request.count_path(api_logs::PATH, false).unwrap(),
            "/platform/v1/api_logs?period=7d&per_page=1"
        );
        assert_eq!(
            request.count_path(webhook_deliveries::PATH, true).unwrap(),
            "/platform/v1/webhook_deliveries?period=7d&errors_only=true&per_page=1"
        );
    }

    #[test]
    fn test_per_page_validation() {
        for bad in ["0", "-5", "abc", "inf", "NaN"] {
            let flags = parse_flags(&["--per-page", bad]);
            let err = OverviewRequest::from_flags(&flags).unwrap_err();
            assert!(err.is_usage(), "{bad}");
        }
        assert!(OverviewRequest::from_flags(&parse_flags(&["--per-page"])).is_err());

        let flags = parse_flags(&["--per-page", "2.5"]);
        let request = OverviewRequest::from_flags(&flags).unwrap();
        assert_eq!(
            request.phone_numbers_path().unwrap(),
            "/platform/v1/whatsapp/phone_numbers?per_page=2.5"
        );
    }

    #[test]
    fn test_period_switch_rejected() {
        let err = OverviewRequest::from_flags(&parse_flags(&["--period"])).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_extract_total_count() {
        assert_eq!(
            extract_total_count(&json!({"meta": {"total_count": 12}})),
            Some(Number::from(12))
        );
        assert_eq!(extract_total_count(&json!({"meta": {"total_count": "12"}})), None);
        assert_eq!(extract_total_count(&json!({"meta": {}})), None);
        assert_eq!(extract_total_count(&json!([1, 2])), None);
        assert_eq!(extract_total_count(&json!(null)), None);
    }

    #[test]
    fn test_phone_numbers_from() {
        assert_eq!(phone_numbers_from(json!({"data": [{"id": "p1"}], "meta": {}})), json!([{"id": "p1"}]));
        assert_eq!(phone_numbers_from(json!([{"id": "p1"}])), json!([{"id": "p1"}]));
    }

    #[test]
    fn test_notes_mention_missing_counts() {
        let present = Counts { total: Some(Number::from(1)), failed: Some(Number::from(0)) };
        let partial = Counts { total: None, failed: Some(Number::from(0)) };
        let notes = build_notes(&present, &partial);
        assert_eq!(notes.len(), 2);
        assert!(notes[1].starts_with("webhook_deliveries.total is null"));
    }
}
