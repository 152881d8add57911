use crate::constants::{EPOCH_DATE_PATTERN, MARKETPLACE_TZ};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Cached regex for the wrapped epoch date marker.
/// Compiled once at initialization for performance.
static EPOCH_DATE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Parses a marketplace date value into an ISO-8601 string in the reference
/// timezone.
///
/// Recognizes, in order:
/// - the legacy `/Date(1707777000000)/` millisecond-epoch marker (an
///   optional `±HHMM` suffix is ignored, the millis are a UTC epoch),
/// - ISO-8601 date-times with an explicit offset (`Z` included),
/// - naive date-times and bare dates, assumed to be in the reference
///   timezone.
///
/// Returns `None` for missing, empty, or unrecognized values; callers decide
/// whether the field was required.
pub fn parse_marketplace_date(raw: Option<&Value>) -> Option<String> {
    let text = raw_text(raw?)?;

    let regex = EPOCH_DATE_REGEX.get_or_init(|| {
        Regex::new(EPOCH_DATE_PATTERN).expect("EPOCH_DATE_PATTERN is a valid regex pattern")
    });

    if let Some(captures) = regex.captures(&text) {
        let millis: i64 = captures.get(1)?.as_str().parse().ok()?;
        let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;
        return Some(format_in_tz(utc.with_timezone(&MARKETPLACE_TZ)));
    }

    // Explicit offset: "Z" and "+03:00" via RFC 3339, "+0300" via %z
    if let Ok(dt) = DateTime::parse_from_rfc3339(&text)
        .or_else(|_| DateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%z"))
    {
        return Some(format_in_tz(dt.with_timezone(&MARKETPLACE_TZ)));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f") {
        return localize(naive);
    }

    if let Ok(date) = NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
        return localize(date.and_time(NaiveTime::MIN));
    }

    None
}

fn raw_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    };
    (!text.is_empty()).then_some(text)
}

fn localize(naive: NaiveDateTime) -> Option<String> {
    MARKETPLACE_TZ
        .from_local_datetime(&naive)
        .earliest()
        .map(format_in_tz)
}

fn format_in_tz(dt: DateTime<Tz>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
