use crate::errors::{AppError, AppResult};
use crate::models::NormalizedTender;
use serde_json::Value;

use super::dates::parse_marketplace_date;

// Source field candidates per target field, in fallback order. The API has
// shipped several generations of names for the same data.
const ID_FIELDS: &[&str] = &["CodigoExterno", "Codigo", "id", "TenderId"];
const NAME_FIELDS: &[&str] = &["Nombre", "name", "NombreLicitacion"];
const BUYER_FIELDS: &[&str] = &["NombreOrganismo", "buyer", "Comprador"];
const STATUS_FIELDS: &[&str] = &["Estado", "status", "CodigoEstado"];
const PUBLISHED_FIELDS: &[&str] = &["FechaPublicacion", "published_at", "FechaCreacion"];
const CLOSE_FIELDS: &[&str] = &["FechaCierre", "close_at", "FechaFinal"];
const REGION_FIELDS: &[&str] = &["Region", "region"];
const URL_FIELDS: &[&str] = &["Url", "url"];

/// Maps a raw listing record onto the canonical tender schema.
///
/// Each target field takes the first non-empty value among its source
/// candidates; dates are normalized into the reference timezone. A record
/// that still lacks any of the six required fields is rejected whole.
///
/// # Errors
///
/// Returns `MissingFields` naming the required fields that could not be
/// filled. Callers treat this as a per-record condition, not a run failure.
pub fn normalize_tender(item: &Value) -> AppResult<NormalizedTender> {
    let tender_id = required_text(item, ID_FIELDS);
    let name = required_text(item, NAME_FIELDS);
    let buyer = required_text(item, BUYER_FIELDS);
    let status = required_text(item, STATUS_FIELDS);
    let published_at =
        parse_marketplace_date(first_truthy(item, PUBLISHED_FIELDS)).unwrap_or_default();
    let close_at = parse_marketplace_date(first_truthy(item, CLOSE_FIELDS)).unwrap_or_default();
    let region = optional_text(item, REGION_FIELDS);
    let url = optional_text(item, URL_FIELDS);

    let missing: Vec<&str> = [
        ("tender_id", &tender_id),
        ("name", &name),
        ("buyer", &buyer),
        ("status", &status),
        ("published_at", &published_at),
        ("close_at", &close_at),
    ]
    .iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| *field)
    .collect();

    if !missing.is_empty() {
        return Err(AppError::MissingFields {
            tender_id,
            fields: missing.join(", "),
        });
    }

    Ok(NormalizedTender {
        tender_id,
        name,
        buyer,
        status,
        published_at,
        close_at,
        region,
        url,
    })
}

/// First candidate whose value is non-empty. Nulls, missing keys, empty
/// strings, zeros and `false` fall through to the next name; whitespace-only
/// strings do not (they are selected, trimmed, and fail the required check).
fn first_truthy<'a>(item: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| item.get(*key))
        .find(|value| is_truthy(value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Text form of a selected value, trimmed. Non-string scalars keep their
/// JSON representation (numeric ids show up in the wild).
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn required_text(item: &Value, candidates: &[&str]) -> String {
    first_truthy(item, candidates)
        .map(field_text)
        .unwrap_or_default()
}

fn optional_text(item: &Value, candidates: &[&str]) -> Option<String> {
    first_truthy(item, candidates)
        .map(field_text)
        .filter(|text| !text.is_empty())
}
