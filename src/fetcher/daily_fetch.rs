use crate::constants::DAY_PARAM_FORMAT;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Daily listing payload returned by the marketplace API.
///
/// Days with no published tenders come back without a `Listado` field, which
/// is treated as an empty listing rather than an error.
#[derive(Debug, Default, Deserialize)]
pub struct DailyListing {
    #[serde(default, rename = "Listado")]
    pub listado: Vec<serde_json::Value>,
}

/// Builds the listing URL for a single day.
///
/// The endpoint takes the credential and the day as query parameters:
/// `?ticket=...&fecha=DDMMYYYY`.
pub fn build_daily_url(api_url: &str, ticket: &str, day: NaiveDate) -> AppResult<Url> {
    let mut url = Url::parse(api_url)?;
    url.query_pairs_mut()
        .append_pair("ticket", ticket)
        .append_pair("fecha", &day.format(DAY_PARAM_FORMAT).to_string());
    Ok(url)
}

/// Fetches the tender listing for a single day.
///
/// One request per day, no retry and no pagination: the marketplace returns
/// the full day's listing in a single response. The query string carries the
/// ticket, so only the day is logged.
///
/// # Errors
///
/// Returns `NetworkError` if the request fails or the server responds with a
/// non-success status, and `ParseError` if the body is not the expected JSON
/// shape.
pub async fn fetch_day(
    client: &reqwest::Client,
    api_url: &str,
    ticket: &str,
    day: NaiveDate,
) -> AppResult<DailyListing> {
    let url = build_daily_url(api_url, ticket, day)?;

    debug!(day = %day, "Requesting daily listing");
    let body = client
        .get(url.as_str())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let listing: DailyListing = serde_json::from_str(&body)?;
    Ok(listing)
}
