//! Fetch operations for the daily tender listings.
//!
//! This module enumerates the calendar days of the configured window and
//! issues one listing request per day against the marketplace API. The main
//! entry points are [`iterate_days`] and [`fetch_day`].

mod daily_fetch;
mod day_range;

// Re-export public API
pub use daily_fetch::{build_daily_url, fetch_day, DailyListing};
pub use day_range::iterate_days;
