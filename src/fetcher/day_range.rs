use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

/// Produces the inclusive sequence of calendar days between two instants.
///
/// Only the date component matters; the time of day of either boundary is
/// ignored. Callers guarantee `start <= end` (configuration resolution swaps
/// a reversed pair), but an inverted pair simply yields an empty sequence.
pub fn iterate_days(start: DateTime<Tz>, end: DateTime<Tz>) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut cursor = start.date_naive();
    let last = end.date_naive();

    while cursor <= last {
        days.push(cursor);
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }

    days
}
