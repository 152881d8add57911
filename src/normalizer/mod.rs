//! Normalization of raw marketplace records into the canonical schema.
//!
//! Raw listings mix several generations of field names and three date
//! representations. [`normalize_tender`] maps each record onto
//! [`crate::models::NormalizedTender`] or rejects it whole when a required
//! field cannot be filled.

mod dates;
mod record;

// Re-export public API
pub use dates::parse_marketplace_date;
pub use record::normalize_tender;
