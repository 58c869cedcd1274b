//! # Field Formatting
//!
//! Fixed-width date and time tokens used by every segment builder. Callers
//! supply a concrete value — absent values must be defaulted before this
//! layer is reached.

use chrono::{NaiveDate, NaiveDateTime};

/// Six-digit day-month-year token (`140326` for 14 March 2026).
pub fn date_ddmmyy(value: NaiveDateTime) -> String {
    value.format("%d%m%y").to_string()
}

/// Four-digit hour-minute token (`0830`).
pub fn time_hhmm(value: NaiveDateTime) -> String {
    value.format("%H%M").to_string()
}

/// Day, abbreviated month, year, uppercased (`21JUL88`). Used for dates of
/// birth and document expiry in SSR DOCS.
pub fn date_ddmmmyy(value: NaiveDate) -> String {
    value.format("%d%b%y").to_string().to_uppercase()
}

/// Six-digit year-month-day token (`260314`), used by the manifest message
/// header's flight designator.
pub fn date_yymmdd(value: NaiveDateTime) -> String {
    value.format("%y%m%d").to_string()
}
