//! # Reservation Control Segments
//!
//! Reservation control info (RCI), transaction date/time (DAT), and the
//! free-text contact segment (IFT).

use chrono::NaiveDateTime;

use pnrgov_core::RecordLocator;

use crate::error::EncodeError;
use crate::format::{date_ddmmyy, time_hhmm};
use crate::segment::Segment;

/// Reservation control information: airline, record locator, and the
/// reservation creation date/time. Re-emitted once after every flight
/// block to re-anchor the PNR reference.
pub fn rci(
    airline: &str,
    record_locator: &RecordLocator,
    created: NaiveDateTime,
) -> Result<String, EncodeError> {
    Segment::new("RCI")
        .composite([
            airline,
            record_locator.as_str(),
            "",
            date_ddmmyy(created).as_str(),
            time_hhmm(created).as_str(),
        ])
        .finish()
}

/// Last PNR transaction date/time with the fixed qualifier `700`.
pub fn dat(created: NaiveDateTime) -> Result<String, EncodeError> {
    Segment::new("DAT")
        .composite([
            "700",
            date_ddmmyy(created).as_str(),
            time_hhmm(created).as_str(),
        ])
        .finish()
}

/// Free-text contact information with the fixed qualifier `4:28`.
pub fn ift(text: &str) -> Result<String, EncodeError> {
    Segment::new("IFT")
        .composite(["4", "28"])
        .element(text)
        .finish()
}
