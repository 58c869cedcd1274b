//! # Envelope Segments
//!
//! Interchange, group, and message headers and trailers (UNB/UNG/UNH,
//! UNT/UNE/UNZ), the message action (MSG), originator (ORG), and the
//! passenger count (EQN).

use chrono::NaiveDateTime;

use pnrgov_core::Flight;

use crate::error::EncodeError;
use crate::format::{date_ddmmyy, time_hhmm};
use crate::segment::Segment;

/// UNH flight designator for a reservation with no flights.
pub const UNH_PLACEHOLDER: &str = "XXXX/000000/0000";

/// Interchange header: `UNB+IATA:1+sender+receiver+date:time+ref+PNRGOV'`.
pub fn unb(
    sender: &str,
    receiver: &str,
    issued_at: NaiveDateTime,
    interchange_reference: &str,
) -> Result<String, EncodeError> {
    Segment::new("UNB")
        .composite(["IATA", "1"])
        .element(sender)
        .element(receiver)
        .composite([date_ddmmyy(issued_at), time_hhmm(issued_at)])
        .element(interchange_reference)
        .element("PNRGOV")
        .finish()
}

/// Functional group header: mirrors the UNB sender/receiver and carries
/// the fixed application reference `IA` and message version `11:1`.
pub fn ung(
    sender: &str,
    receiver: &str,
    issued_at: NaiveDateTime,
    group_reference: &str,
) -> Result<String, EncodeError> {
    Segment::new("UNG")
        .element("PNRGOV")
        .element(sender)
        .element(receiver)
        .composite([date_ddmmyy(issued_at), time_hhmm(issued_at)])
        .element(group_reference)
        .element("IA")
        .composite(["11", "1"])
        .finish()
}

/// Message header: `UNH+ref+PNRGOV:11:1:IA+<flight designator>'`.
pub fn unh(message_reference: &str, flight_designator: &str) -> Result<String, EncodeError> {
    Segment::new("UNH")
        .element(message_reference)
        .composite(["PNRGOV", "11", "1", "IA"])
        .element(flight_designator)
        .finish()
}

/// The single-mode UNH flight designator:
/// `<airline><number>/<ddMMyy>/<HHmm>` of the reporting flight.
pub fn unh_flight_designator(flight: &Flight) -> String {
    format!(
        "{}{}/{}/{}",
        flight.airline_code,
        flight.flight_number,
        date_ddmmyy(flight.departure_time),
        time_hhmm(flight.departure_time)
    )
}

/// Message action details: fixed action code `22` (PNR data push).
pub fn msg() -> Result<String, EncodeError> {
    Segment::new("MSG").composite(["", "22"]).finish()
}

/// Originator of the interchange: the reporting airline alone.
pub fn org(airline: &str) -> Result<String, EncodeError> {
    Segment::new("ORG").element(airline).finish()
}

/// Booking agent originator: `ORG+XX:<agency>'`.
pub fn booking_org(agency: &str) -> Result<String, EncodeError> {
    Segment::new("ORG")
        .composite(["XX", agency])
        .finish()
}

/// Passenger count for the interchange.
pub fn eqn(passenger_count: usize) -> Result<String, EncodeError> {
    Segment::new("EQN")
        .element(passenger_count.to_string())
        .finish()
}

/// Start of one PNR section.
pub fn src() -> Result<String, EncodeError> {
    Segment::new("SRC").finish()
}

/// Message trailer carrying the segment count and message reference.
pub fn unt(segment_count: usize, message_reference: &str) -> Result<String, EncodeError> {
    Segment::new("UNT")
        .element(segment_count.to_string())
        .element(message_reference)
        .finish()
}

/// Functional group trailer: fixed control count of 1.
pub fn une(group_reference: &str) -> Result<String, EncodeError> {
    Segment::new("UNE")
        .element("1")
        .element(group_reference)
        .finish()
}

/// Interchange trailer: fixed control count of 1.
pub fn unz(interchange_reference: &str) -> Result<String, EncodeError> {
    Segment::new("UNZ")
        .element("1")
        .element(interchange_reference)
        .finish()
}
