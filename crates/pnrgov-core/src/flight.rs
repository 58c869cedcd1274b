//! # Flight Segments
//!
//! One flown leg of an itinerary. The `segment_number` is the authoritative
//! ordering key — the encoder always sorts by it, never by list position.
//!
//! A flight is a *codeshare* iff an operating carrier is present and
//! differs from the marketing airline code. The operating flight number is
//! optional and falls back to the marketing number.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::identifier::FlightId;

/// A single flight segment within a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    /// Identity used by seat and bag references.
    #[serde(default)]
    pub id: FlightId,

    /// Marketing flight number, digits only (e.g. `"101"`).
    pub flight_number: String,

    /// Two-character marketing airline designator (e.g. `"FI"`).
    pub airline_code: String,

    /// Departure airport IATA code.
    pub departure_airport: String,

    /// Arrival airport IATA code.
    pub arrival_airport: String,

    /// Scheduled departure, carrier-local.
    pub departure_time: NaiveDateTime,

    /// Scheduled arrival, carrier-local. Never precedes departure.
    pub arrival_time: NaiveDateTime,

    /// Aircraft equipment code (e.g. `"738"`, `"777"`).
    pub aircraft_type: String,

    /// Reservation booking designator / service class (e.g. `"Y"`).
    pub service_class: String,

    /// Operating carrier designator when another airline flies the leg.
    /// May equal the marketing code on non-codeshare legs.
    #[serde(default)]
    pub operating_carrier: Option<String>,

    /// Operating carrier's own flight number. Falls back to the marketing
    /// number when absent.
    #[serde(default)]
    pub operating_flight_number: Option<String>,

    /// Booking status code (e.g. `"HK"`).
    pub flight_status: String,

    /// 1-based position in the itinerary; the authoritative ordering key.
    pub segment_number: u32,
}

impl Flight {
    /// Whether this leg is marketed by one airline and operated by another.
    pub fn is_codeshare(&self) -> bool {
        match self.operating_carrier.as_deref() {
            Some(op) => !op.is_empty() && op != self.airline_code,
            None => false,
        }
    }

    /// The carrier that actually operates the leg; the marketing carrier
    /// when no separate operating carrier is recorded.
    pub fn operating_airline(&self) -> &str {
        match self.operating_carrier.as_deref() {
            Some(op) if !op.is_empty() => op,
            _ => &self.airline_code,
        }
    }

    /// The operating carrier's flight number; the marketing number when the
    /// operating carrier has none of its own.
    pub fn operating_number(&self) -> &str {
        match self.operating_flight_number.as_deref() {
            Some(num) if !num.is_empty() => num,
            _ => &self.flight_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn leg() -> Flight {
        let dep = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        Flight {
            id: FlightId::new(),
            flight_number: "101".into(),
            airline_code: "FI".into(),
            departure_airport: "KEF".into(),
            arrival_airport: "JFK".into(),
            departure_time: dep,
            arrival_time: dep + chrono::Duration::hours(6),
            aircraft_type: "738".into(),
            service_class: "Y".into(),
            operating_carrier: None,
            operating_flight_number: None,
            flight_status: "HK".into(),
            segment_number: 1,
        }
    }

    #[test]
    fn test_no_operating_carrier_is_not_codeshare() {
        let f = leg();
        assert!(!f.is_codeshare());
        assert_eq!(f.operating_airline(), "FI");
        assert_eq!(f.operating_number(), "101");
    }

    #[test]
    fn test_same_operating_carrier_is_not_codeshare() {
        let mut f = leg();
        f.operating_carrier = Some("FI".into());
        assert!(!f.is_codeshare());
    }

    #[test]
    fn test_distinct_operating_carrier_is_codeshare() {
        let mut f = leg();
        f.operating_carrier = Some("SK".into());
        f.operating_flight_number = Some("4512".into());
        assert!(f.is_codeshare());
        assert_eq!(f.operating_airline(), "SK");
        assert_eq!(f.operating_number(), "4512");
    }

    #[test]
    fn test_empty_operating_carrier_is_not_codeshare() {
        let mut f = leg();
        f.operating_carrier = Some(String::new());
        assert!(!f.is_codeshare());
        assert_eq!(f.operating_airline(), "FI");
    }
}
