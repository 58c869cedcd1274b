//! # Flight Segments
//!
//! The two TVL forms, operating-carrier detail (TRA), reporting info
//! (RPI), and equipment type (APD).
//!
//! The header-level TVL always carries the *operating* identity of the
//! reported flight; the itinerary-level TVL carries the *marketing*
//! identity, appending the operating carrier as a second component only on
//! codeshares, with the TRA segment carrying the operating detail.

use pnrgov_core::Flight;

use crate::error::EncodeError;
use crate::format::{date_ddmmyy, time_hhmm};
use crate::segment::Segment;

/// Level-0 TVL for the reported flight. Carries the operating carrier and
/// operating flight number only, never the marketing pair, and no second
/// carrier component.
pub fn header_tvl(flight: &Flight) -> Result<String, EncodeError> {
    Segment::new("TVL")
        .composite([
            date_ddmmyy(flight.departure_time),
            time_hhmm(flight.departure_time),
            date_ddmmyy(flight.arrival_time),
            time_hhmm(flight.arrival_time),
        ])
        .element(flight.departure_airport.as_str())
        .element(flight.arrival_airport.as_str())
        .element(flight.operating_airline())
        .composite([flight.operating_number(), flight.service_class.as_str()])
        .finish()
}

/// Itinerary-level TVL. Marketing carrier in the primary slot; on a
/// codeshare the operating carrier is appended as a second component.
pub fn itinerary_tvl(flight: &Flight) -> Result<String, EncodeError> {
    let carrier = if flight.is_codeshare() {
        vec![
            flight.airline_code.clone(),
            flight.operating_airline().to_string(),
        ]
    } else {
        vec![flight.airline_code.clone()]
    };
    Segment::new("TVL")
        .composite([
            date_ddmmyy(flight.departure_time),
            time_hhmm(flight.departure_time),
            date_ddmmyy(flight.arrival_time),
            time_hhmm(flight.arrival_time),
        ])
        .element(flight.departure_airport.as_str())
        .element(flight.arrival_airport.as_str())
        .composite(carrier)
        .composite([flight.flight_number.as_str(), flight.service_class.as_str()])
        .finish()
}

/// Operating-carrier detail, emitted only for codeshare flights.
pub fn tra(flight: &Flight) -> Result<String, EncodeError> {
    Segment::new("TRA")
        .element(flight.operating_airline())
        .composite([flight.operating_number(), "D"])
        .finish()
}

/// Reporting info: passenger count on the flight plus its status code.
pub fn rpi(passenger_count: usize, status: &str) -> Result<String, EncodeError> {
    Segment::new("RPI")
        .element(passenger_count.to_string())
        .element(status)
        .finish()
}

/// Equipment type for the flight.
pub fn apd(aircraft_type: &str) -> Result<String, EncodeError> {
    Segment::new("APD").element(aircraft_type).finish()
}
