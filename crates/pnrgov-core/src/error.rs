//! # Error Types — Domain Validation Failures
//!
//! Errors raised while constructing or validating a reservation graph.
//! The EDIFACT encoder assumes clean input (its own error type lives in
//! `pnrgov-edifact`); the checks behind these errors run at the boundary
//! where a graph is built — the sample generator, the API, or a caller
//! assembling reservations by hand.

use thiserror::Error;

/// Top-level error type for domain construction and validation.
#[derive(Error, Debug)]
pub enum PnrError {
    /// Record locator is not six uppercase letters or digits.
    #[error("invalid record locator {0:?}: must be 6 uppercase letters or digits")]
    InvalidRecordLocator(String),

    /// A flight arrives before it departs.
    #[error("flight {flight_number} arrives at {arrival} before departing at {departure}")]
    ArrivalBeforeDeparture {
        /// Marketing flight number of the offending flight.
        flight_number: String,
        /// Scheduled departure, carrier-local.
        departure: chrono::NaiveDateTime,
        /// Scheduled arrival, carrier-local.
        arrival: chrono::NaiveDateTime,
    },

    /// A required field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A seat assignment or bag references a flight that is not part of
    /// the reservation.
    #[error("dangling flight reference {0} in {1}")]
    DanglingFlightReference(crate::FlightId, &'static str),
}
