//! # Single-Reservation Interchange
//!
//! Wraps one PNR block with the UNA/UNB/UNG/UNH envelope, the
//! MSG/ORG/TVL/EQN header group, and the UNT/UNE/UNZ trailers. The
//! reporting flight is the one with the lowest segment number; a
//! flightless reservation falls back to the `XX` sender and the zero
//! filled UNH designator.

use chrono::{NaiveDateTime, Utc};
use rand::Rng;

use pnrgov_core::Reservation;

use crate::error::EncodeError;
use crate::pnr::write_pnr_block;
use crate::refgen;
use crate::segments::{envelope, flight as flight_seg};
use crate::writer::InterchangeWriter;
use crate::{DEFAULT_AIRLINE, DEFAULT_RECEIVER};

/// Encode one reservation as a complete PNRGOV interchange.
///
/// `issued_at` stamps the envelope date/time elements and the time-based
/// references; `rng` feeds reference suffixes and synthesized ticket
/// numbers. Fixing both reproduces the output byte for byte.
pub fn encode_reservation(
    reservation: &Reservation,
    receiver: Option<&str>,
    issued_at: NaiveDateTime,
    rng: &mut impl Rng,
) -> Result<String, EncodeError> {
    let message_reference = refgen::message_reference(issued_at);
    let interchange_reference = refgen::interchange_reference(issued_at, rng);

    let reporting_flight = reservation.reporting_flight();
    let sender = reporting_flight
        .map(|f| f.airline_code.as_str())
        .unwrap_or(DEFAULT_AIRLINE);
    let receiver = receiver.unwrap_or(DEFAULT_RECEIVER);

    let mut writer = InterchangeWriter::new();
    writer.push(envelope::unb(
        sender,
        receiver,
        issued_at,
        &interchange_reference,
    )?);
    writer.push(envelope::ung(
        sender,
        receiver,
        issued_at,
        &interchange_reference,
    )?);

    let designator = reporting_flight
        .map(envelope::unh_flight_designator)
        .unwrap_or_else(|| envelope::UNH_PLACEHOLDER.to_string());
    writer.push(envelope::unh(&message_reference, &designator)?);

    writer.push(envelope::msg()?);
    writer.push(envelope::org(sender)?);

    if let Some(flight) = reporting_flight {
        writer.push(flight_seg::header_tvl(flight)?);
    }

    writer.push(envelope::eqn(reservation.passengers.len())?);

    write_pnr_block(&mut writer, reservation, sender, rng)?;

    let trailer = envelope::unt(writer.unt_value(), &message_reference)?;
    writer.push(trailer);
    writer.push(envelope::une(&interchange_reference)?);
    writer.push(envelope::unz(&interchange_reference)?);

    tracing::debug!(
        record_locator = %reservation.record_locator,
        passengers = reservation.passengers.len(),
        flights = reservation.flights.len(),
        "encoded PNRGOV interchange"
    );

    Ok(writer.finish())
}

/// Convenience wrapper: stamp with the current UTC time and thread-local
/// randomness.
pub fn encode_reservation_now(
    reservation: &Reservation,
    receiver: Option<&str>,
) -> Result<String, EncodeError> {
    encode_reservation(
        reservation,
        receiver,
        Utc::now().naive_utc(),
        &mut rand::thread_rng(),
    )
}
