//! # PNR Block Encoding
//!
//! Emits one reservation's full segment sequence in canonical order:
//!
//! ```text
//! SRC
//! RCI  DAT  IFT(phone)  IFT(email)  ORG(booking)
//! per passenger: TIF, SSR DOCS per document, SSR TKNE per flight
//! per flight:    TVL, TRA (codeshare), RPI, APD,
//!                SSR SEAT (when seats exist), SSR TKNE per passenger, RCI
//! ```
//!
//! Flights are always walked in itinerary order (ascending segment
//! number). The passenger-to-traveler-index mapping is fixed once per
//! pass: 1-based, in passenger list order.

use rand::Rng;

use pnrgov_core::Reservation;

use crate::error::EncodeError;
use crate::refgen;
use crate::segments::{control, envelope, flight as flight_seg, traveler};
use crate::writer::InterchangeWriter;
use crate::DEFAULT_AGENCY;

/// Write one PNR section into the interchange.
///
/// `fallback_airline` anchors RCI and the contact prefix when the
/// reservation carries no flights; otherwise the reporting flight's
/// marketing code is used.
pub(crate) fn write_pnr_block(
    writer: &mut InterchangeWriter,
    reservation: &Reservation,
    fallback_airline: &str,
    rng: &mut impl Rng,
) -> Result<(), EncodeError> {
    let airline = reservation
        .reporting_flight()
        .map(|f| f.airline_code.as_str())
        .unwrap_or(fallback_airline);
    let itinerary = reservation.flights_in_itinerary_order();
    let passenger_count = reservation.passengers.len();

    writer.push(envelope::src()?);
    writer.push(control::rci(
        airline,
        &reservation.record_locator,
        reservation.created_date,
    )?);
    writer.push(control::dat(reservation.created_date)?);

    if let Some(phone) = non_empty(reservation.contact_phone.as_deref()) {
        writer.push(control::ift(&format!("{airline} {}", phone.to_uppercase()))?);
    }
    if let Some(email) = non_empty(reservation.contact_email.as_deref()) {
        writer.push(control::ift(&format!("{airline} {}", email.to_uppercase()))?);
    }

    let agency = non_empty(reservation.agency_code.as_deref()).unwrap_or(DEFAULT_AGENCY);
    writer.push(envelope::booking_org(agency)?);

    for (position, passenger) in reservation.passengers.iter().enumerate() {
        let traveler_index = position + 1;
        writer.push(traveler::tif(
            &passenger.last_name,
            &passenger.first_name,
            &passenger.title,
            &passenger.passenger_type,
            traveler_index,
        )?);

        for document in &passenger.documents {
            writer.push(traveler::ssr_docs(
                document,
                &passenger.last_name,
                &passenger.first_name,
                passenger.date_of_birth,
                &passenger.gender,
                traveler_index,
            )?);
        }

        for (coupon, flight) in itinerary.iter().enumerate() {
            let ticket = refgen::ticket_number(coupon + 1, rng);
            writer.push(traveler::ssr_tkne(flight, &ticket, traveler_index)?);
        }
    }

    for flight in &itinerary {
        writer.push(flight_seg::itinerary_tvl(flight)?);

        if flight.is_codeshare() {
            writer.push(flight_seg::tra(flight)?);
        }

        writer.push(flight_seg::rpi(passenger_count, &flight.flight_status)?);
        writer.push(flight_seg::apd(&flight.aircraft_type)?);

        let seats = seats_on_flight(reservation, flight.id);
        if !seats.is_empty() {
            writer.push(traveler::ssr_seat(flight, passenger_count, &seats)?);
        }

        for _ in &reservation.passengers {
            let ticket = refgen::ticket_number(1, rng);
            writer.push(traveler::ssr_tkne_simple(flight, &ticket)?);
        }

        writer.push(control::rci(
            airline,
            &reservation.record_locator,
            reservation.created_date,
        )?);
    }

    Ok(())
}

/// Project the seat list for one flight: `(seatNumber, travelerIndex)`
/// pairs in ascending traveler order.
fn seats_on_flight(
    reservation: &Reservation,
    flight_id: pnrgov_core::FlightId,
) -> Vec<(String, usize)> {
    let mut seats: Vec<(String, usize)> = reservation
        .passengers
        .iter()
        .enumerate()
        .flat_map(|(position, passenger)| {
            passenger
                .seats
                .iter()
                .filter(move |seat| seat.flight_id == flight_id)
                .map(move |seat| (seat.seat_number.clone(), position + 1))
        })
        .collect();
    seats.sort_by_key(|(_, traveler_index)| *traveler_index);
    seats
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
