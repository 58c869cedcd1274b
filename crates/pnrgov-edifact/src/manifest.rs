//! # Flight Manifest Encoding
//!
//! Packs many reservations sharing one reported flight into a single
//! interchange: one UNA…EQN header group, each reservation's full PNR
//! block in generation order, one UNT/UNE/UNZ trailer.
//!
//! Each generated reservation is reduced to exactly one flight — the
//! shared *reporting flight* — by capturing the identity of its primary
//! generated flight and repointing every seat assignment that referenced
//! it. EQN carries the passenger total across all reservations.

use chrono::{Duration, NaiveDateTime, Utc};
use rand::Rng;

use pnrgov_core::{Flight, FlightId, Reservation};
use pnrgov_sample::{generate_reservation, SampleOptions};

use crate::error::EncodeError;
use crate::format::date_yymmdd;
use crate::pnr::write_pnr_block;
use crate::refgen;
use crate::segments::{envelope, flight as flight_seg};
use crate::writer::InterchangeWriter;
use crate::DEFAULT_RECEIVER;

/// Airlines a manifest draws from when the caller does not name one.
const MANIFEST_AIRLINES: &[&str] = &[
    "AA", "UA", "DL", "SW", "B6", "JB", "AS", "F9", "NK", "G4",
];

/// Ports a manifested flight is routed between.
const MANIFEST_PORTS: &[&str] = &[
    "JFK", "LAX", "ORD", "DEN", "BOS", "SFO", "ATL", "MIA", "LHR", "CDG",
];

/// Parameters of one manifest run.
#[derive(Debug, Clone, Default)]
pub struct ManifestOptions {
    /// Number of PNRs to pack into the interchange.
    pub pnr_count: usize,

    /// Marketing airline of the reported flight; randomly assigned from
    /// the candidate set when absent.
    pub airline: Option<String>,

    /// Flight number of the reported flight; randomly assigned when absent.
    pub flight_number: Option<String>,

    /// Receiving authority; defaults to `USCBP`.
    pub receiver: Option<String>,
}

/// Encode a flight manifest: generate `pnr_count` reservations, bind them
/// all to one synthesized reporting flight, and emit the batch
/// interchange.
pub fn encode_manifest(
    options: &ManifestOptions,
    issued_at: NaiveDateTime,
    rng: &mut impl Rng,
) -> Result<String, EncodeError> {
    let airline = match options.airline.as_deref().filter(|a| !a.is_empty()) {
        Some(airline) => airline.to_string(),
        None => MANIFEST_AIRLINES[rng.gen_range(0..MANIFEST_AIRLINES.len())].to_string(),
    };
    let flight_number = match options.flight_number.as_deref().filter(|n| !n.is_empty()) {
        Some(number) => number.to_string(),
        None => format!("{:04}", rng.gen_range(100..10_000)),
    };
    let receiver = options
        .receiver
        .as_deref()
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_RECEIVER);

    let reporting_flight = build_reporting_flight(&airline, &flight_number, issued_at, rng);

    let reservations: Vec<Reservation> = (0..options.pnr_count)
        .map(|_| {
            let mut reservation =
                generate_reservation(&per_pnr_options(rng), issued_at, rng);
            assign_reporting_flight(&mut reservation, &reporting_flight);
            reservation
        })
        .collect();

    tracing::debug!(
        pnr_count = reservations.len(),
        airline = %airline,
        flight_number = %flight_number,
        "encoding flight manifest"
    );

    encode_manifest_reservations(&reservations, &reporting_flight, receiver, issued_at, rng)
}

/// Convenience wrapper: stamp with the current UTC time and thread-local
/// randomness.
pub fn encode_manifest_now(options: &ManifestOptions) -> Result<String, EncodeError> {
    encode_manifest(options, Utc::now().naive_utc(), &mut rand::thread_rng())
}

/// Emit the manifest interchange for already-prepared reservations. Every
/// reservation is expected to carry the reporting flight as its sole
/// flight; see [`assign_reporting_flight`].
pub fn encode_manifest_reservations(
    reservations: &[Reservation],
    reporting_flight: &Flight,
    receiver: &str,
    issued_at: NaiveDateTime,
    rng: &mut impl Rng,
) -> Result<String, EncodeError> {
    let message_reference = refgen::manifest_message_reference(rng);
    let interchange_reference = refgen::manifest_interchange_reference(rng);
    let airline = reporting_flight.airline_code.as_str();

    let total_passengers: usize = reservations.iter().map(|r| r.passengers.len()).sum();

    let mut writer = InterchangeWriter::new();
    writer.push(envelope::unb(
        airline,
        receiver,
        issued_at,
        &interchange_reference,
    )?);
    writer.push(envelope::ung(
        airline,
        receiver,
        issued_at,
        &interchange_reference,
    )?);
    writer.push(envelope::unh(
        &message_reference,
        &manifest_unh_designator(reporting_flight),
    )?);
    writer.push(envelope::msg()?);
    writer.push(envelope::org(airline)?);
    writer.push(flight_seg::header_tvl(reporting_flight)?);
    writer.push(envelope::eqn(total_passengers)?);

    for reservation in reservations {
        write_pnr_block(&mut writer, reservation, airline, rng)?;
    }

    let trailer = envelope::unt(writer.unt_value(), &message_reference)?;
    writer.push(trailer);
    writer.push(envelope::une(&interchange_reference)?);
    writer.push(envelope::unz(&interchange_reference)?);

    Ok(writer.finish())
}

/// Replace a generated reservation's itinerary with the shared reporting
/// flight.
///
/// The identity of the primary generated flight (lowest segment number) is
/// captured first; every seat assignment that referenced it is repointed
/// at the reporting flight. Seats on any extra generated leg keep their
/// now-dangling reference and are therefore never emitted.
pub fn assign_reporting_flight(reservation: &mut Reservation, reporting_flight: &Flight) {
    let discarded: Option<FlightId> = reservation.reporting_flight().map(|f| f.id);
    reservation.flights = vec![reporting_flight.clone()];
    if let Some(old_id) = discarded {
        for passenger in &mut reservation.passengers {
            for seat in &mut passenger.seats {
                if seat.flight_id == old_id {
                    seat.flight_id = reporting_flight.id;
                }
            }
        }
    }
}

/// Synthesize the shared reporting flight: a future departure between two
/// distinct candidate ports, with the arrival shifted one day forward when
/// the random times would invert.
fn build_reporting_flight(
    airline: &str,
    flight_number: &str,
    issued_at: NaiveDateTime,
    rng: &mut impl Rng,
) -> Flight {
    let travel_date = (issued_at + Duration::days(rng.gen_range(1..=30))).date();

    let departure = travel_date
        .and_hms_opt(rng.gen_range(0..24), rng.gen_range(0..60), 0)
        .unwrap_or_else(|| travel_date.and_time(chrono::NaiveTime::MIN));
    let arrival = travel_date
        .and_hms_opt(rng.gen_range(0..24), rng.gen_range(0..60), 0)
        .unwrap_or_else(|| travel_date.and_time(chrono::NaiveTime::MIN));
    let arrival = if arrival <= departure {
        arrival + Duration::days(1)
    } else {
        arrival
    };

    let origin = MANIFEST_PORTS[rng.gen_range(0..MANIFEST_PORTS.len())];
    let destination = loop {
        let candidate = MANIFEST_PORTS[rng.gen_range(0..MANIFEST_PORTS.len())];
        if candidate != origin {
            break candidate;
        }
    };

    Flight {
        id: FlightId::new(),
        flight_number: flight_number.to_string(),
        airline_code: airline.to_string(),
        departure_airport: origin.to_string(),
        arrival_airport: destination.to_string(),
        departure_time: departure,
        arrival_time: arrival,
        aircraft_type: "320".to_string(),
        service_class: "Y".to_string(),
        operating_carrier: None,
        operating_flight_number: None,
        flight_status: "HK".to_string(),
        segment_number: 1,
    }
}

/// The manifest UNH flight designator:
/// `<airline><number padded to 4><yyMMdd><origin><destination>001`.
fn manifest_unh_designator(flight: &Flight) -> String {
    format!(
        "{}{:0>4}{}{}{}001",
        flight.airline_code,
        flight.flight_number,
        date_yymmdd(flight.departure_time),
        flight.departure_airport,
        flight.arrival_airport
    )
}

/// Randomized per-PNR generation options: small parties, occasional
/// codeshare or thru-flight shapes, one generated flight that the
/// reporting flight replaces.
fn per_pnr_options(rng: &mut impl Rng) -> SampleOptions {
    let include_payment = rng.gen_bool(0.5);
    SampleOptions {
        passenger_count: rng.gen_range(1..=4),
        flight_count: 1,
        include_bags: rng.gen_bool(0.5),
        include_seats: rng.gen_bool(0.5),
        include_documents: rng.gen_bool(0.5),
        include_payment,
        include_codeshare: rng.gen_range(0..3) == 0,
        include_thru_flight: rng.gen_range(0..3) == 0,
        include_phone_numbers: rng.gen_bool(0.5),
        include_agency_info: rng.gen_bool(0.5),
        include_credit_card: include_payment && rng.gen_bool(0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn issued() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_reporting_flight_arrival_always_after_departure() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let flight = build_reporting_flight("AA", "0042", issued(), &mut rng);
            assert!(flight.arrival_time > flight.departure_time);
        }
    }

    #[test]
    fn test_reporting_flight_ports_are_distinct() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let flight = build_reporting_flight("AA", "0042", issued(), &mut rng);
            assert_ne!(flight.departure_airport, flight.arrival_airport);
        }
    }

    #[test]
    fn test_manifest_unh_designator_pads_flight_number() {
        let mut rng = StdRng::seed_from_u64(1);
        let flight = build_reporting_flight("AA", "42", issued(), &mut rng);
        let designator = manifest_unh_designator(&flight);
        assert!(designator.starts_with("AA0042"));
        assert!(designator.ends_with("001"));
    }

    #[test]
    fn test_assign_reporting_flight_repoints_primary_seats() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut reservation = generate_reservation(
            &SampleOptions {
                flight_count: 1,
                include_seats: true,
                ..SampleOptions::default()
            },
            issued(),
            &mut rng,
        );
        let reporting = build_reporting_flight("AA", "0042", issued(), &mut rng);
        assign_reporting_flight(&mut reservation, &reporting);

        assert_eq!(reservation.flights.len(), 1);
        assert_eq!(reservation.flights[0], reporting);
        for passenger in &reservation.passengers {
            for seat in &passenger.seats {
                assert_eq!(seat.flight_id, reporting.id);
            }
        }
    }

    #[test]
    fn test_assign_reporting_flight_on_flightless_reservation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut reservation = generate_reservation(
            &SampleOptions {
                flight_count: 0,
                include_seats: false,
                include_bags: false,
                ..SampleOptions::default()
            },
            issued(),
            &mut rng,
        );
        let reporting = build_reporting_flight("DL", "0100", issued(), &mut rng);
        assign_reporting_flight(&mut reservation, &reporting);
        assert_eq!(reservation.flights.len(), 1);
    }
}
