//! # Reservation Generator
//!
//! Builds a random, fully-populated [`Reservation`] graph from
//! [`SampleOptions`]. Itineraries are routed: onward legs depart from the
//! previous leg's arrival airport. Thru-flights contribute two legs under
//! one flight number; a codeshare leg carries a distinct operating carrier
//! with its own flight number.
//!
//! Arrival times are generated strictly after departure, so the produced
//! graph always passes `Reservation::validate`.

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pnrgov_core::{
    Baggage, Flight, FlightId, Passenger, PassengerId, Payment, RecordLocator, Reservation,
    ReservationId, SeatAssignment, TravelDocument,
};

use crate::data;

/// Configuration surface of the sample producer: how many passengers and
/// flights to generate, and which optional features to include.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleOptions {
    /// Number of travelers on the reservation.
    pub passenger_count: usize,

    /// Number of flight legs. Thru-flight and codeshare shapes consume
    /// from this budget first.
    pub flight_count: usize,

    /// Check a bag onto every flight for every passenger.
    pub include_bags: bool,

    /// Assign a seat on every flight for every passenger.
    pub include_seats: bool,

    /// Give every passenger a passport document.
    pub include_documents: bool,

    /// Record a payment against the reservation.
    pub include_payment: bool,

    /// Make one leg a codeshare with a distinct operating carrier.
    pub include_codeshare: bool,

    /// Start the itinerary with a two-leg thru-flight.
    pub include_thru_flight: bool,

    /// Populate contact and passenger phone numbers.
    pub include_phone_numbers: bool,

    /// Record an agency code on the reservation.
    pub include_agency_info: bool,

    /// Record the payment as a credit card. Only takes effect together
    /// with `include_payment`.
    pub include_credit_card: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            passenger_count: 2,
            flight_count: 2,
            include_bags: true,
            include_seats: true,
            include_documents: true,
            include_payment: true,
            include_codeshare: false,
            include_thru_flight: false,
            include_phone_numbers: true,
            include_agency_info: true,
            include_credit_card: true,
        }
    }
}

/// Generate one random reservation graph.
///
/// `now` anchors all relative dates (booking in the past, travel in the
/// future); pass a fixed timestamp together with a seeded `rng` for
/// reproducible output.
pub fn generate_reservation(
    options: &SampleOptions,
    now: NaiveDateTime,
    rng: &mut impl Rng,
) -> Reservation {
    let today = now.date();
    let contact_first = pick(rng, data::FIRST_NAMES);
    let contact_last = pick(rng, data::LAST_NAMES);
    let email_domain = pick(rng, data::EMAIL_DOMAINS);

    let mut reservation = Reservation {
        id: ReservationId::new(),
        record_locator: RecordLocator::random(rng),
        booking_date: today - Duration::days(rng.gen_range(1..=30)),
        created_date: now - Duration::days(rng.gen_range(1..=30)),
        booking_channel: "WEB".to_string(),
        agency_code: options.include_agency_info.then(|| agency_code(rng)),
        status: "HK".to_string(),
        contact_first_name: contact_first.to_string(),
        contact_last_name: contact_last.to_string(),
        contact_email: Some(format!(
            "{}.{}@{}",
            contact_first.to_lowercase(),
            contact_last.to_lowercase(),
            email_domain
        )),
        contact_phone: options.include_phone_numbers.then(|| phone_number(rng)),
        passengers: Vec::new(),
        flights: Vec::new(),
        payments: Vec::new(),
    };

    let mut remaining = options.flight_count;
    let mut segment_number = 1u32;

    if options.include_thru_flight && remaining > 0 {
        let (first_leg, second_leg) = thru_flight_pair(now, &mut segment_number, rng);
        reservation.flights.push(first_leg);
        reservation.flights.push(second_leg);
        remaining = remaining.saturating_sub(2);
    }

    if options.include_codeshare && remaining > 0 {
        reservation
            .flights
            .push(codeshare_leg(now, &mut segment_number, rng));
        remaining -= 1;
    }

    let mut from_airport = reservation
        .flights
        .last()
        .map(|f| f.arrival_airport.clone())
        .unwrap_or_else(|| pick(rng, data::AIRPORTS).to_string());

    for _ in 0..remaining {
        let leg = connected_leg(now, &from_airport, &mut segment_number, rng);
        from_airport = leg.arrival_airport.clone();
        reservation.flights.push(leg);
    }

    for _ in 0..options.passenger_count {
        let mut passenger = random_passenger(today, options.include_phone_numbers, rng);

        if options.include_documents {
            passenger.documents.push(random_document(today, rng));
        }

        if options.include_bags {
            for flight in &reservation.flights {
                passenger.bags.push(random_bag(flight.id, rng));
            }
        }

        if options.include_seats {
            for flight in &reservation.flights {
                passenger.seats.push(random_seat(flight.id, rng));
            }
        }

        reservation.passengers.push(passenger);
    }

    if options.include_payment && options.include_credit_card {
        reservation.payments.push(random_payment(now, rng));
    }

    reservation
}

// ─── Flight shapes ───────────────────────────────────────────────────

/// Two legs of a single routed flight: one number, one carrier, a
/// connection at an intermediate airport.
fn thru_flight_pair(
    now: NaiveDateTime,
    segment_number: &mut u32,
    rng: &mut impl Rng,
) -> (Flight, Flight) {
    let airline = pick(rng, data::AIRLINES).to_string();
    let flight_number = rng.gen_range(100..10_000).to_string();
    let departure = now + Duration::days(rng.gen_range(1..=60));

    let origin = pick(rng, data::AIRPORTS);
    let via = pick_other(rng, data::AIRPORTS, &[origin]);
    let destination = pick_other(rng, data::AIRPORTS, &[origin, via]);

    let first_arrival = departure + Duration::hours(rng.gen_range(2..=5));
    let second_departure = departure + Duration::hours(rng.gen_range(3..=6));
    let second_arrival = second_departure + Duration::hours(rng.gen_range(2..=5));

    let first = Flight {
        id: FlightId::new(),
        flight_number: flight_number.clone(),
        airline_code: airline.clone(),
        departure_airport: origin.to_string(),
        arrival_airport: via.to_string(),
        departure_time: departure,
        arrival_time: first_arrival,
        aircraft_type: narrow_or_wide_body(rng),
        service_class: "Y".to_string(),
        operating_carrier: Some(airline.clone()),
        operating_flight_number: None,
        flight_status: "HK".to_string(),
        segment_number: next(segment_number),
    };
    let second = Flight {
        id: FlightId::new(),
        flight_number,
        airline_code: airline.clone(),
        departure_airport: via.to_string(),
        arrival_airport: destination.to_string(),
        departure_time: second_departure,
        arrival_time: second_arrival,
        aircraft_type: narrow_or_wide_body(rng),
        service_class: "Y".to_string(),
        operating_carrier: Some(airline),
        operating_flight_number: None,
        flight_status: "HK".to_string(),
        segment_number: next(segment_number),
    };
    (first, second)
}

/// A leg marketed by one carrier and operated by another, each under its
/// own flight number.
fn codeshare_leg(now: NaiveDateTime, segment_number: &mut u32, rng: &mut impl Rng) -> Flight {
    let marketing = pick(rng, data::AIRLINES);
    let operating = pick_other(rng, data::AIRLINES, &[marketing]);
    let origin = pick(rng, data::AIRPORTS);
    let destination = pick_other(rng, data::AIRPORTS, &[origin]);
    let departure = now + Duration::days(rng.gen_range(1..=60));

    Flight {
        id: FlightId::new(),
        flight_number: rng.gen_range(100..10_000).to_string(),
        airline_code: marketing.to_string(),
        departure_airport: origin.to_string(),
        arrival_airport: destination.to_string(),
        departure_time: departure,
        arrival_time: departure + Duration::hours(rng.gen_range(2..=14)),
        aircraft_type: narrow_or_wide_body(rng),
        service_class: service_class(rng),
        operating_carrier: Some(operating.to_string()),
        operating_flight_number: Some(rng.gen_range(100..10_000).to_string()),
        flight_status: "HK".to_string(),
        segment_number: next(segment_number),
    }
}

/// An onward leg departing from where the previous one arrived.
fn connected_leg(
    now: NaiveDateTime,
    from_airport: &str,
    segment_number: &mut u32,
    rng: &mut impl Rng,
) -> Flight {
    let airline = pick(rng, data::AIRLINES).to_string();
    let destination = pick_other(rng, data::AIRPORTS, &[from_airport]);
    let departure = now + Duration::days(rng.gen_range(1..=60));

    Flight {
        id: FlightId::new(),
        flight_number: rng.gen_range(100..10_000).to_string(),
        airline_code: airline.clone(),
        departure_airport: from_airport.to_string(),
        arrival_airport: destination.to_string(),
        departure_time: departure,
        arrival_time: departure + Duration::hours(rng.gen_range(2..=14)),
        aircraft_type: narrow_or_wide_body(rng),
        service_class: service_class(rng),
        operating_carrier: Some(airline),
        operating_flight_number: None,
        flight_status: "HK".to_string(),
        segment_number: next(segment_number),
    }
}

// ─── Travelers and belongings ────────────────────────────────────────

fn random_passenger(today: NaiveDate, include_phone: bool, rng: &mut impl Rng) -> Passenger {
    let gender = if rng.gen_bool(0.5) { "M" } else { "F" };
    let first_name = pick(rng, data::FIRST_NAMES);
    let last_name = pick(rng, data::LAST_NAMES);
    let country = pick(rng, data::COUNTRIES);
    let email_domain = pick(rng, data::EMAIL_DOMAINS);

    let title = if gender == "M" {
        data::TITLES[0]
    } else {
        data::TITLES[rng.gen_range(1..data::TITLES.len())]
    };

    Passenger {
        id: PassengerId::new(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        middle_name: rng
            .gen_bool(0.5)
            .then(|| initial_of(pick(rng, data::FIRST_NAMES))),
        title: title.to_string(),
        date_of_birth: today - Months::new(12 * rng.gen_range(18..=69)),
        gender: gender.to_string(),
        nationality: country.to_string(),
        passenger_type: "ADT".to_string(),
        email: Some(format!(
            "{}.{}@{}",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            email_domain
        )),
        phone: include_phone.then(|| phone_number(rng)),
        address_line1: format!("{} {}", rng.gen_range(1..=999), pick(rng, data::STREET_NAMES)),
        address_line2: (rng.gen_range(0..3) != 0).then(|| format!("APT {}", rng.gen_range(1..=199))),
        city: pick(rng, data::CITIES).to_string(),
        state: (country == "US").then(|| pick(rng, data::US_STATES).to_string()),
        postal_code: postal_code(country, rng),
        country: country.to_string(),
        documents: Vec::new(),
        bags: Vec::new(),
        seats: Vec::new(),
    }
}

fn random_document(today: NaiveDate, rng: &mut impl Rng) -> TravelDocument {
    let issuing_country = pick(rng, data::COUNTRIES);
    TravelDocument {
        document_type: "P".to_string(),
        document_number: format!("{}{}", issuing_country, rng.gen_range(100_000_000u64..1_000_000_000)),
        issuing_country: issuing_country.to_string(),
        expiry_date: today + Months::new(12 * rng.gen_range(1..=9)),
        issue_date: today - Months::new(12 * rng.gen_range(1..=5)),
        nationality: issuing_country.to_string(),
    }
}

fn random_bag(flight_id: FlightId, rng: &mut impl Rng) -> Baggage {
    Baggage {
        flight_id,
        bag_tag_number: rng.gen_range(100_000..1_000_000).to_string(),
        weight: Decimal::from(rng.gen_range(15u32..=31)),
        weight_unit: "KG".to_string(),
        number_of_pieces: rng.gen_range(1..=2),
        baggage_type: "Checked".to_string(),
        status: "Checked-in".to_string(),
    }
}

fn random_seat(flight_id: FlightId, rng: &mut impl Rng) -> SeatAssignment {
    let row = rng.gen_range(1..=39);
    let letter = (b'A' + rng.gen_range(0..6u8)) as char;
    let characteristics = match letter {
        'A' | 'F' => "Window",
        'C' | 'D' => "Aisle",
        _ => "Middle",
    };
    SeatAssignment {
        flight_id,
        seat_number: format!("{row}{letter}"),
        seat_characteristics: characteristics.to_string(),
    }
}

fn random_payment(now: NaiveDateTime, rng: &mut impl Rng) -> Payment {
    Payment {
        payment_type: "CC".to_string(),
        card_type: pick(rng, data::CARD_TYPES).to_string(),
        card_number: format!("****{}", rng.gen_range(1000..10_000)),
        expiry_date: now.date() + Months::new(12 * rng.gen_range(1..=4)),
        card_holder_name: format!("{} {}", pick(rng, data::FIRST_NAMES), pick(rng, data::LAST_NAMES)),
        amount: Decimal::from(rng.gen_range(500u32..5000)),
        currency: "USD".to_string(),
        payment_date: now - Duration::days(rng.gen_range(1..=30)),
    }
}

// ─── Small helpers ───────────────────────────────────────────────────

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Pick an item distinct from every entry in `taken`.
fn pick_other<'a>(rng: &mut impl Rng, items: &[&'a str], taken: &[&str]) -> &'a str {
    loop {
        let candidate = pick(rng, items);
        if !taken.contains(&candidate) {
            return candidate;
        }
    }
}

fn next(segment_number: &mut u32) -> u32 {
    let current = *segment_number;
    *segment_number += 1;
    current
}

fn narrow_or_wide_body(rng: &mut impl Rng) -> String {
    if rng.gen_bool(0.5) { "738" } else { "777" }.to_string()
}

fn service_class(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..3) {
        1 => "C",
        2 => "F",
        _ => "Y",
    }
    .to_string()
}

fn phone_number(rng: &mut impl Rng) -> String {
    format!(
        "{}{}",
        pick(rng, data::PHONE_COUNTRY_CODES),
        rng.gen_range(1_000_000..10_000_000)
    )
}

fn agency_code(rng: &mut impl Rng) -> String {
    rng.gen_range(10_000_000..100_000_000u64).to_string()
}

fn initial_of(name: &str) -> String {
    name.chars().take(1).collect()
}

fn postal_code(country: &str, rng: &mut impl Rng) -> String {
    match country {
        "US" => rng.gen_range(10_000..100_000).to_string(),
        "GB" => format!(
            "{}{}{} {}{}{}",
            random_letter(rng),
            random_letter(rng),
            rng.gen_range(1..=9),
            rng.gen_range(1..=9),
            random_letter(rng),
            random_letter(rng)
        ),
        "IS" | "DK" | "NO" | "SE" => rng.gen_range(1000..10_000).to_string(),
        "NL" => format!(
            "{} {}{}",
            rng.gen_range(1000..10_000),
            random_letter(rng),
            random_letter(rng)
        ),
        _ => rng.gen_range(10_000..100_000).to_string(),
    }
}

fn random_letter(rng: &mut impl Rng) -> char {
    (b'A' + rng.gen_range(0..26u8)) as char
}
