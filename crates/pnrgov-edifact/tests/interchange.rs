//! Integration tests for single-reservation interchange encoding.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pnrgov_core::{
    Flight, FlightId, Passenger, PassengerId, RecordLocator, Reservation, ReservationId,
    SeatAssignment, TravelDocument,
};
use pnrgov_edifact::encode_reservation;

fn issued_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, 15)
        .unwrap()
        .and_hms_opt(10, 45, 12)
        .unwrap()
}

fn flight(segment_number: u32, airline: &str, number: &str, from: &str, to: &str) -> Flight {
    let dep = NaiveDate::from_ymd_opt(2026, 7, 1)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    Flight {
        id: FlightId::new(),
        flight_number: number.to_string(),
        airline_code: airline.to_string(),
        departure_airport: from.to_string(),
        arrival_airport: to.to_string(),
        departure_time: dep + Duration::hours(i64::from(segment_number) * 10),
        arrival_time: dep + Duration::hours(i64::from(segment_number) * 10 + 6),
        aircraft_type: "738".to_string(),
        service_class: "Y".to_string(),
        operating_carrier: None,
        operating_flight_number: None,
        flight_status: "HK".to_string(),
        segment_number,
    }
}

fn passenger(first: &str, last: &str, title: &str) -> Passenger {
    Passenger {
        id: PassengerId::new(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        middle_name: None,
        title: title.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1985, 2, 11).unwrap(),
        gender: "M".to_string(),
        nationality: "US".to_string(),
        passenger_type: "ADT".to_string(),
        email: None,
        phone: None,
        address_line1: "1 MAIN STREET".to_string(),
        address_line2: None,
        city: "BOSTON".to_string(),
        state: Some("MA".to_string()),
        postal_code: "02110".to_string(),
        country: "US".to_string(),
        documents: vec![],
        bags: vec![],
        seats: vec![],
    }
}

fn passport(issuing: &str) -> TravelDocument {
    TravelDocument {
        document_type: "P".to_string(),
        document_number: format!("{issuing}987654321"),
        issuing_country: issuing.to_string(),
        expiry_date: NaiveDate::from_ymd_opt(2031, 1, 9).unwrap(),
        issue_date: NaiveDate::from_ymd_opt(2021, 1, 9).unwrap(),
        nationality: issuing.to_string(),
    }
}

fn reservation(locator: &str) -> Reservation {
    Reservation {
        id: ReservationId::new(),
        record_locator: RecordLocator::new(locator).unwrap(),
        booking_date: NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
        created_date: NaiveDate::from_ymd_opt(2026, 5, 20)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap(),
        booking_channel: "WEB".to_string(),
        agency_code: None,
        status: "HK".to_string(),
        contact_first_name: "JOHN".to_string(),
        contact_last_name: "SMITH".to_string(),
        contact_email: None,
        contact_phone: None,
        passengers: vec![],
        flights: vec![],
        payments: vec![],
    }
}

/// The worked example: one flight, one passenger with one document, no
/// seats, no codeshare.
fn example_reservation() -> Reservation {
    let mut res = reservation("ABC123");
    res.flights.push(flight(1, "FI", "101", "KEF", "JFK"));
    let mut pax = passenger("JOHN", "SMITH", "MR");
    pax.documents.push(passport("US"));
    res.passengers.push(pax);
    res
}

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

fn unt_count(text: &str) -> usize {
    let unt_line = text
        .lines()
        .find(|l| l.starts_with("UNT+"))
        .expect("interchange has a UNT segment");
    unt_line
        .trim_end_matches('\'')
        .split('+')
        .nth(1)
        .expect("UNT carries a count element")
        .parse()
        .expect("UNT count is numeric")
}

#[test]
fn example_reservation_emits_expected_segments() {
    let mut rng = StdRng::seed_from_u64(1);
    let text = encode_reservation(&example_reservation(), None, issued_at(), &mut rng).unwrap();
    let lines = lines(&text);

    let tif: Vec<&&str> = lines.iter().filter(|l| l.starts_with("TIF+")).collect();
    assert_eq!(tif.len(), 1);
    assert!(tif[0].contains("SMITH"));
    assert!(tif[0].contains("JOHN"));

    assert_eq!(lines.iter().filter(|l| l.starts_with("SSR+DOCS")).count(), 1);
    assert_eq!(lines.iter().filter(|l| l.starts_with("TRA+")).count(), 0);
    assert_eq!(lines.iter().filter(|l| l.starts_with("SSR+SEAT")).count(), 0);
}

#[test]
fn interchange_starts_with_service_string_advice() {
    let mut rng = StdRng::seed_from_u64(1);
    let text = encode_reservation(&example_reservation(), None, issued_at(), &mut rng).unwrap();
    assert!(text.starts_with("UNA:+.?*'\n"));
}

#[test]
fn unt_count_matches_emitted_segments() {
    let mut rng = StdRng::seed_from_u64(1);
    let text = encode_reservation(&example_reservation(), None, issued_at(), &mut rng).unwrap();
    let lines = lines(&text);

    // The UNT count covers every segment from UNB through UNT itself,
    // excluding the UNA advice.
    let unt_index = lines
        .iter()
        .position(|l| l.starts_with("UNT+"))
        .expect("UNT present");
    assert_eq!(unt_count(&text), unt_index);

    // UNE and UNZ follow UNT and close the interchange.
    assert!(lines[unt_index + 1].starts_with("UNE+1+"));
    assert!(lines[unt_index + 2].starts_with("UNZ+1+"));
    assert_eq!(lines.len(), unt_index + 3);
}

#[test]
fn unt_count_holds_across_generated_reservations() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = pnrgov_sample::SampleOptions {
            passenger_count: (seed as usize % 4) + 1,
            flight_count: (seed as usize % 3) + 1,
            include_codeshare: seed % 2 == 0,
            include_thru_flight: seed % 3 == 0,
            include_seats: seed % 2 == 1,
            ..pnrgov_sample::SampleOptions::default()
        };
        let res = pnrgov_sample::generate_reservation(&options, issued_at(), &mut rng);
        let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let unt_index = lines.iter().position(|l| l.starts_with("UNT+")).unwrap();
        assert_eq!(unt_count(&text), unt_index, "seed {seed}");
    }
}

#[test]
fn header_tvl_reports_operating_identity_for_codeshare() {
    let mut res = reservation("QX7PLM");
    let mut leg = flight(1, "FI", "101", "KEF", "JFK");
    leg.operating_carrier = Some("SK".to_string());
    leg.operating_flight_number = Some("4512".to_string());
    res.flights.push(leg);
    res.passengers.push(passenger("ANNA", "NIELSEN", "MS"));

    let mut rng = StdRng::seed_from_u64(2);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();
    let lines = lines(&text);

    // The header TVL is the first TVL line, between ORG and EQN.
    let header = lines
        .iter()
        .find(|l| l.starts_with("TVL+"))
        .expect("header TVL present");
    assert!(header.contains("+SK+4512:Y'"));
    assert!(!header.contains("+FI+"));

    // The itinerary TVL still carries the marketing identity.
    let itinerary: Vec<&&str> = lines.iter().filter(|l| l.starts_with("TVL+")).collect();
    assert_eq!(itinerary.len(), 2);
    assert!(itinerary[1].contains("+FI:SK+101:Y'"));
}

#[test]
fn tra_emitted_exactly_once_per_codeshare_flight() {
    let mut res = reservation("QX7PLM");
    let mut codeshare = flight(1, "FI", "101", "KEF", "JFK");
    codeshare.operating_carrier = Some("SK".to_string());
    res.flights.push(codeshare);
    res.flights.push(flight(2, "FI", "615", "JFK", "BOS"));
    res.passengers.push(passenger("ANNA", "NIELSEN", "MS"));

    let mut rng = StdRng::seed_from_u64(3);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();

    assert_eq!(text.lines().filter(|l| l.starts_with("TRA+")).count(), 1);
    assert!(text.lines().any(|l| l == "TRA+SK+101:D'"));
}

#[test]
fn seat_segment_omitted_without_seats_and_ordered_with_them() {
    let mut res = reservation("QX7PLM");
    let leg = flight(1, "FI", "101", "KEF", "JFK");
    let leg_id = leg.id;
    res.flights.push(leg);

    let mut first = passenger("ANNA", "NIELSEN", "MS");
    first.seats.push(SeatAssignment {
        flight_id: leg_id,
        seat_number: "14C".to_string(),
        seat_characteristics: "Aisle".to_string(),
    });
    let mut second = passenger("LARS", "ERIKSSON", "MR");
    second.seats.push(SeatAssignment {
        flight_id: leg_id,
        seat_number: "14A".to_string(),
        seat_characteristics: "Window".to_string(),
    });
    res.passengers.push(first);
    res.passengers.push(second);

    let mut rng = StdRng::seed_from_u64(4);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();
    let seat_line = text
        .lines()
        .find(|l| l.starts_with("SSR+SEAT"))
        .expect("seat segment present");
    // Groups ordered by ascending traveler index, not by seat number.
    assert_eq!(seat_line, "SSR+SEAT:HK:2:FI:::KEF:JFK+14C::1+14A::2'");

    // Remove the seats: the segment disappears entirely.
    let mut bare = reservation("QX7PLM");
    bare.flights.push(flight(1, "FI", "101", "KEF", "JFK"));
    bare.passengers.push(passenger("ANNA", "NIELSEN", "MS"));
    let mut rng = StdRng::seed_from_u64(4);
    let text = encode_reservation(&bare, None, issued_at(), &mut rng).unwrap();
    assert!(!text.contains("SSR+SEAT"));
}

#[test]
fn rci_reemitted_after_every_flight_block() {
    let mut res = reservation("QX7PLM");
    res.flights.push(flight(1, "FI", "101", "KEF", "JFK"));
    res.flights.push(flight(2, "FI", "615", "JFK", "BOS"));
    res.passengers.push(passenger("ANNA", "NIELSEN", "MS"));

    let mut rng = StdRng::seed_from_u64(5);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();

    // One RCI at the top of the PNR section plus one after each flight.
    assert_eq!(text.lines().filter(|l| l.starts_with("RCI+")).count(), 3);
    assert!(text.lines().all(|l| !l.starts_with("RCI+") || l.contains("QX7PLM")));
}

#[test]
fn flights_walked_in_segment_number_order_not_list_order() {
    let mut res = reservation("QX7PLM");
    res.flights.push(flight(2, "FI", "615", "JFK", "BOS"));
    res.flights.push(flight(1, "FI", "101", "KEF", "JFK"));
    res.passengers.push(passenger("ANNA", "NIELSEN", "MS"));

    let mut rng = StdRng::seed_from_u64(6);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();
    let tvls: Vec<&str> = text.lines().filter(|l| l.starts_with("TVL+")).collect();

    // Header TVL and first itinerary TVL both describe segment 1.
    assert!(tvls[0].contains("+KEF+JFK+"));
    assert!(tvls[1].contains("+KEF+JFK+"));
    assert!(tvls[2].contains("+JFK+BOS+"));
}

#[test]
fn contact_segments_emitted_only_when_present() {
    let mut res = example_reservation();
    let mut rng = StdRng::seed_from_u64(7);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();
    assert_eq!(text.lines().filter(|l| l.starts_with("IFT+")).count(), 0);

    res.contact_phone = Some("3541234567".to_string());
    res.contact_email = Some("john.smith@example.com".to_string());
    let mut rng = StdRng::seed_from_u64(7);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();
    let ift: Vec<&str> = text.lines().filter(|l| l.starts_with("IFT+")).collect();
    assert_eq!(ift.len(), 2);
    assert_eq!(ift[0], "IFT+4:28+FI 3541234567'");
    assert_eq!(ift[1], "IFT+4:28+FI JOHN.SMITH@EXAMPLE.COM'");
}

#[test]
fn agency_defaults_to_tty_in_booking_org() {
    let mut rng = StdRng::seed_from_u64(8);
    let text = encode_reservation(&example_reservation(), None, issued_at(), &mut rng).unwrap();
    assert!(text.lines().any(|l| l == "ORG+XX:TTY'"));

    let mut res = example_reservation();
    res.agency_code = Some("12345678".to_string());
    let mut rng = StdRng::seed_from_u64(8);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();
    assert!(text.lines().any(|l| l == "ORG+XX:12345678'"));
}

#[test]
fn flightless_reservation_uses_defaults_and_placeholder() {
    let mut res = reservation("QX7PLM");
    res.passengers.push(passenger("ANNA", "NIELSEN", "MS"));

    let mut rng = StdRng::seed_from_u64(9);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();
    let lines = lines(&text);

    assert!(lines[1].starts_with("UNB+IATA:1+XX+USCBP+"));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("UNH+") && l.ends_with("+XXXX/000000/0000'")));
    // No header TVL without a reporting flight.
    assert_eq!(lines.iter().filter(|l| l.starts_with("TVL+")).count(), 0);
}

#[test]
fn receiver_defaults_to_uscbp_and_can_be_overridden() {
    let mut rng = StdRng::seed_from_u64(10);
    let text = encode_reservation(&example_reservation(), None, issued_at(), &mut rng).unwrap();
    assert!(text.lines().nth(1).unwrap().contains("+USCBP+"));

    let mut rng = StdRng::seed_from_u64(10);
    let text =
        encode_reservation(&example_reservation(), Some("CABSA"), issued_at(), &mut rng).unwrap();
    assert!(text.lines().nth(1).unwrap().contains("+CABSA+"));
}

#[test]
fn same_seed_yields_byte_identical_output() {
    let res = example_reservation();
    let a = encode_reservation(&res, None, issued_at(), &mut StdRng::seed_from_u64(11)).unwrap();
    let b = encode_reservation(&res, None, issued_at(), &mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ_only_in_random_tokens() {
    let res = example_reservation();
    let a = encode_reservation(&res, None, issued_at(), &mut StdRng::seed_from_u64(12)).unwrap();
    let b = encode_reservation(&res, None, issued_at(), &mut StdRng::seed_from_u64(13)).unwrap();

    let a_lines: Vec<&str> = a.lines().collect();
    let b_lines: Vec<&str> = b.lines().collect();
    assert_eq!(a_lines.len(), b_lines.len());

    for (left, right) in a_lines.iter().zip(&b_lines) {
        let randomized = left.starts_with("SSR+TKNE")
            || left.starts_with("UNB+")
            || left.starts_with("UNG+")
            || left.starts_with("UNE+")
            || left.starts_with("UNZ+");
        if !randomized {
            assert_eq!(left, right);
        }
    }
}

#[test]
fn reserved_character_in_field_fails_encoding() {
    let mut res = example_reservation();
    res.passengers[0].last_name = "O'BRIEN".to_string();
    let mut rng = StdRng::seed_from_u64(14);
    let err = encode_reservation(&res, None, issued_at(), &mut rng);
    assert!(matches!(
        err,
        Err(pnrgov_edifact::EncodeError::ReservedCharacter { .. })
    ));
}

#[test]
fn tkne_coupon_numbers_follow_itinerary_position() {
    let mut res = reservation("QX7PLM");
    res.flights.push(flight(1, "FI", "101", "KEF", "JFK"));
    res.flights.push(flight(2, "FI", "615", "JFK", "BOS"));
    res.passengers.push(passenger("ANNA", "NIELSEN", "MS"));

    let mut rng = StdRng::seed_from_u64(15);
    let text = encode_reservation(&res, None, issued_at(), &mut rng).unwrap();

    // Per-passenger TKNE: one per flight with its coupon index; the
    // per-flight simple form always uses coupon 1 and the dot prefix.
    let full: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("SSR+TKNE") && l.contains("+::"))
        .collect();
    assert_eq!(full.len(), 2);
    assert!(full[0].contains("000C1+::1.1'"));
    assert!(full[1].contains("000C2+::1.1'"));

    let simple: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("SSR+TKNE") && l.contains(":."))
        .collect();
    assert_eq!(simple.len(), 2);
    assert!(simple.iter().all(|l| l.contains("000C1'")));
}
