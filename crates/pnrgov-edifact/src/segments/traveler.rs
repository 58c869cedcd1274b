//! # Traveler Segments
//!
//! Traveler info (TIF) and the special-service requests that carry
//! document, ticket, and seat data as structured free text. Every segment
//! that refers to a traveler does so by the 1-based traveler reference
//! `<index>.1`, assigned once per encoding pass in passenger list order.

use chrono::NaiveDate;

use pnrgov_core::{Flight, TravelDocument};

use crate::error::EncodeError;
use crate::format::date_ddmmmyy;
use crate::segment::Segment;

/// Normalize a passenger type code for the wire: adults (`ADT`) are
/// reported as `A`; an unset code defaults to adult.
fn passenger_type_code(passenger_type: &str) -> &str {
    match passenger_type {
        "ADT" | "" => "A",
        other => other,
    }
}

/// Traveler information: surname, given name + title, type code, and the
/// traveler reference.
pub fn tif(
    last_name: &str,
    first_name: &str,
    title: &str,
    passenger_type: &str,
    traveler_index: usize,
) -> Result<String, EncodeError> {
    Segment::new("TIF")
        .element(last_name.to_uppercase())
        .composite([
            format!("{} {}", first_name.to_uppercase(), title),
            passenger_type_code(passenger_type).to_string(),
            format!("{traveler_index}.1"),
        ])
        .finish()
}

/// Passport information as an SSR DOCS free-text block:
/// `/P/<nationality>/<number>/<issuing>/<dob>/<gender>/<expiry>/<last>/<first>`.
pub fn ssr_docs(
    document: &TravelDocument,
    last_name: &str,
    first_name: &str,
    date_of_birth: NaiveDate,
    gender: &str,
    traveler_index: usize,
) -> Result<String, EncodeError> {
    let free_text = format!(
        "/P/{}/{}/{}/{}/{}/{}/{}/{}",
        document.nationality,
        document.document_number,
        document.issuing_country,
        date_ddmmmyy(date_of_birth),
        gender,
        date_ddmmmyy(document.expiry_date),
        last_name.to_uppercase(),
        first_name.to_uppercase(),
    );
    let reference = format!("{traveler_index}.1");
    Segment::new("SSR")
        .composite([
            "DOCS",
            "HK",
            "1",
            document.issuing_country.as_str(),
            "",
            "",
            "",
            "",
            "",
            free_text.as_str(),
        ])
        .composite(["", "", reference.as_str()])
        .finish()
}

/// Ticket number tied to a traveler reference; used in the per-passenger
/// loop, one per flight coupon.
pub fn ssr_tkne(
    flight: &Flight,
    ticket_number: &str,
    traveler_index: usize,
) -> Result<String, EncodeError> {
    let reference = format!("{traveler_index}.1");
    Segment::new("SSR")
        .composite([
            "TKNE",
            "HK",
            "1",
            flight.airline_code.as_str(),
            "",
            "",
            flight.departure_airport.as_str(),
            flight.arrival_airport.as_str(),
            ticket_number,
        ])
        .composite(["", "", reference.as_str()])
        .finish()
}

/// The simpler per-flight ticket form: the ticket number is prefixed with
/// `.` and no traveler reference element is appended.
pub fn ssr_tkne_simple(flight: &Flight, ticket_number: &str) -> Result<String, EncodeError> {
    let dotted = format!(".{ticket_number}");
    Segment::new("SSR")
        .composite([
            "TKNE",
            "HK",
            "1",
            flight.airline_code.as_str(),
            "",
            "",
            flight.departure_airport.as_str(),
            flight.arrival_airport.as_str(),
            dotted.as_str(),
        ])
        .finish()
}

/// Seat list for one flight: every seat as a repeated
/// `<seatNumber>::<travelerIndex>` group, in ascending traveler order.
/// Callers must not emit this segment at all when the flight has no seats.
pub fn ssr_seat(
    flight: &Flight,
    passenger_count: usize,
    seats: &[(String, usize)],
) -> Result<String, EncodeError> {
    let count = passenger_count.to_string();
    let mut segment = Segment::new("SSR").composite([
        "SEAT",
        "HK",
        count.as_str(),
        flight.airline_code.as_str(),
        "",
        "",
        flight.departure_airport.as_str(),
        flight.arrival_airport.as_str(),
    ]);
    for (seat_number, traveler_index) in seats {
        let index = traveler_index.to_string();
        segment = segment.composite([seat_number.as_str(), "", index.as_str()]);
    }
    segment.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pnrgov_core::FlightId;

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

    fn passport() -> TravelDocument {
        TravelDocument {
            document_type: "P".into(),
            document_number: "IS123456789".into(),
            issuing_country: "IS".into(),
            expiry_date: NaiveDate::from_ymd_opt(2031, 5, 2).unwrap(),
            issue_date: NaiveDate::from_ymd_opt(2021, 5, 2).unwrap(),
            nationality: "IS".into(),
        }
    }

    #[test]
    fn test_tif_normalizes_adult_type() {
        let line = tif("Smith", "John", "MR", "ADT", 1).unwrap();
        assert_eq!(line, "TIF+SMITH+JOHN MR:A:1.1'");
    }

    #[test]
    fn test_tif_keeps_other_type_codes() {
        let line = tif("SMITH", "EMMA", "MISS", "CHD", 2).unwrap();
        assert_eq!(line, "TIF+SMITH+EMMA MISS:CHD:2.1'");
    }

    #[test]
    fn test_ssr_docs_layout() {
        let dob = NaiveDate::from_ymd_opt(1988, 7, 21).unwrap();
        let line = ssr_docs(&passport(), "Jonsson", "Helga", dob, "F", 1).unwrap();
        assert_eq!(
            line,
            "SSR+DOCS:HK:1:IS::::::/P/IS/IS123456789/IS/21JUL88/F/02MAY31/JONSSON/HELGA+::1.1'"
        );
    }

    #[test]
    fn test_ssr_tkne_layout() {
        let line = ssr_tkne(&leg(), "1391234567000C1", 2).unwrap();
        assert_eq!(line, "SSR+TKNE:HK:1:FI:::KEF:JFK:1391234567000C1+::2.1'");
    }

    #[test]
    fn test_ssr_tkne_simple_prefixes_dot_and_drops_reference() {
        let line = ssr_tkne_simple(&leg(), "1391234567000C1").unwrap();
        assert_eq!(line, "SSR+TKNE:HK:1:FI:::KEF:JFK:.1391234567000C1'");
        assert!(!line.contains("+::"));
    }

    #[test]
    fn test_ssr_seat_lists_groups_in_traveler_order() {
        let seats = vec![("12A".to_string(), 1), ("12B".to_string(), 2)];
        let line = ssr_seat(&leg(), 2, &seats).unwrap();
        assert_eq!(line, "SSR+SEAT:HK:2:FI:::KEF:JFK+12A::1+12B::2'");
    }
}
