//! # Reservations
//!
//! The root of the domain graph: a record locator, contact details, and the
//! owned lists of flights, passengers, and payments. Constructed fully
//! before encoding begins; the encoder never mutates it.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PnrError;
use crate::flight::Flight;
use crate::identifier::{RecordLocator, ReservationId};
use crate::passenger::Passenger;

/// A passenger name record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Storage identity.
    #[serde(default)]
    pub id: ReservationId,

    /// Unique, immutable record locator.
    pub record_locator: RecordLocator,

    /// Date the booking was made.
    pub booking_date: NaiveDate,

    /// Creation timestamp, echoed into RCI and DAT segments.
    pub created_date: NaiveDateTime,

    /// Sales channel (e.g. `"WEB"`).
    pub booking_channel: String,

    /// Booking agency code, when booked through an agent.
    #[serde(default)]
    pub agency_code: Option<String>,

    /// Reservation status code (e.g. `"HK"`).
    pub status: String,

    /// Contact given name.
    #[serde(default)]
    pub contact_first_name: String,

    /// Contact surname.
    #[serde(default)]
    pub contact_last_name: String,

    /// Contact e-mail; omitted from the message when absent.
    #[serde(default)]
    pub contact_email: Option<String>,

    /// Contact phone; omitted from the message when absent.
    #[serde(default)]
    pub contact_phone: Option<String>,

    /// Travelers, in insertion order. The 1-based position in this list is
    /// the traveler reference used across SSR segments.
    #[serde(default)]
    pub passengers: Vec<Passenger>,

    /// Flight segments. Insertion-ordered, but `segment_number` is the
    /// authoritative itinerary order.
    #[serde(default)]
    pub flights: Vec<Flight>,

    /// Payments applied to this reservation.
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Reservation {
    /// The flight reported at interchange level: lowest segment number,
    /// ties broken by list position. `None` for a flightless reservation.
    pub fn reporting_flight(&self) -> Option<&Flight> {
        self.flights.iter().min_by_key(|f| f.segment_number)
    }

    /// Flights in itinerary order (ascending segment number, stable).
    pub fn flights_in_itinerary_order(&self) -> Vec<&Flight> {
        let mut ordered: Vec<&Flight> = self.flights.iter().collect();
        ordered.sort_by_key(|f| f.segment_number);
        ordered
    }

    /// Validate the graph at the construction boundary.
    ///
    /// The encoder assumes clean input; callers that assemble reservations
    /// from external data run this first.
    ///
    /// # Errors
    ///
    /// - [`PnrError::ArrivalBeforeDeparture`] when a flight's times are
    ///   inverted.
    /// - [`PnrError::MissingField`] when a passenger name part is empty.
    /// - [`PnrError::DanglingFlightReference`] when a seat or bag points at
    ///   a flight that is not on the reservation.
    pub fn validate(&self) -> Result<(), PnrError> {
        for flight in &self.flights {
            if flight.arrival_time < flight.departure_time {
                return Err(PnrError::ArrivalBeforeDeparture {
                    flight_number: flight.flight_number.clone(),
                    departure: flight.departure_time,
                    arrival: flight.arrival_time,
                });
            }
        }
        for passenger in &self.passengers {
            if passenger.first_name.is_empty() {
                return Err(PnrError::MissingField("firstName"));
            }
            if passenger.last_name.is_empty() {
                return Err(PnrError::MissingField("lastName"));
            }
            for seat in &passenger.seats {
                if !self.flights.iter().any(|f| f.id == seat.flight_id) {
                    return Err(PnrError::DanglingFlightReference(
                        seat.flight_id,
                        "seat assignment",
                    ));
                }
            }
            for bag in &passenger.bags {
                if !self.flights.iter().any(|f| f.id == bag.flight_id) {
                    return Err(PnrError::DanglingFlightReference(bag.flight_id, "baggage"));
                }
            }
        }
        Ok(())
    }
}

/// A payment applied to a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment method code (`"CC"` for credit card).
    pub payment_type: String,

    /// Card scheme code (e.g. `"VI"`, `"MC"`).
    pub card_type: String,

    /// Masked card number.
    pub card_number: String,

    /// Card expiry date.
    pub expiry_date: NaiveDate,

    /// Name embossed on the card.
    pub card_holder_name: String,

    /// Amount charged.
    pub amount: Decimal,

    /// ISO 4217 currency code.
    pub currency: String,

    /// When the payment was taken.
    pub payment_date: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::FlightId;
    use crate::passenger::SeatAssignment;

    fn flight(segment_number: u32) -> Flight {
        let dep = NaiveDate::from_ymd_opt(2026, 5, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Flight {
            id: FlightId::new(),
            flight_number: format!("{}", 100 + segment_number),
            airline_code: "SK".into(),
            departure_airport: "CPH".into(),
            arrival_airport: "ARN".into(),
            departure_time: dep,
            arrival_time: dep + chrono::Duration::hours(2),
            aircraft_type: "320".into(),
            service_class: "Y".into(),
            operating_carrier: None,
            operating_flight_number: None,
            flight_status: "HK".into(),
            segment_number,
        }
    }

    fn passenger() -> Passenger {
        Passenger {
            id: crate::PassengerId::new(),
            first_name: "ANNA".into(),
            last_name: "NIELSEN".into(),
            middle_name: None,
            title: "MS".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1988, 7, 21).unwrap(),
            gender: "F".into(),
            nationality: "DK".into(),
            passenger_type: "ADT".into(),
            email: None,
            phone: None,
            address_line1: "1 MAIN STREET".into(),
            address_line2: None,
            city: "COPENHAGEN".into(),
            state: None,
            postal_code: "2100".into(),
            country: "DK".into(),
            documents: vec![],
            bags: vec![],
            seats: vec![],
        }
    }

    fn reservation() -> Reservation {
        Reservation {
            id: ReservationId::new(),
            record_locator: RecordLocator::new("ABC234").unwrap(),
            booking_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            created_date: NaiveDate::from_ymd_opt(2026, 4, 1)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
            booking_channel: "WEB".into(),
            agency_code: None,
            status: "HK".into(),
            contact_first_name: "ANNA".into(),
            contact_last_name: "NIELSEN".into(),
            contact_email: None,
            contact_phone: None,
            passengers: vec![passenger()],
            flights: vec![flight(2), flight(1)],
            payments: vec![],
        }
    }

    #[test]
    fn test_reporting_flight_is_lowest_segment_number() {
        let res = reservation();
        assert_eq!(res.reporting_flight().unwrap().segment_number, 1);
    }

    #[test]
    fn test_reporting_flight_none_without_flights() {
        let mut res = reservation();
        res.flights.clear();
        assert!(res.reporting_flight().is_none());
    }

    #[test]
    fn test_itinerary_order_sorts_by_segment_number() {
        let res = reservation();
        let ordered = res.flights_in_itinerary_order();
        assert_eq!(ordered[0].segment_number, 1);
        assert_eq!(ordered[1].segment_number, 2);
    }

    #[test]
    fn test_validate_accepts_well_formed_graph() {
        assert!(reservation().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_flight_times() {
        let mut res = reservation();
        res.flights[0].arrival_time = res.flights[0].departure_time - chrono::Duration::hours(1);
        assert!(matches!(
            res.validate(),
            Err(PnrError::ArrivalBeforeDeparture { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_dangling_seat_reference() {
        let mut res = reservation();
        res.passengers[0].seats.push(SeatAssignment {
            flight_id: FlightId::new(),
            seat_number: "12A".into(),
            seat_characteristics: "Window".into(),
        });
        assert!(matches!(
            res.validate(),
            Err(PnrError::DanglingFlightReference(..))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut res = reservation();
        res.passengers[0].last_name.clear();
        assert!(matches!(res.validate(), Err(PnrError::MissingField(_))));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let res = reservation();
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("recordLocator").is_some());
        assert!(json.get("createdDate").is_some());
        assert!(json["flights"][0].get("airlineCode").is_some());
    }
}
