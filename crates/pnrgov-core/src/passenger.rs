//! # Passengers and Their Belongings
//!
//! A passenger owns its travel documents, bags, and seat assignments.
//! Ownership is tree-shaped: documents belong to exactly one passenger;
//! bags and seats additionally *reference* (never own) one flight by
//! [`FlightId`], which the encoder resolves when it projects the
//! per-flight passenger-to-seat tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::identifier::{FlightId, PassengerId};

/// A traveler on a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    /// Identity used to order seat lists by traveler reference.
    #[serde(default)]
    pub id: PassengerId,

    /// Given name, uppercased on the wire by the encoder.
    pub first_name: String,

    /// Surname, uppercased on the wire by the encoder.
    pub last_name: String,

    /// Middle name or initial, when known.
    #[serde(default)]
    pub middle_name: Option<String>,

    /// Salutation (e.g. `"MR"`, `"DR"`). May be empty.
    #[serde(default)]
    pub title: String,

    /// Date of birth, as printed in SSR DOCS.
    pub date_of_birth: NaiveDate,

    /// Gender code (`"M"`, `"F"`, `"U"`).
    pub gender: String,

    /// Nationality country code.
    pub nationality: String,

    /// Passenger type code (e.g. `"ADT"` for adult).
    pub passenger_type: String,

    /// Contact e-mail, when collected.
    #[serde(default)]
    pub email: Option<String>,

    /// Contact phone, when collected.
    #[serde(default)]
    pub phone: Option<String>,

    /// Street address.
    #[serde(default)]
    pub address_line1: String,

    /// Apartment / unit line, when present.
    #[serde(default)]
    pub address_line2: Option<String>,

    /// City of residence.
    #[serde(default)]
    pub city: String,

    /// State or region, for countries that use one.
    #[serde(default)]
    pub state: Option<String>,

    /// Postal code in the local format.
    #[serde(default)]
    pub postal_code: String,

    /// Country of residence.
    #[serde(default)]
    pub country: String,

    /// Travel documents owned by this passenger.
    #[serde(default)]
    pub documents: Vec<TravelDocument>,

    /// Checked bags owned by this passenger.
    #[serde(default)]
    pub bags: Vec<Baggage>,

    /// Seat assignments owned by this passenger.
    #[serde(default)]
    pub seats: Vec<SeatAssignment>,
}

/// A passport or other travel document, owned by exactly one passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDocument {
    /// Document type code (`"P"` for passport).
    pub document_type: String,

    /// Document number as issued.
    pub document_number: String,

    /// Issuing country code.
    pub issuing_country: String,

    /// Expiry date.
    pub expiry_date: NaiveDate,

    /// Issue date.
    pub issue_date: NaiveDate,

    /// Nationality recorded on the document.
    pub nationality: String,
}

/// A checked bag, referencing the flight it was checked onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baggage {
    /// The flight this bag travels on.
    pub flight_id: FlightId,

    /// Bag tag number.
    pub bag_tag_number: String,

    /// Weight in `weight_unit`.
    pub weight: Decimal,

    /// Weight unit (`"KG"`).
    pub weight_unit: String,

    /// Number of pieces under this tag.
    pub number_of_pieces: u32,

    /// Baggage category (e.g. `"Checked"`).
    pub baggage_type: String,

    /// Handling status (e.g. `"Checked-in"`).
    pub status: String,
}

/// A seat held by a passenger on one flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAssignment {
    /// The flight this seat is on.
    pub flight_id: FlightId,

    /// Seat designator, row then letter (e.g. `"12A"`).
    pub seat_number: String,

    /// Cabin position (`"Window"`, `"Aisle"`, `"Middle"`).
    pub seat_characteristics: String,
}
