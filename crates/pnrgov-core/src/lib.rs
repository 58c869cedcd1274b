//! # pnrgov-core — Domain Model for the PNRGOV Stack
//!
//! Defines the reservation graph that the EDIFACT encoder consumes:
//! reservations, flights, passengers, travel documents, seat assignments,
//! baggage, and payments. Every other crate in the workspace depends on
//! `pnrgov-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `ReservationId`,
//!    `PassengerId`, `FlightId`, `RecordLocator` — no bare strings or UUIDs
//!    cross an API boundary.
//!
//! 2. **Id-typed associations instead of object graphs.** A seat assignment
//!    or bag references its flight by `FlightId`, never by a shared pointer.
//!    Ownership stays tree-shaped; the encoder resolves the association by
//!    equality when it projects per-flight seat tables.
//!
//! 3. **Entities are data.** No behavior beyond accessors and
//!    construction-time validation. The encoder treats the whole graph as
//!    read-only.
//!
//! 4. **Absent means `None`.** Optional fields (agency code, contact phone,
//!    operating flight number) are `Option`, not empty strings, so the
//!    encoder can omit segments instead of emitting placeholders.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pnrgov-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` with camelCase wire names.

pub mod error;
pub mod flight;
pub mod identifier;
pub mod passenger;
pub mod reservation;

// Re-export primary types for ergonomic imports.
pub use error::PnrError;
pub use flight::Flight;
pub use identifier::{FlightId, PassengerId, RecordLocator, ReservationId};
pub use passenger::{Baggage, Passenger, SeatAssignment, TravelDocument};
pub use reservation::{Payment, Reservation};
