//! # pnrgov-edifact — PNRGOV Message Encoding
//!
//! Turns an in-memory reservation graph into an IATA PNRGOV EDIFACT
//! interchange: a fixed-grammar, delimiter-separated text message used by
//! air carriers to report passenger reservation data to border-control
//! authorities.
//!
//! Two variants are produced:
//!
//! - [`encode_reservation`] — a single-reservation report wrapped in one
//!   UNB…UNZ envelope.
//! - [`encode_manifest`] — a batch that packs many reservations sharing one
//!   reported flight into one interchange.
//!
//! ## Wire Grammar
//!
//! Component separator `:`, data element separator `+`, segment terminator
//! `'`. The first line is always the service string advice `UNA:+.?*'`,
//! which is excluded from the segment count. Segments are newline-joined
//! for readability; the protocol itself only requires the terminator.
//!
//! ## Determinism
//!
//! Encoding is purely functional per invocation: no I/O, no shared mutable
//! state. The only variability comes from the injected [`rand::Rng`]
//! (reference numbers and synthesized ticket stock) and the supplied
//! issue timestamp, so a seeded generator plus a fixed timestamp yields
//! byte-identical output.
//!
//! ## Crate Policy
//!
//! - Field values never contain the reserved separator characters; the
//!   segment builder fails with [`EncodeError::ReservedCharacter`] rather
//!   than corrupt segment boundaries.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod format;
pub mod interchange;
pub mod manifest;
mod pnr;
pub mod refgen;
pub mod segment;
pub mod segments;
mod writer;

pub use error::EncodeError;
pub use interchange::{encode_reservation, encode_reservation_now};
pub use manifest::{encode_manifest, encode_manifest_now, ManifestOptions};

/// Receiver used when the caller does not name one.
pub const DEFAULT_RECEIVER: &str = "USCBP";

/// Airline designator used when a reservation carries no flights.
pub const DEFAULT_AIRLINE: &str = "XX";

/// Agency code reported when a reservation was not booked through an agent.
pub const DEFAULT_AGENCY: &str = "TTY";
