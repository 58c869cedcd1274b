//! # pnrgov-sample — Sample Reservation Producer
//!
//! Generates fully-populated random reservation graphs for exercising the
//! EDIFACT encoder: realistic names, routed itineraries, codeshare and
//! thru-flight shapes, travel documents, seats, bags, and payments.
//!
//! The producer is configured through [`SampleOptions`] — passenger and
//! flight counts plus independent toggles for each optional feature — and
//! draws every random choice from a caller-supplied [`rand::Rng`], so a
//! seeded generator reproduces the same graph.
//!
//! ## Crate Policy
//!
//! - Produces graphs that satisfy `pnrgov-core` validation by construction
//!   (arrival always after departure, locators from the allowed alphabet).
//! - No process-wide randomness; the `Rng` is always injected.

pub mod data;
pub mod generator;

pub use generator::{generate_reservation, SampleOptions};
