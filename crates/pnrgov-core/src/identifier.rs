//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all identifiers in the reservation graph. These
//! prevent accidental identifier confusion — you cannot pass a
//! `PassengerId` where a `FlightId` is expected, which matters because the
//! encoder resolves seat-to-flight associations purely by id equality.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PnrError;

/// Unique identifier for a stored reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub Uuid);

/// Unique identifier for a passenger within a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassengerId(pub Uuid);

/// Unique identifier for a flight segment within a reservation.
///
/// Seat assignments and bags reference flights through this id; it is the
/// "lightweight token" the manifest encoder captures before it swaps a
/// generated flight for the shared reporting flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightId(pub Uuid);

impl ReservationId {
    /// Generate a new random reservation identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl PassengerId {
    /// Generate a new random passenger identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FlightId {
    /// Generate a new random flight identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PassengerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for FlightId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reservation:{}", self.0)
    }
}

impl std::fmt::Display for PassengerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "passenger:{}", self.0)
    }
}

impl std::fmt::Display for FlightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "flight:{}", self.0)
    }
}

// ─── Record Locator ──────────────────────────────────────────────────

/// Characters a record locator may contain. `I`, `O`, `0` and `1` are
/// excluded because they are ambiguous when read over the phone or from a
/// printed itinerary.
pub const RECORD_LOCATOR_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of every record locator.
pub const RECORD_LOCATOR_LEN: usize = 6;

/// A six-character reservation record locator (e.g. `ABC123`).
///
/// Unique and immutable once assigned. Locators minted by this system come
/// from [`RECORD_LOCATOR_ALPHABET`]; locators accepted from other systems
/// may use any uppercase letter or digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordLocator(String);

impl RecordLocator {
    /// Validate and wrap a record locator string.
    ///
    /// # Errors
    ///
    /// Returns [`PnrError::InvalidRecordLocator`] if the input is not
    /// exactly six uppercase ASCII letters or digits.
    pub fn new(value: impl Into<String>) -> Result<Self, PnrError> {
        let value = value.into();
        let valid = value.len() == RECORD_LOCATOR_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if valid {
            Ok(Self(value))
        } else {
            Err(PnrError::InvalidRecordLocator(value))
        }
    }

    /// Mint a random record locator from the allowed alphabet.
    pub fn random(rng: &mut impl Rng) -> Self {
        let value: String = (0..RECORD_LOCATOR_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..RECORD_LOCATOR_ALPHABET.len());
                RECORD_LOCATOR_ALPHABET[idx] as char
            })
            .collect();
        Self(value)
    }

    /// The locator as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RecordLocator {
    type Error = PnrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordLocator> for String {
    fn from(value: RecordLocator) -> Self {
        value.0
    }
}
