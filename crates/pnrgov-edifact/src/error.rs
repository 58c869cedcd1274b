//! # Encoding Errors
//!
//! The encoder is designed to never fail on well-formed input: every
//! optional field has a documented default. The one condition it refuses
//! to pass through is a reserved separator character inside a field value,
//! which would silently corrupt segment boundaries downstream.

use thiserror::Error;

/// Errors raised while encoding an interchange.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// A field value contains one of the reserved characters `:`, `+`, `'`.
    ///
    /// Reserved characters are assumed absent from airline codes and names
    /// by protocol convention; detecting one means the input graph was not
    /// validated at construction, and encoding stops before any output is
    /// produced.
    #[error("reserved character {character:?} in {tag} segment value {value:?}")]
    ReservedCharacter {
        /// Tag of the segment being built.
        tag: &'static str,
        /// The offending field value.
        value: String,
        /// The reserved character that was found.
        character: char,
    },
}
