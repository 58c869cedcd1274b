//! # Segment Assembly
//!
//! Low-level construction of one tagged, terminator-ended segment line:
//! `TAG` + element-separator-joined data elements, where composite
//! elements join sub-components with the component separator.
//!
//! Field values are validated once, at [`Segment::finish`]: any value
//! containing a reserved character fails the whole segment rather than
//! corrupt the wire grammar.

use crate::error::EncodeError;

/// Joins sub-components inside a composite data element.
pub const COMPONENT_SEPARATOR: char = ':';

/// Joins data elements after the segment tag.
pub const ELEMENT_SEPARATOR: char = '+';

/// Ends every segment.
pub const SEGMENT_TERMINATOR: char = '\'';

/// The service string advice emitted verbatim as the first line of every
/// interchange. Declares the separator set; not counted as a segment.
pub const SERVICE_STRING_ADVICE: &str = "UNA:+.?*'";

/// Builder for a single segment line.
///
/// ```
/// use pnrgov_edifact::segment::Segment;
///
/// let line = Segment::new("RCI")
///     .composite(["FI", "ABC234", "", "010426", "0915"])
///     .finish()
///     .unwrap();
/// assert_eq!(line, "RCI+FI:ABC234::010426:0915'");
/// ```
#[derive(Debug)]
pub struct Segment {
    tag: &'static str,
    elements: Vec<Vec<String>>,
}

impl Segment {
    /// Start a segment with the given tag.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            elements: Vec::new(),
        }
    }

    /// Append a simple data element.
    pub fn element(mut self, value: impl Into<String>) -> Self {
        self.elements.push(vec![value.into()]);
        self
    }

    /// Append a composite data element; empty strings stand for skipped
    /// sub-components.
    pub fn composite<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements
            .push(parts.into_iter().map(Into::into).collect());
        self
    }

    /// Validate every field value and render the terminated segment line.
    ///
    /// # Errors
    ///
    /// [`EncodeError::ReservedCharacter`] if any value contains `:`, `+`
    /// or `'`.
    pub fn finish(self) -> Result<String, EncodeError> {
        let mut out = String::from(self.tag);
        for parts in &self.elements {
            for part in parts {
                if let Some(character) = part
                    .chars()
                    .find(|c| matches!(*c, COMPONENT_SEPARATOR | ELEMENT_SEPARATOR | SEGMENT_TERMINATOR))
                {
                    return Err(EncodeError::ReservedCharacter {
                        tag: self.tag,
                        value: part.clone(),
                        character,
                    });
                }
            }
            out.push(ELEMENT_SEPARATOR);
            let mut first = true;
            for part in parts {
                if !first {
                    out.push(COMPONENT_SEPARATOR);
                }
                first = false;
                out.push_str(part);
            }
        }
        out.push(SEGMENT_TERMINATOR);
        Ok(out)
    }
}
