//! # Segment Builders
//!
//! One builder per segment type, grouped by family. Each builder is a pure
//! function from already-resolved values to one terminated segment line;
//! none of them sees the full reservation graph.

pub mod control;
pub mod envelope;
pub mod flight;
pub mod traveler;
