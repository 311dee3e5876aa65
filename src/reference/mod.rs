//! Reference strings: the input side of a simulation.
//!
//! - [`ReferenceString`] - Parses and holds the ordered page references
//! - [`NextUseIndex`] - Per-page occurrence index for fast lookahead

mod next_use;
mod reference_string;

pub use next_use::NextUseIndex;
pub use reference_string::ReferenceString;
