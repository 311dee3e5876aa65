//! Error types for pagesim.

use thiserror::Error;

use crate::common::config::{MAX_FRAMES, MIN_FRAMES};

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every input error is detected before the first simulation step runs, so
/// a failed call never returns a partial table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The reference string was empty, or only whitespace.
    #[error("reference string is empty")]
    EmptyReferences,

    /// The reference string contained something other than `0`-`9`.
    ///
    /// `position` is the character index in the raw input.
    #[error("reference string must contain only digits (0-9), found {ch:?} at position {position}")]
    NonDigitReference { ch: char, position: usize },

    /// Frame count outside the supported range.
    #[error(
        "frame count {0} is outside the supported range {min}..={max}",
        min = MIN_FRAMES,
        max = MAX_FRAMES
    )]
    FrameCountOutOfRange(usize),

    /// A policy name that is not FIFO, LRU or OPTIMAL.
    #[error("unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// A wire-encoded slot that is neither the empty sentinel nor a page id.
    #[error("invalid slot encoding: {0}")]
    InvalidSlotEncoding(i32),

    /// Internal state broke an invariant, or a caller-built policy does not
    /// match the simulation it was handed to.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// Coarse classification of an [`Error`].
///
/// Delivery layers map `InvalidInput` to a client error and anything else to
/// a server error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvariantViolation,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyReferences
            | Error::NonDigitReference { .. }
            | Error::FrameCountOutOfRange(_)
            | Error::UnknownPolicy(_)
            | Error::InvalidSlotEncoding(_) => ErrorKind::InvalidInput,
            Error::InvariantViolation(_) => ErrorKind::InvariantViolation,
        }
    }

    /// True if the caller supplied bad input.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NonDigitReference { ch: 'x', position: 3 };
        assert_eq!(
            format!("{}", err),
            "reference string must contain only digits (0-9), found 'x' at position 3"
        );

        let err = Error::FrameCountOutOfRange(11);
        assert_eq!(
            format!("{}", err),
            "frame count 11 is outside the supported range 1..=10"
        );
    }

    #[test]
    fn test_error_kind() {
        assert!(Error::EmptyReferences.is_invalid_input());
        assert!(Error::FrameCountOutOfRange(0).is_invalid_input());
        assert_eq!(
            Error::InvariantViolation("table length".into()).kind(),
            ErrorKind::InvariantViolation
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
