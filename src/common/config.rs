//! Configuration for page-replacement simulations.

use crate::common::{Error, Result};

/// Smallest frame count a simulation accepts.
pub const MIN_FRAMES: usize = 1;

/// Largest frame count a simulation accepts.
///
/// This is an operational bound, not a limit of any policy. The step table
/// grows as `steps × frames`, and callers render it as a grid.
pub const MAX_FRAMES: usize = 10;

/// Wire encoding of an empty slot.
///
/// Page identifiers are never negative, so `-1` cannot collide with one.
pub const EMPTY_SLOT: i32 = -1;

/// How the OPTIMAL policy finds the next use of a resident page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LookaheadMode {
    /// Re-scan the remaining references on every eviction.
    ///
    /// O(L² · F) worst case.
    Scan,

    /// Binary-search a per-page occurrence index built once per run.
    ///
    /// O(L · F · log L), at the cost of one `usize` per reference.
    #[default]
    Indexed,
}

/// Validated parameters for one simulation.
///
/// # Example
/// ```
/// use pagesim::common::config::{LookaheadMode, SimulationConfig};
///
/// let config = SimulationConfig::new(3).unwrap().with_lookahead(LookaheadMode::Scan);
/// assert_eq!(config.frame_count(), 3);
/// assert!(SimulationConfig::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    frame_count: usize,
    lookahead: LookaheadMode,
}

impl SimulationConfig {
    /// Create a config, rejecting frame counts outside
    /// [`MIN_FRAMES`]..=[`MAX_FRAMES`].
    pub fn new(frame_count: usize) -> Result<Self> {
        if !(MIN_FRAMES..=MAX_FRAMES).contains(&frame_count) {
            return Err(Error::FrameCountOutOfRange(frame_count));
        }
        Ok(Self {
            frame_count,
            lookahead: LookaheadMode::default(),
        })
    }

    /// Choose how OPTIMAL looks ahead. Results are identical either way.
    pub fn with_lookahead(mut self, lookahead: LookaheadMode) -> Self {
        self.lookahead = lookahead;
        self
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[inline]
    pub fn lookahead(&self) -> LookaheadMode {
        self.lookahead
    }
}
