//! Eviction policy implementations.
//!
//! Currently implements:
//! - [`Fifo`] - Evict in insertion order
//! - [`Lru`] - Evict the least recently referenced page
//! - [`Optimal`] - Belady's policy, evict the page used farthest ahead
//!
//! All policies break ties toward the lowest slot index.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

pub use fifo::Fifo;
pub use lru::Lru;
pub use optimal::Optimal;

use crate::common::{Error, FrameId};
use crate::reference::ReferenceString;
use crate::simulator::FrameSet;

/// A page-replacement decision procedure.
///
/// The simulator owns the [`FrameSet`] and the hit/miss test. A policy only
/// keeps its own bookkeeping and picks the slot to overwrite on a miss.
///
/// Per reference at `position`, the simulator calls either
/// [`record_hit`](Self::record_hit), or
/// [`select_slot`](Self::select_slot) followed by
/// [`record_fill`](Self::record_fill) on the chosen slot.
pub trait EvictionPolicy {
    fn kind(&self) -> PolicyKind;

    /// Frame count the policy's bookkeeping is sized for, or `None` if it
    /// keeps no per-slot state.
    fn capacity(&self) -> Option<usize> {
        None
    }

    /// References the policy looks ahead in, or `None` if it never does.
    fn lookahead(&self) -> Option<&ReferenceString> {
        None
    }

    /// The page in `slot` was referenced again.
    fn record_hit(&mut self, slot: FrameId, position: usize);

    /// Pick the slot that receives the missing page.
    ///
    /// May return an empty slot. When it returns an occupied one, that page
    /// is evicted.
    fn select_slot(&mut self, frames: &FrameSet, position: usize) -> FrameId;

    /// A new page was written into `slot`.
    fn record_fill(&mut self, slot: FrameId, position: usize);
}

impl<P: EvictionPolicy + ?Sized> EvictionPolicy for Box<P> {
    fn kind(&self) -> PolicyKind {
        (**self).kind()
    }

    fn capacity(&self) -> Option<usize> {
        (**self).capacity()
    }

    fn lookahead(&self) -> Option<&ReferenceString> {
        (**self).lookahead()
    }

    fn record_hit(&mut self, slot: FrameId, position: usize) {
        (**self).record_hit(slot, position)
    }

    fn select_slot(&mut self, frames: &FrameSet, position: usize) -> FrameId {
        (**self).select_slot(frames, position)
    }

    fn record_fill(&mut self, slot: FrameId, position: usize) {
        (**self).record_fill(slot, position)
    }
}

/// The closed set of supported policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "OPTIMAL",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" | "optimo" => Ok(PolicyKind::Optimal),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("LRU".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!("Optimal".parse::<PolicyKind>().unwrap(), PolicyKind::Optimal);
        assert_eq!("opt".parse::<PolicyKind>().unwrap(), PolicyKind::Optimal);
        assert!("clock".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_policy_kind_display() {
        let names: Vec<String> = PolicyKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["FIFO", "LRU", "OPTIMAL"]);
    }
}
