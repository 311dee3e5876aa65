//! FIFO (First-In-First-Out) replacement policy.

use crate::common::FrameId;
use crate::simulator::policy::{EvictionPolicy, PolicyKind};
use crate::simulator::FrameSet;

/// Evicts pages in the order they were loaded.
///
/// A circular cursor walks the slots. Frames start empty and fill in index
/// order, so the cursor also doubles as the "first empty slot" while the
/// frame set warms up. Hits never move it.
#[derive(Debug, Clone)]
pub struct Fifo {
    /// Slot that receives the next missing page.
    next: usize,

    capacity: usize,
}

impl Fifo {
    /// Create a FIFO policy for `capacity` frames.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self { next: 0, capacity }
    }
}

impl EvictionPolicy for Fifo {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    fn record_hit(&mut self, _slot: FrameId, _position: usize) {}

    fn select_slot(&mut self, _frames: &FrameSet, _position: usize) -> FrameId {
        FrameId::new(self.next)
    }

    fn record_fill(&mut self, _slot: FrameId, _position: usize) {
        self.next = (self.next + 1) % self.capacity;
    }
}
