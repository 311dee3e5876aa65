//! LRU (Least-Recently-Used) replacement policy.

use crate::common::FrameId;
use crate::simulator::policy::{EvictionPolicy, PolicyKind};
use crate::simulator::FrameSet;

/// Evicts the page whose last reference is oldest.
///
/// Each slot carries the position of its most recent reference. Empty slots
/// are filled first, lowest index first. Among full slots the smallest stamp
/// loses; equal stamps resolve to the lowest index.
#[derive(Debug, Clone)]
pub struct Lru {
    /// Position of the last reference per slot; `None` means never used.
    last_used: Vec<Option<usize>>,
}

impl Lru {
    pub fn new(capacity: usize) -> Self {
        Self {
            last_used: vec![None; capacity],
        }
    }

    /// Last-reference stamp of `slot`.
    pub fn last_used(&self, slot: FrameId) -> Option<usize> {
        self.last_used[slot.0]
    }
}

impl EvictionPolicy for Lru {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.last_used.len())
    }

    fn record_hit(&mut self, slot: FrameId, position: usize) {
        self.last_used[slot.0] = Some(position);
    }

    fn select_slot(&mut self, frames: &FrameSet, _position: usize) -> FrameId {
        if let Some(empty) = frames.first_empty() {
            return empty;
        }

        // `min_by_key` keeps the first of equal minima.
        let victim = self
            .last_used
            .iter()
            .enumerate()
            .min_by_key(|(_, stamp)| **stamp)
            .map_or(0, |(slot, _)| slot);

        log::trace!(
            "LRU evicts {} (last used at {:?})",
            FrameId::new(victim),
            self.last_used[victim]
        );
        FrameId::new(victim)
    }

    fn record_fill(&mut self, slot: FrameId, position: usize) {
        self.last_used[slot.0] = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    fn full_frames(pages: &[u8]) -> FrameSet {
        let mut frames = FrameSet::new(pages.len());
        for (i, &p) in pages.iter().enumerate() {
            frames.install(FrameId::new(i), PageId(p));
        }
        frames
    }

    #[test]
    fn test_lru_fills_first_empty() {
        let mut frames = FrameSet::new(3);
        frames.install(FrameId::new(0), PageId(1));
        let mut lru = Lru::new(3);
        lru.record_fill(FrameId::new(0), 0);

        assert_eq!(lru.capacity(), Some(3));
        assert_eq!(lru.select_slot(&frames, 1), FrameId::new(1));
    }

    #[test]
    fn test_lru_evicts_oldest() {
        let frames = full_frames(&[1, 2, 3]);
        let mut lru = Lru::new(3);
        lru.record_fill(FrameId::new(0), 0);
        lru.record_fill(FrameId::new(1), 1);
        lru.record_fill(FrameId::new(2), 2);

        // Touch page 1: page 2 becomes the oldest.
        lru.record_hit(FrameId::new(0), 3);
        assert_eq!(lru.last_used(FrameId::new(0)), Some(3));
        assert_eq!(lru.select_slot(&frames, 4), FrameId::new(1));
    }

    #[test]
    fn test_lru_tie_prefers_lowest_index() {
        let frames = full_frames(&[1, 2, 3]);
        let mut lru = Lru::new(3);
        lru.record_fill(FrameId::new(0), 5);
        lru.record_fill(FrameId::new(1), 2);
        lru.record_fill(FrameId::new(2), 2);

        assert_eq!(lru.select_slot(&frames, 6), FrameId::new(1));
    }
}
