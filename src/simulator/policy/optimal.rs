//! Belady's OPTIMAL replacement policy.
//!
//! Needs the whole reference string up front. On every eviction it asks,
//! for each resident page, when that page is next referenced:
//! - A page never referenced again is evicted at once (first such slot)
//! - Otherwise the page whose next use is farthest away is evicted, with
//!   equal distances resolved to the lowest slot index
//!
//! With [`LookaheadMode::Scan`] each question is a linear scan, O(L² · F)
//! overall. [`LookaheadMode::Indexed`] answers from a [`NextUseIndex`].

use crate::common::config::LookaheadMode;
use crate::common::{FrameId, PageId};
use crate::reference::{NextUseIndex, ReferenceString};
use crate::simulator::policy::{EvictionPolicy, PolicyKind};
use crate::simulator::FrameSet;

/// Evicts the page whose next reference lies farthest in the future.
///
/// Holds no per-slot state; every decision is recomputed from the references.
pub struct Optimal<'a> {
    references: &'a ReferenceString,
    /// Present in [`LookaheadMode::Indexed`]; `None` scans `references`.
    index: Option<NextUseIndex>,
}

impl<'a> Optimal<'a> {
    pub fn new(references: &'a ReferenceString, mode: LookaheadMode) -> Self {
        let index = match mode {
            LookaheadMode::Scan => None,
            LookaheadMode::Indexed => Some(NextUseIndex::build(references)),
        };
        Self { references, index }
    }

    fn next_use_after(&self, position: usize, page: PageId) -> Option<usize> {
        match &self.index {
            Some(index) => index.next_use_after(position, page),
            None => self.references.next_use_after(position, page),
        }
    }
}

impl EvictionPolicy for Optimal<'_> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn lookahead(&self) -> Option<&ReferenceString> {
        Some(self.references)
    }

    fn record_hit(&mut self, _slot: FrameId, _position: usize) {}

    fn select_slot(&mut self, frames: &FrameSet, position: usize) -> FrameId {
        if let Some(empty) = frames.first_empty() {
            return empty;
        }

        let mut victim = FrameId::new(0);
        let mut farthest: Option<usize> = None;

        for (slot, page) in frames.occupied() {
            match self.next_use_after(position, page) {
                None => {
                    log::trace!("OPTIMAL evicts {} (page {} never used again)", slot, page);
                    return slot;
                }
                // Strictly greater: the earliest slot keeps a tie.
                Some(next) if Some(next) > farthest => {
                    farthest = Some(next);
                    victim = slot;
                }
                Some(_) => {}
            }
        }

        log::trace!("OPTIMAL evicts {} (next use at {:?})", victim, farthest);
        victim
    }

    fn record_fill(&mut self, _slot: FrameId, _position: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_frames(pages: &[u8]) -> FrameSet {
        let mut frames = FrameSet::new(pages.len());
        for (i, &p) in pages.iter().enumerate() {
            frames.install(FrameId::new(i), PageId(p));
        }
        frames
    }

    fn both_modes(references: &ReferenceString) -> [Optimal<'_>; 2] {
        [
            Optimal::new(references, LookaheadMode::Scan),
            Optimal::new(references, LookaheadMode::Indexed),
        ]
    }

    #[test]
    fn test_optimal_fills_first_empty() {
        let refs = ReferenceString::parse("1234").unwrap();
        let mut frames = FrameSet::new(3);
        frames.install(FrameId::new(1), PageId(1));

        for mut optimal in both_modes(&refs) {
            assert_eq!(optimal.select_slot(&frames, 1), FrameId::new(0));
        }
    }

    #[test]
    fn test_optimal_evicts_farthest() {
        // At position 3 (page 4): 1 is next used at 5, 2 at 4, 3 at 6.
        let refs = ReferenceString::parse("1234213").unwrap();
        let frames = full_frames(&[1, 2, 3]);

        for mut optimal in both_modes(&refs) {
            assert_eq!(optimal.select_slot(&frames, 3), FrameId::new(2));
        }
    }

    #[test]
    fn test_optimal_first_never_used_wins() {
        // At position 3: pages 2 and 3 never recur; slot 1 is scanned first.
        let refs = ReferenceString::parse("12341").unwrap();
        let frames = full_frames(&[1, 2, 3]);

        for mut optimal in both_modes(&refs) {
            assert_eq!(optimal.select_slot(&frames, 3), FrameId::new(1));
        }
    }

    #[test]
    fn test_optimal_never_used_beats_farther_earlier_slot() {
        // Slot 0 holds page 1 (next use at 9), slot 1 holds page 2 (never).
        let refs = ReferenceString::parse("1230000001").unwrap();
        let frames = full_frames(&[1, 2]);

        for mut optimal in both_modes(&refs) {
            assert_eq!(optimal.select_slot(&frames, 2), FrameId::new(1));
        }
    }

    #[test]
    fn test_optimal_binds_references() {
        let refs = ReferenceString::parse("1234").unwrap();
        for optimal in both_modes(&refs) {
            assert_eq!(optimal.lookahead(), Some(&refs));
            assert_eq!(optimal.capacity(), None);
        }
    }

    #[test]
    fn test_optimal_single_frame() {
        let refs = ReferenceString::parse("121").unwrap();
        let frames = full_frames(&[1]);

        for mut optimal in both_modes(&refs) {
            assert_eq!(optimal.select_slot(&frames, 1), FrameId::new(0));
        }
    }
}
