//! FrameSet - the resident pages of one simulation.
//!
//! A [`FrameSet`] is a fixed row of [`Slot`]s:
//! - Capacity is set at construction and never changes
//! - Every slot starts [`Slot::Empty`]
//! - Slot order is preserved exactly in snapshots

use crate::common::{FrameId, PageId, Slot};

/// Fixed-capacity frames, indexed by [`FrameId`].
///
/// Policies decide *which* slot to overwrite; the frame set only stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: Vec<Slot>,
}

impl FrameSet {
    /// Create `capacity` empty frames.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. Callers go through
    /// [`SimulationConfig`](crate::common::config::SimulationConfig), which
    /// rejects that.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            slots: vec![Slot::Empty; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Slot {
        self.slots[frame_id.0]
    }

    /// The slot currently holding `page`, if resident.
    pub fn position_of(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| slot.holds(page))
            .map(FrameId::new)
    }

    /// The lowest-indexed empty slot.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots
            .iter()
            .position(Slot::is_empty)
            .map(FrameId::new)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Occupied slots in ascending index order.
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.page().map(|page| (FrameId::new(i), page)))
    }

    /// Place `page` in `frame_id`, returning what was there.
    pub fn install(&mut self, frame_id: FrameId, page: PageId) -> Slot {
        std::mem::replace(&mut self.slots[frame_id.0], Slot::Occupied(page))
    }

    /// Copy of every slot, in slot order.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.slots.clone()
    }
}
