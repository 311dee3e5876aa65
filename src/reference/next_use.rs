//! Precomputed next-occurrence index for OPTIMAL lookahead.

use std::collections::HashMap;

use crate::common::PageId;
use crate::reference::ReferenceString;

/// Sorted occurrence positions per page.
///
/// Answers the same question as [`ReferenceString::next_use_after`] with a
/// binary search instead of a scan of the remaining references.
#[derive(Debug, Clone, Default)]
pub struct NextUseIndex {
    occurrences: HashMap<PageId, Vec<usize>>,
}

impl NextUseIndex {
    /// Build the index in one pass over `references`.
    pub fn build(references: &ReferenceString) -> Self {
        let mut occurrences: HashMap<PageId, Vec<usize>> = HashMap::new();
        for (position, page) in references.iter().enumerate() {
            // Positions arrive in ascending order, so each list stays sorted.
            occurrences.entry(page).or_default().push(position);
        }
        Self { occurrences }
    }

    /// Position of the next reference to `page` strictly after `position`.
    pub fn next_use_after(&self, position: usize, page: PageId) -> Option<usize> {
        let positions = self.occurrences.get(&page)?;
        let idx = positions.partition_point(|&p| p <= position);
        positions.get(idx).copied()
    }
}
