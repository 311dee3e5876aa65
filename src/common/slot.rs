//! Frame slot contents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::config::EMPTY_SLOT;
use crate::common::{Error, PageId};

/// What a single frame holds.
///
/// On the wire a slot is a plain integer: the page id, or [`EMPTY_SLOT`].
/// In memory it is tagged so an empty slot can never be mistaken for a page.
///
/// # Example
/// ```
/// use pagesim::{PageId, Slot};
///
/// assert_eq!(i32::from(Slot::Empty), -1);
/// assert_eq!(Slot::try_from(7).unwrap(), Slot::Occupied(PageId::new(7)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Slot {
    #[default]
    Empty,
    Occupied(PageId),
}

impl Slot {
    #[inline]
    pub fn page(&self) -> Option<PageId> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(page) => Some(*page),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline]
    pub fn holds(&self, page: PageId) -> bool {
        *self == Slot::Occupied(page)
    }
}

impl From<Slot> for i32 {
    fn from(slot: Slot) -> i32 {
        match slot {
            Slot::Empty => EMPTY_SLOT,
            Slot::Occupied(page) => i32::from(page.0),
        }
    }
}

impl TryFrom<i32> for Slot {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == EMPTY_SLOT {
            return Ok(Slot::Empty);
        }
        u8::try_from(value)
            .map(|id| Slot::Occupied(PageId(id)))
            .map_err(|_| Error::InvalidSlotEncoding(value))
    }
}

/// Renders `-` for an empty slot, as the step trace does.
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => f.pad("-"),
            Slot::Occupied(page) => fmt::Display::fmt(page, f),
        }
    }
}
