//! Page identifier type.

use std::fmt;

/// Identifies a virtual page in a reference string.
///
/// The digit parser only yields `0..=9`, but the type leaves room for callers
/// that feed wider page domains through
/// [`ReferenceString::from_pages`](crate::reference::ReferenceString::from_pages).
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(7);
/// assert_eq!(page_id.0, 7);
/// assert_eq!(PageId::from_digit('7'), Some(page_id));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u8);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u8) -> Self {
        PageId(id)
    }

    /// Parse a single ASCII decimal digit.
    #[inline]
    pub fn from_digit(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| PageId(d as u8))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
