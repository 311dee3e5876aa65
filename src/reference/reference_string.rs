//! Parsed page-reference sequences.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId, Result};

/// An ordered, non-empty sequence of page references.
///
/// Immutable once built; policies only ever read it.
///
/// # Example
/// ```
/// use pagesim::{PageId, ReferenceString};
///
/// let refs = ReferenceString::parse(" 70 45 ").unwrap();
/// assert_eq!(refs.len(), 4);
/// assert_eq!(refs.get(1), Some(PageId::new(0)));
/// assert!(ReferenceString::parse("7a").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceString {
    pages: Vec<PageId>,
}

impl ReferenceString {
    /// Parse a string of decimal digits, one page per digit.
    ///
    /// Whitespace anywhere in the input is ignored.
    ///
    /// # Errors
    /// - `Error::EmptyReferences` if nothing but whitespace remains
    /// - `Error::NonDigitReference` on the first other non-digit character
    pub fn parse(raw: &str) -> Result<Self> {
        let mut pages = Vec::with_capacity(raw.len());

        for (position, ch) in raw.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            match PageId::from_digit(ch) {
                Some(page) => pages.push(page),
                None => return Err(Error::NonDigitReference { ch, position }),
            }
        }

        Self::from_pages(pages)
    }

    /// Build from already-decoded page ids.
    ///
    /// Used by callers whose page domain is wider than single digits.
    pub fn from_pages(pages: Vec<PageId>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyReferences);
        }
        Ok(Self { pages })
    }

    /// Number of references (the step count of a simulation).
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether there are no references. Never true for a value built by
    /// [`parse`](Self::parse) or [`from_pages`](Self::from_pages).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<PageId> {
        self.pages.get(position).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Number of distinct pages referenced.
    pub fn distinct_pages(&self) -> usize {
        self.pages.iter().collect::<HashSet<_>>().len()
    }

    /// Position of the next reference to `page` strictly after `position`.
    ///
    /// Linear scan of the remainder. See
    /// [`NextUseIndex`](super::NextUseIndex) for the indexed variant.
    pub fn next_use_after(&self, position: usize, page: PageId) -> Option<usize> {
        let start = position + 1;
        self.pages
            .get(start..)?
            .iter()
            .position(|&p| p == page)
            .map(|offset| start + offset)
    }
}

impl FromStr for ReferenceString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for page in &self.pages {
            write!(f, "{}", page)?;
        }
        Ok(())
    }
}
