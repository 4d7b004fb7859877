//! Cumulative "show more" pagination over the current matches.
//!
//! Pages are never replaced. The visible slice is the union of every page
//! revealed so far, and each [`Pagination::advance`] reveals exactly one more.
//!
//! # Example
//!
//! ```
//! use bookshelf::catalog::Pagination;
//!
//! let mut pagination = Pagination::new(Vec::new(), 36);
//! assert!(pagination.current_slice().is_empty());
//! assert!(!pagination.has_more());
//! assert!(pagination.advance().is_err());
//! assert_eq!(pagination.page(), 1);
//! ```

use crate::domain::{Book, BookshelfError, Result};

/// Tracks the current matches and how many pages of them are revealed.
///
/// Invariant: `page >= 1` and `page_size >= 1`, so the first page is always
/// revealed, even when it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    matches: Vec<Book>,
    page: usize,
    page_size: usize,
}

impl Pagination {
    /// Starts at page 1 over `matches`. A zero page size is treated as 1.
    #[must_use]
    pub fn new(matches: Vec<Book>, page_size: usize) -> Self {
        Self {
            matches,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the matches and rewinds to page 1.
    ///
    /// The page size is kept.
    pub fn reset(&mut self, matches: Vec<Book>) {
        tracing::debug!(match_count = matches.len(), "pagination reset");
        self.matches = matches;
        self.page = 1;
    }

    /// Every book revealed so far: `matches[0 .. page * page_size]`, truncated.
    #[must_use]
    pub fn current_slice(&self) -> &[Book] {
        &self.matches[..self.revealed_end()]
    }

    /// Reveals the next page and returns only the newly revealed books.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Exhausted`] without touching the page counter when
    /// nothing remains to reveal.
    pub fn advance(&mut self) -> Result<&[Book]> {
        if !self.has_more() {
            tracing::debug!(page = self.page, "advance requested with nothing left");
            return Err(BookshelfError::Exhausted);
        }

        let start = self.revealed_end();
        self.page += 1;
        let end = self.revealed_end();

        tracing::debug!(page = self.page, revealed = end - start, "pagination advanced");
        Ok(&self.matches[start..end])
    }

    /// True while some matches are still hidden.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.matches.len() > self.page.saturating_mul(self.page_size)
    }

    /// Matches beyond the first page: `max(0, len - page_size)`.
    ///
    /// This is the count shown in the startup "Show more (N)" label. It does
    /// not shrink as pages are revealed.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.matches.len().saturating_sub(self.page_size)
    }

    /// Number of revealed pages, starting at 1.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Books revealed per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Every current match, revealed or not.
    #[must_use]
    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    fn revealed_end(&self) -> usize {
        self.page.saturating_mul(self.page_size).min(self.matches.len())
    }
}
