//! Filter engine mapping search criteria to matching books.
//!
//! A book matches when all three predicates hold:
//!
//! 1. **Genre**: the criteria genre is `any`, or the book lists that genre id
//! 2. **Author**: the criteria author is `any`, or equals the book's author id
//! 3. **Title**: the trimmed query is empty, or the lowercased title contains
//!    the lowercased query
//!
//! Filtering is pure and keeps catalog order, so the same criteria always
//! yield the same list.

use crate::domain::Book;

/// Select value meaning "no constraint" for the author and genre fields.
pub const ANY: &str = "any";

/// Criteria submitted from the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title. Blank matches everything.
    pub title: String,
    /// Author id, or [`ANY`].
    pub author: String,
    /// Genre id, or [`ANY`].
    pub genre: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: ANY.to_string(),
            genre: ANY.to_string(),
        }
    }
}

impl FilterCriteria {
    /// Builds criteria from raw form values.
    ///
    /// Values are stored as given; [`normalized`](Self::normalized) maps blank
    /// selects to [`ANY`].
    ///
    /// # Example
    ///
    /// ```
    /// use bookshelf::catalog::{FilterCriteria, ANY};
    ///
    /// let criteria = FilterCriteria::new("dune", "", "g1").normalized();
    /// assert_eq!(criteria.author, ANY);
    /// assert_eq!(criteria.genre, "g1");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }

    /// Maps blank author and genre selections to [`ANY`].
    #[must_use]
    pub fn normalized(&self) -> Self {
        let or_any = |value: &str| {
            if value.trim().is_empty() {
                ANY.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            title: self.title.clone(),
            author: or_any(&self.author),
            genre: or_any(&self.genre),
        }
    }

    /// Evaluates the genre, author and title predicates against one book.
    ///
    /// Expects normalized criteria: a blank author here is compared literally.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let genre_match = self.genre == ANY || book.genres.iter().any(|g| *g == self.genre);
        let author_match = self.author == ANY || book.author == self.author;
        let title_match = self.title.trim().is_empty()
            || book.title.to_lowercase().contains(&self.title.to_lowercase());

        genre_match && author_match && title_match
    }
}

/// Returns the books matching `criteria`, in catalog order.
///
/// Criteria are normalized first, so a blank author or genre behaves like [`ANY`].
///
/// # Example
///
/// ```
/// use bookshelf::catalog::{filter, FilterCriteria};
///
/// let matches = filter::apply(&[], &FilterCriteria::default());
/// assert!(matches.is_empty());
/// ```
#[must_use]
pub fn apply(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let criteria = criteria.normalized();
    let _span = tracing::debug_span!("filter_apply",
        total_books = books.len(),
        title_len = criteria.title.len(),
        author = %criteria.author,
        genre = %criteria.genre
    ).entered();

    let matches: Vec<Book> = books.iter().filter(|b| criteria.matches(b)).cloned().collect();

    tracing::debug!(match_count = matches.len(), "filter applied");
    matches
}
