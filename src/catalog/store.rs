//! Read-only catalog store.
//!
//! The [`Catalog`] owns every book, author and genre for the lifetime of the plugin.
//! It is validated once by [`Catalog::initialize`] and exposes no mutation API
//! afterwards.
//!
//! # Lookups
//!
//! - Books are found by id with [`Catalog::find_book_by_id`]; a miss is `None`.
//! - Author and genre names resolve through [`Catalog::author_name`] and
//!   [`Catalog::genre_name`], which report a miss as
//!   [`BookshelfError::NotFound`].
//! - Rendering code uses the `*_or_unknown` variants, which log the miss and
//!   substitute [`UNKNOWN_AUTHOR`] / [`UNKNOWN_GENRE`].

use crate::domain::{Author, Book, BookshelfError, EntityKind, Genre, Result};
use std::collections::HashMap;

/// Text shown wherever an author id cannot be resolved.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Text shown wherever a genre id cannot be resolved.
pub const UNKNOWN_GENRE: &str = "Unknown Genre";

/// Immutable catalog of books, authors and genres.
///
/// Entities keep the order they were loaded in. Lookups by id go through
/// per-kind indexes built during initialization.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Vec<Author>,
    genres: Vec<Genre>,
    book_index: HashMap<String, usize>,
    author_index: HashMap<String, usize>,
    genre_index: HashMap<String, usize>,
}

impl Catalog {
    /// Validates and indexes a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::InvalidData`] if:
    /// - two entities of the same kind share an id
    /// - a book references an author or genre that does not exist
    /// - a book has no genres
    ///
    /// # Example
    ///
    /// ```
    /// use bookshelf::catalog::Catalog;
    /// use bookshelf::domain::{Author, Genre};
    ///
    /// let catalog = Catalog::initialize(
    ///     vec![],
    ///     vec![Author { id: "a1".into(), name: "Mary Shelley".into() }],
    ///     vec![Genre { id: "g1".into(), name: "Horror".into() }],
    /// )?;
    /// assert_eq!(catalog.author_name("a1")?, "Mary Shelley");
    /// # Ok::<(), bookshelf::BookshelfError>(())
    /// ```
    pub fn initialize(books: Vec<Book>, authors: Vec<Author>, genres: Vec<Genre>) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_initialize",
            books = books.len(),
            authors = authors.len(),
            genres = genres.len()
        ).entered();

        let author_index = index_unique(&authors, |a| &a.id, EntityKind::Author)?;
        let genre_index = index_unique(&genres, |g| &g.id, EntityKind::Genre)?;
        let book_index = index_unique(&books, |b| &b.id, EntityKind::Book)?;

        for book in &books {
            if !author_index.contains_key(&book.author) {
                return Err(BookshelfError::InvalidData(format!(
                    "book {} references unknown author {}",
                    book.id, book.author
                )));
            }
            if book.genres.is_empty() {
                return Err(BookshelfError::InvalidData(format!(
                    "book {} has no genres",
                    book.id
                )));
            }
            if let Some(genre) = book.genres.iter().find(|g| !genre_index.contains_key(*g)) {
                return Err(BookshelfError::InvalidData(format!(
                    "book {} references unknown genre {genre}",
                    book.id
                )));
            }
        }

        tracing::debug!("catalog validated");

        Ok(Self {
            books,
            authors,
            genres,
            book_index,
            author_index,
            genre_index,
        })
    }

    /// Catalog with no entries, used when loading fails.
    ///
    /// Every lookup misses and every search yields the empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All books in load order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All authors in load order.
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All genres in load order.
    #[must_use]
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Looks up a book by id.
    ///
    /// # Returns
    ///
    /// - `Some(&Book)` if a book with that id was loaded
    /// - `None` otherwise
    #[must_use]
    pub fn find_book_by_id(&self, id: &str) -> Option<&Book> {
        self.book_index.get(id).and_then(|&i| self.books.get(i))
    }

    /// Resolves an author id to its display name.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::NotFound`] if the id is absent. Rendering code
    /// goes through [`Catalog::author_name_or_unknown`] instead.
    pub fn author_name(&self, id: &str) -> Result<&str> {
        self.author_index
            .get(id)
            .and_then(|&i| self.authors.get(i))
            .map(|a| a.name.as_str())
            .ok_or_else(|| BookshelfError::NotFound {
                kind: EntityKind::Author,
                id: id.to_string(),
            })
    }

    /// Resolves a genre id to its display name.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::NotFound`] if the id is absent.
    pub fn genre_name(&self, id: &str) -> Result<&str> {
        self.genre_index
            .get(id)
            .and_then(|&i| self.genres.get(i))
            .map(|g| g.name.as_str())
            .ok_or_else(|| BookshelfError::NotFound {
                kind: EntityKind::Genre,
                id: id.to_string(),
            })
    }

    /// Author name, or [`UNKNOWN_AUTHOR`] on a lookup miss.
    ///
    /// ```
    /// use bookshelf::catalog::{Catalog, UNKNOWN_AUTHOR};
    ///
    /// assert_eq!(Catalog::empty().author_name_or_unknown("a1"), UNKNOWN_AUTHOR);
    /// ```
    #[must_use]
    pub fn author_name_or_unknown(&self, id: &str) -> &str {
        self.author_name(id).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "author lookup missed");
            UNKNOWN_AUTHOR
        })
    }

    /// Genre name, or [`UNKNOWN_GENRE`] on a lookup miss.
    #[must_use]
    pub fn genre_name_or_unknown(&self, id: &str) -> &str {
        self.genre_name(id).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "genre lookup missed");
            UNKNOWN_GENRE
        })
    }
}

fn index_unique<T>(
    entities: &[T],
    id_of: impl Fn(&T) -> &String,
    kind: EntityKind,
) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(entities.len());
    for (position, entity) in entities.iter().enumerate() {
        let id = id_of(entity);
        if index.insert(id.clone(), position).is_some() {
            return Err(BookshelfError::InvalidData(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn author(id: &str, name: &str) -> Author {
        Author { id: id.into(), name: name.into() }
    }

    fn genre(id: &str, name: &str) -> Genre {
        Genre { id: id.into(), name: name.into() }
    }

    fn book(id: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.into(),
            title: format!("Title {id}"),
            author: author.into(),
            image: String::new(),
            genres: genres.iter().map(ToString::to_string).collect(),
            published: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
            description: String::new(),
        }
    }

    fn sample() -> Catalog {
        Catalog::initialize(
            vec![book("b1", "a1", &["g1"]), book("b2", "a2", &["g1", "g2"])],
            vec![author("a1", "Jane Austen"), author("a2", "Leo Tolstoy")],
            vec![genre("g1", "Classics"), genre("g2", "History")],
        )
        .unwrap()
    }

    #[test]
    fn finds_books_and_names() {
        let catalog = sample();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_book_by_id("b2").map(|b| b.author.as_str()), Some("a2"));
        assert!(catalog.find_book_by_id("b9").is_none());
        assert_eq!(catalog.author_name("a1").unwrap(), "Jane Austen");
        assert_eq!(catalog.genre_name("g2").unwrap(), "History");
    }

    #[test]
    fn name_misses_are_not_found_and_fall_back() {
        let catalog = sample();
        assert!(matches!(
            catalog.author_name("nope"),
            Err(BookshelfError::NotFound { kind: EntityKind::Author, .. })
        ));
        assert!(matches!(
            catalog.genre_name("nope"),
            Err(BookshelfError::NotFound { kind: EntityKind::Genre, .. })
        ));
        assert_eq!(catalog.author_name_or_unknown("nope"), UNKNOWN_AUTHOR);
        assert_eq!(catalog.genre_name_or_unknown("nope"), UNKNOWN_GENRE);
    }

    #[test]
    fn rejects_dangling_author() {
        let result = Catalog::initialize(
            vec![book("b1", "ghost", &["g1"])],
            vec![author("a1", "Jane Austen")],
            vec![genre("g1", "Classics")],
        );
        assert!(matches!(result, Err(BookshelfError::InvalidData(_))));
    }

    #[test]
    fn rejects_dangling_genre_and_empty_genres() {
        let dangling = Catalog::initialize(
            vec![book("b1", "a1", &["g1", "g7"])],
            vec![author("a1", "Jane Austen")],
            vec![genre("g1", "Classics")],
        );
        assert!(matches!(dangling, Err(BookshelfError::InvalidData(_))));

        let empty = Catalog::initialize(
            vec![book("b1", "a1", &[])],
            vec![author("a1", "Jane Austen")],
            vec![genre("g1", "Classics")],
        );
        assert!(matches!(empty, Err(BookshelfError::InvalidData(_))));
    }

    #[test]
    fn rejects_duplicate_ids_per_kind() {
        let books = Catalog::initialize(
            vec![book("b1", "a1", &["g1"]), book("b1", "a1", &["g1"])],
            vec![author("a1", "Jane Austen")],
            vec![genre("g1", "Classics")],
        );
        assert!(matches!(books, Err(BookshelfError::InvalidData(_))));

        let authors = Catalog::initialize(
            vec![],
            vec![author("a1", "Jane Austen"), author("a1", "Someone Else")],
            vec![],
        );
        assert!(matches!(authors, Err(BookshelfError::InvalidData(_))));
    }

    #[test]
    fn same_id_across_kinds_is_allowed() {
        let catalog = Catalog::initialize(
            vec![book("x", "x", &["x"])],
            vec![author("x", "Ex Author")],
            vec![genre("x", "Ex Genre")],
        );
        assert!(catalog.is_ok());
    }
}
