//! Catalog sources.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where the
//! catalog comes from, plus the serialized [`CatalogData`] shape shared by every
//! source. Sources only decode; validation happens in [`Catalog::initialize`].
//!
//! # File Format
//!
//! ```json
//! {
//!   "books_per_page": 36,
//!   "authors": { "a1": "Jane Austen" },
//!   "genres": { "g1": "Classics" },
//!   "books": [
//!     {
//!       "id": "b1",
//!       "title": "Pride and Prejudice",
//!       "author": "a1",
//!       "image": "https://covers.example.org/b1.jpg",
//!       "genres": ["g1"],
//!       "published": "1813-01-28T00:00:00.000Z",
//!       "description": "..."
//!     }
//!   ]
//! }
//! ```
//!
//! The same shape is accepted as TOML (`[authors]`, `[genres]`, `[[books]]`).

use crate::catalog::store::Catalog;
use crate::domain::{Author, Book, BookshelfError, Genre, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Books revealed per "show more" when a catalog does not say otherwise.
pub const DEFAULT_BOOKS_PER_PAGE: usize = 36;

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Decoded, not yet validated catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub books: Vec<Book>,
    /// Author id → name, in document order.
    #[serde(default, deserialize_with = "named_entries")]
    pub authors: Vec<(String, String)>,
    /// Genre id → name, in document order.
    #[serde(default, deserialize_with = "named_entries")]
    pub genres: Vec<(String, String)>,
    #[serde(default = "default_books_per_page")]
    pub books_per_page: usize,
}

const fn default_books_per_page() -> usize {
    DEFAULT_BOOKS_PER_PAGE
}

impl CatalogData {
    /// Decodes a JSON catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Parse`] if `input` is not a valid JSON catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use bookshelf::catalog::CatalogData;
    ///
    /// let data = CatalogData::from_json(r#"{ "authors": { "a2": "B", "a1": "A" } }"#)?;
    /// assert_eq!(data.authors[0].0, "a2");
    /// assert_eq!(data.books_per_page, 36);
    /// # Ok::<(), bookshelf::BookshelfError>(())
    /// ```
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|e| BookshelfError::Parse(format!("failed to parse JSON catalog: {e}")))
    }

    /// Decodes a TOML catalog with the same shape as the JSON one.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Parse`] if `input` is not a valid TOML catalog.
    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input)
            .map_err(|e| BookshelfError::Parse(format!("failed to parse TOML catalog: {e}")))
    }

    /// Validates the data and splits it into the catalog and its page size.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::InvalidData`] for a zero page size or any
    /// [`Catalog::initialize`] failure.
    pub fn into_catalog(self) -> Result<(Catalog, usize)> {
        if self.books_per_page == 0 {
            return Err(BookshelfError::InvalidData(
                "books_per_page must be positive".to_string(),
            ));
        }

        let authors = self
            .authors
            .into_iter()
            .map(|(id, name)| Author { id, name })
            .collect();
        let genres = self
            .genres
            .into_iter()
            .map(|(id, name)| Genre { id, name })
            .collect();

        let catalog = Catalog::initialize(self.books, authors, genres)?;
        Ok((catalog, self.books_per_page))
    }
}

/// Somewhere a catalog can be loaded from.
///
/// Implementations only read and decode. Validation is shared and happens in
/// [`load_catalog`].
pub trait CatalogSource {
    /// Short human-readable description for logs.
    fn describe(&self) -> String;

    /// Reads and decodes the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or decoded.
    fn load(&self) -> Result<CatalogData>;
}

/// Catalog stored in a JSON or TOML file, chosen by extension.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading `path`. Nothing is touched until [`CatalogSource::load`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self) -> Result<CatalogData> {
        let _span = tracing::debug_span!("catalog_file_load", path = ?self.path).entered();

        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let contents = std::fs::read_to_string(&self.path)?;
        let data = match extension.as_deref() {
            Some("json") => CatalogData::from_json(&contents)?,
            Some("toml") => CatalogData::from_toml(&contents)?,
            other => {
                return Err(BookshelfError::Config(format!(
                    "unsupported catalog file extension: {}",
                    other.unwrap_or("<none>")
                )))
            }
        };

        tracing::debug!(books = data.books.len(), "catalog file decoded");
        Ok(data)
    }
}

/// Demo catalog compiled into the plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CatalogSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded demo catalog".to_string()
    }

    fn load(&self) -> Result<CatalogData> {
        CatalogData::from_json(EMBEDDED_CATALOG)
    }
}

/// Loads and validates a catalog from any source.
///
/// # Returns
///
/// The validated catalog and the page size to paginate it with.
///
/// # Errors
///
/// Propagates read, decode and validation errors.
///
/// # Example
///
/// ```
/// use bookshelf::catalog::{load_catalog, EmbeddedSource};
///
/// let (catalog, page_size) = load_catalog(&EmbeddedSource)?;
/// assert_eq!(catalog.len(), 40);
/// assert_eq!(page_size, 36);
/// # Ok::<(), bookshelf::BookshelfError>(())
/// ```
pub fn load_catalog(source: &dyn CatalogSource) -> Result<(Catalog, usize)> {
    let _span = tracing::debug_span!("load_catalog", source = %source.describe()).entered();
    source.load()?.into_catalog()
}

fn named_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of id to display name")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, String>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_valid() {
        let (catalog, page_size) = load_catalog(&EmbeddedSource).unwrap();
        assert_eq!(page_size, DEFAULT_BOOKS_PER_PAGE);
        assert!(catalog.len() > page_size);
        assert!(!catalog.authors().is_empty());
        assert!(!catalog.genres().is_empty());
    }

    #[test]
    fn keeps_author_document_order() {
        let data = CatalogData::from_json(
            r#"{"authors":{"z":"Zadie Smith","a":"Chinua Achebe"},"genres":{},"books":[]}"#,
        )
        .unwrap();
        assert_eq!(data.authors[0].0, "z");
        assert_eq!(data.authors[1].0, "a");
        assert_eq!(data.books_per_page, DEFAULT_BOOKS_PER_PAGE);
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let data = CatalogData::from_json(r#"{"books_per_page":0}"#).unwrap();
        assert!(matches!(data.into_catalog(), Err(BookshelfError::InvalidData(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            CatalogData::from_json("{ books: nope"),
            Err(BookshelfError::Parse(_))
        ));
    }
}
