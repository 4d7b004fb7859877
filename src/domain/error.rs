//! Error types for the Bookshelf plugin.
//!
//! This module defines the centralized error type [`BookshelfError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these errors are shown to the person browsing the catalog. Lookup misses
//! become fallback text, an exhausted list disables the "Show more" control, and a
//! stale detail id is ignored. Only a malformed catalog is fatal, and the plugin shim
//! downgrades even that to an empty catalog.

use std::fmt;
use thiserror::Error;

/// Kind of catalog entity referenced by a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A [`Book`](super::Book).
    Book,
    /// An [`Author`](super::Author).
    Author,
    /// A [`Genre`](super::Genre).
    Genre,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Book => "book",
            Self::Author => "author",
            Self::Genre => "genre",
        };
        f.write_str(name)
    }
}

/// The main error type for Bookshelf operations.
///
/// # Examples
///
/// ```
/// use bookshelf::domain::{BookshelfError, EntityKind};
///
/// let err = BookshelfError::NotFound { kind: EntityKind::Author, id: "a9".to_string() };
/// assert_eq!(err.to_string(), "author not found: a9");
/// ```
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// The catalog handed to the store is malformed.
    ///
    /// Raised at load time for duplicate ids, dangling author or genre references,
    /// books without genres, or a zero page size.
    #[error("Invalid catalog data: {0}")]
    InvalidData(String),

    /// A name lookup missed.
    ///
    /// Recovered locally by substituting "Unknown Author" or "Unknown Genre".
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up.
        kind: EntityKind,
        /// Identifier that has no entry in the catalog.
        id: String,
    },

    /// "Show more" was requested with no further books to reveal.
    #[error("No more books to show")]
    Exhausted,

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically while reading
    /// a catalog file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Bookshelf operations.
pub type Result<T> = std::result::Result<T, BookshelfError>;
