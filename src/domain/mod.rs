//! Domain layer for the Bookshelf plugin.
//!
//! This module contains the catalog entity types and the error model, independent
//! of Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book, author and genre records

pub mod book;
pub mod error;

pub use book::{Author, Book, Genre};
pub use error::{BookshelfError, EntityKind, Result};
