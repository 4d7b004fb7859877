//! Bookshelf: a Zellij plugin for browsing a book catalog.
//!
//! Bookshelf shows a static catalog of books as a paginated list and provides:
//! - Search by title substring, author and genre
//! - Cumulative "Show more" paging
//! - A detail overlay per book (cover, title, "Author (Year)", description)
//! - A day/night theme switch
//! - A reusable preview element driven by `title`, `author-name` and `image`
//!   attributes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Interaction controller
//! │  - Event handling and surface routing               │
//! │  - Actions for the host                             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ UI Layer (ui/)           │   │ Catalog Layer (catalog/) │
//! │ - Document slots         │   │ - Store and lookups      │
//! │ - Preview renderer       │   │ - Filter engine          │
//! │ - Theme, components      │   │ - Pagination             │
//! └──────────────────────────┘   │ - File / embedded source │
//!                                └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Infrastructure (infrastructure/) │
//! │  Observability (observability/)                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookshelf.wasm" {
//!         catalog_file "~/books/catalog.toml"
//!         color_scheme "dark"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! Without `catalog_file` the bundled demo catalog is used.
//!
//! # Example
//!
//! ```
//! use bookshelf::catalog::FilterCriteria;
//! use bookshelf::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.document.list.items.len(), 36);
//!
//! handle_event(&mut state, &Event::SubmitSearch(FilterCriteria::new("war", "any", "any")))?;
//! assert!(state.document.list.items.len() < 36);
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Surface};
pub use domain::{Book, BookshelfError, Result};
pub use ui::Theme;

use catalog::source::DEFAULT_BOOKS_PER_PAGE;
use catalog::{load_catalog, Catalog, CatalogSource, EmbeddedSource, FileSource};
use std::collections::BTreeMap;

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path to a `.json` or `.toml` catalog. `~` maps to the `/host` mount.
    ///
    /// `None` selects the embedded demo catalog.
    pub catalog_file: Option<String>,

    /// Host color-scheme preference: `dark` (or `night`) starts in night mode.
    pub color_scheme: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses the Zellij configuration map.
    ///
    /// Blank values count as unset.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use bookshelf::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_file".to_string(), "~/books.json".to_string());
    /// map.insert("color_scheme".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_file.as_deref(), Some("~/books.json"));
    /// assert_eq!(config.color_scheme, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            catalog_file: value("catalog_file"),
            color_scheme: value("color_scheme"),
            trace_level: value("trace_level"),
        }
    }

    /// Startup theme from the color-scheme preference.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_color_scheme(self.color_scheme.as_deref())
    }

    /// Catalog source this configuration points at.
    #[must_use]
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_file {
            Some(path) => Box::new(FileSource::new(infrastructure::resolve_catalog_path(path))),
            None => Box::new(EmbeddedSource),
        }
    }
}

/// Loads the configured catalog and builds the initial state.
///
/// A catalog that fails to load is logged and replaced by an empty one, so
/// the plugin still starts and shows the empty-list message.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let source = config.catalog_source();
    let (catalog, page_size) = load_catalog(source.as_ref()).unwrap_or_else(|e| {
        tracing::error!(source = %source.describe(), error = %e, "failed to load catalog, starting empty");
        (Catalog::empty(), DEFAULT_BOOKS_PER_PAGE)
    });

    tracing::info!(books = catalog.len(), page_size, "catalog loaded");
    AppState::new(catalog, page_size, config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::default().theme(), Theme::Day);
        assert_eq!(Config::default().catalog_source().describe(), "embedded demo catalog");
    }

    #[test]
    fn unknown_color_scheme_falls_back_to_day() {
        let config = Config::from_zellij(&map(&[("color_scheme", "sepia")]));
        assert_eq!(config.theme(), Theme::Day);

        let config = Config::from_zellij(&map(&[("color_scheme", " Dark ")]));
        assert_eq!(config.theme(), Theme::Night);
    }

    #[test]
    fn catalog_file_resolves_under_host() {
        let config = Config::from_zellij(&map(&[("catalog_file", "~/books.toml")]));
        assert_eq!(config.catalog_source().describe(), "file /host/books.toml");
    }

    #[test]
    fn unreadable_catalog_starts_empty() {
        let config = Config::from_zellij(&map(&[("catalog_file", "/nonexistent/books.json")]));
        let state = initialize(&config);
        assert!(state.catalog.is_empty());
        assert!(state.document.list.message_visible);
    }
}
