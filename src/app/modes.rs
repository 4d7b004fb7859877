//! Focus state types for the application.
//!
//! The three overlays (search, settings, detail) open and close independently.
//! Keyboard input still has to go somewhere, so [`Surface`] names the topmost
//! open surface: detail above settings above search above the list.
//!
//! # Example
//!
//! ```
//! use bookshelf::app::modes::{SearchField, Surface};
//!
//! let surface = Surface::Search;
//! assert_ne!(surface, Surface::List);
//! assert_eq!(SearchField::Title.next(), SearchField::Author);
//! ```

/// Surface currently receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The book list with the "Show more" control.
    ///
    /// Available keybindings: j/k (navigate), enter (details), m (show more),
    /// / (search), s (settings), q (quit).
    List,

    /// The search overlay form.
    ///
    /// Typing edits the title, tab moves between fields, left/right cycle the
    /// author and genre selects, enter submits, esc cancels.
    Search,

    /// The settings overlay form.
    ///
    /// Left/right switch the theme, enter applies, esc cancels.
    Settings,

    /// The detail overlay for one book. Esc, enter or q close it.
    Detail,
}

/// Field of the search form that has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    /// Free-text title input.
    #[default]
    Title,
    /// Author select.
    Author,
    /// Genre select.
    Genre,
}

impl SearchField {
    /// Next field in tab order, wrapping back to the title.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }
}
