//! Side effects the plugin shim executes against the host.
//!
//! The event handler returns a `Vec<Action>` after each event so that state
//! transitions stay testable without a running host.

/// Commands executed by the plugin runtime.
///
/// # Example
///
/// ```
/// use bookshelf::app::{handle_event, Action, AppState, Event};
/// use bookshelf::catalog::Catalog;
/// use bookshelf::ui::Theme;
///
/// let mut state = AppState::new(Catalog::empty(), 36, Theme::Day);
/// let (_, actions) = handle_event(&mut state, &Event::CloseFocus)?;
/// assert_eq!(actions, vec![Action::CloseFocus]);
/// # Ok::<(), bookshelf::BookshelfError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Produced by `q` or `Esc` on the list. State is kept, so the pane
    /// reopens where it was left.
    CloseFocus,

    /// Retitles the plugin pane with the shown/matched counts.
    ///
    /// Produced after a search and after each successful "Show more". Needs the
    /// `ChangeApplicationState` permission; without it the host ignores it.
    RenamePane {
        /// New pane title.
        title: String,
    },
}
