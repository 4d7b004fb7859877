//! Event handling and state transitions.
//!
//! The handler follows a unidirectional flow:
//! 1. The plugin shim maps host input to an [`Event`]
//! 2. [`handle_event`] applies it to [`AppState`]
//! 3. It returns whether to re-render plus any [`Action`]s for the host
//!
//! Events come in two layers. The named operations (`SubmitSearch`,
//! `ShowMore`, `OpenDetail`, ...) carry their own data and are what tests and
//! integrations drive. The keyboard layer (`Confirm`, `Dismiss`, `Char`, ...)
//! is routed by the focused surface and resolves to one of those operations.
//!
//! # Example
//!
//! ```
//! use bookshelf::app::{handle_event, AppState, Event};
//! use bookshelf::catalog::Catalog;
//! use bookshelf::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::empty(), 36, Theme::Day);
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenSearch)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

use crate::app::modes::{SearchField, Surface};
use crate::app::{Action, AppState};
use crate::catalog::FilterCriteria;
use crate::domain::error::{BookshelfError, Result};
use crate::ui::theme::Theme;

/// Events produced by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the highlight down one row (wraps to top). List only.
    KeyDown,
    /// Moves the highlight up one row (wraps to bottom). List only.
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Opens the search overlay.
    OpenSearch,
    /// Closes the search overlay and discards the draft.
    CancelSearch,
    /// Runs a search with the given criteria.
    SubmitSearch(FilterCriteria),

    /// Opens the settings overlay.
    OpenSettings,
    /// Closes the settings overlay and discards the draft.
    CancelSettings,
    /// Applies a theme.
    SubmitTheme(Theme),

    /// Reveals the next page of matches.
    ShowMore,
    /// Opens the detail overlay for a book id.
    OpenDetail(String),
    /// Closes the detail overlay.
    CloseDetail,

    /// Types a character into the focused text input.
    Char(char),
    /// Deletes the last character of the focused text input.
    Backspace,
    /// Moves focus to the next search field.
    NextField,
    /// Picks the previous option of the focused select.
    PrevOption,
    /// Picks the next option of the focused select.
    NextOption,
    /// Enter on the focused surface.
    Confirm,
    /// Escape on the focused surface.
    Dismiss,
}

/// Applies `event` to `state`.
///
/// Main entry point for event processing. Named operations call straight into
/// [`AppState`]; keyboard events are first resolved against the focused
/// [`Surface`] and then handled as the operation they stand for.
///
/// # Parameters
///
/// * `state` - Application state to mutate
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of:
/// - `bool`: Whether the UI should re-render
/// - `Vec<Action>`: Host actions to run (hide the pane, rename it)
///
/// # Tracing
///
/// Creates a debug-level span carrying the event.
///
/// # Errors
///
/// Recoverable conditions (unknown detail id, nothing more to show) are
/// logged and swallowed here, so errors only surface from unexpected state.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown | Event::KeyUp => {
            if state.focused_surface() != Surface::List {
                tracing::debug!("selection move ignored behind an overlay");
                return Ok((false, vec![]));
            }
            if *event == Event::KeyDown {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenSearch => {
            state.open_search();
            Ok((true, vec![]))
        }
        Event::CancelSearch => {
            state.cancel_search();
            Ok((true, vec![]))
        }
        Event::SubmitSearch(criteria) => {
            state.submit_search(criteria.clone());
            Ok((true, vec![pane_title_action(state)]))
        }
        Event::OpenSettings => {
            state.open_settings();
            Ok((true, vec![]))
        }
        Event::CancelSettings => {
            state.cancel_settings();
            Ok((true, vec![]))
        }
        Event::SubmitTheme(theme) => {
            state.submit_theme(*theme);
            Ok((true, vec![]))
        }
        Event::ShowMore => match state.show_more() {
            Ok(_) => Ok((true, vec![pane_title_action(state)])),
            Err(BookshelfError::Exhausted) => {
                tracing::debug!("show more ignored, nothing left");
                Ok((true, vec![]))
            }
            Err(e) => Err(e),
        },
        Event::OpenDetail(id) => match state.open_detail(id) {
            Ok(()) => Ok((true, vec![])),
            Err(BookshelfError::NotFound { .. }) => Ok((false, vec![])),
            Err(e) => Err(e),
        },
        Event::CloseDetail => {
            state.close_detail();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.focused_surface() != Surface::Search {
                return Ok((false, vec![]));
            }
            let form = &mut state.document.search_overlay.form;
            if form.focus != SearchField::Title {
                return Ok((false, vec![]));
            }
            form.title.push(*c);
            tracing::trace!(query = %form.title, char = %c, "title input updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.focused_surface() != Surface::Search {
                return Ok((false, vec![]));
            }
            let form = &mut state.document.search_overlay.form;
            if form.focus != SearchField::Title {
                return Ok((false, vec![]));
            }
            form.title.pop();
            Ok((true, vec![]))
        }
        Event::NextField => {
            if state.focused_surface() != Surface::Search {
                return Ok((false, vec![]));
            }
            let form = &mut state.document.search_overlay.form;
            form.focus = form.focus.next();
            Ok((true, vec![]))
        }
        Event::PrevOption | Event::NextOption => {
            let forward = *event == Event::NextOption;
            match state.focused_surface() {
                Surface::Search => {
                    let form = &mut state.document.search_overlay.form;
                    let select = match form.focus {
                        SearchField::Title => return Ok((false, vec![])),
                        SearchField::Author => &mut form.authors,
                        SearchField::Genre => &mut form.genres,
                    };
                    if forward {
                        select.next();
                    } else {
                        select.previous();
                    }
                    Ok((true, vec![]))
                }
                Surface::Settings => {
                    let draft = &mut state.document.settings_overlay.theme;
                    *draft = draft.toggled();
                    Ok((true, vec![]))
                }
                Surface::List | Surface::Detail => Ok((false, vec![])),
            }
        }
        Event::Confirm => {
            let routed = match state.focused_surface() {
                Surface::List => match state.selected_unit().and_then(|u| u.id.clone()) {
                    Some(id) => Event::OpenDetail(id),
                    None => {
                        tracing::debug!("no row selected");
                        return Ok((false, vec![]));
                    }
                },
                Surface::Search => Event::SubmitSearch(state.document.search_overlay.form.criteria()),
                Surface::Settings => Event::SubmitTheme(state.document.settings_overlay.theme),
                Surface::Detail => Event::CloseDetail,
            };
            handle_event(state, &routed)
        }
        Event::Dismiss => {
            let routed = match state.focused_surface() {
                Surface::List => Event::CloseFocus,
                Surface::Search => Event::CancelSearch,
                Surface::Settings => Event::CancelSettings,
                Surface::Detail => Event::CloseDetail,
            };
            handle_event(state, &routed)
        }
    }
}

/// Pane title reflecting how much of the current matches is on screen.
fn pane_title_action(state: &AppState) -> Action {
    Action::RenamePane {
        title: format!(
            "Bookshelf ({}/{})",
            state.document.list.items.len(),
            state.pagination.matches().len()
        ),
    }
}
