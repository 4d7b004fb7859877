//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold no
//! behavior, only display-ready data: truncated text, title match ranges,
//! resolved colors and which overlay (if any) sits on top.

use crate::app::modes::SearchField;
use crate::ui::theme::{Palette, Theme};

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Visible window of list rows.
    pub rows: Vec<DisplayRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// The "Show more" control beneath the list.
    pub show_more: ShowMoreInfo,

    /// Shown instead of rows when the last search matched nothing.
    pub empty_state: Option<EmptyState>,

    /// Preview card for the selected row.
    pub selection_card: Option<SelectionCard>,

    /// Topmost open overlay.
    pub overlay: Option<OverlayView>,

    /// Colors resolved from the style root.
    pub palette: Palette,
}

/// One rendered preview in the list.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    pub title: String,
    pub author: String,
    /// Cover image URL, or its alt text when there is none.
    pub cover: String,
    pub is_selected: bool,
    /// Character ranges of `title` matching the submitted title query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding hints for the focused surface.
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreInfo {
    pub label: String,
    pub disabled: bool,
}

/// Empty list message.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Card summarizing the selected book above the footer.
#[derive(Debug, Clone)]
pub struct SelectionCard {
    pub title: String,
    pub author: String,
    pub cover: String,
}

/// The overlay drawn over the list.
#[derive(Debug, Clone)]
pub enum OverlayView {
    Search(SearchView),
    Settings(SettingsView),
    Detail(DetailView),
}

/// Search form contents.
#[derive(Debug, Clone)]
pub struct SearchView {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub focus: SearchField,
}

/// Settings form contents.
#[derive(Debug, Clone)]
pub struct SettingsView {
    /// Theme currently chosen in the select.
    pub theme: Theme,
}

/// Detail overlay contents.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub blur: String,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}
