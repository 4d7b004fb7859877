//! Application state and view model computation.
//!
//! [`AppState`] owns the loaded catalog, the pagination over the current
//! matches, the last submitted search, and the [`Document`] whose slots the
//! controller writes into. Every operation here mutates the document the same
//! way the browser page would be mutated: list rows are appended, never
//! patched, and the "Show more" label is written once at startup.
//!
//! # State Components
//!
//! - **Catalog**: Immutable store loaded once at startup
//! - **Pagination**: Current matches plus how many pages of them are revealed
//! - **Criteria**: The last submitted search, restored when a draft is cancelled
//! - **Document**: Overlay flags, form drafts, list rows and the style root
//! - **Selection**: Highlighted row, mirrored into a [`BookPreview`] element
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a snapshot of this state into a
//! [`UIViewModel`] for one frame: a window of list rows around the selection,
//! title highlights for the submitted query, and whichever overlay has focus.
//!
//! # Example
//!
//! ```
//! use bookshelf::app::AppState;
//! use bookshelf::catalog::{Catalog, FilterCriteria};
//! use bookshelf::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::empty(), 36, Theme::Day);
//! state.submit_search(FilterCriteria::default());
//! assert!(state.document.list.message_visible);
//! ```

use crate::app::modes::Surface;
use crate::catalog::{filter, Catalog, FilterCriteria, Pagination};
use crate::domain::{Book, BookshelfError, Result};
use crate::ui::components::CHROME_ROWS;
use crate::ui::document::{Document, SearchForm, ShowMoreControl};
use crate::ui::helpers::{match_ranges, truncate};
use crate::ui::preview::{
    display_field, render_inline, BookPreview, ObservedAttributes, PreviewUnit, ATTR_AUTHOR_NAME,
    ATTR_IMAGE, ATTR_TITLE, UNKNOWN_TITLE,
};
use crate::ui::theme::{Palette, Theme};
use crate::ui::viewmodel::{
    DetailView, DisplayRow, EmptyState, FooterInfo, HeaderInfo, OverlayView, SearchView,
    SelectionCard, SettingsView, ShowMoreInfo, UIViewModel,
};

/// Message shown in the list when a search matches nothing.
pub const EMPTY_MESSAGE: &str = "No books match your search";

/// Central application state.
///
/// Mutated only by the event handler, one event at a time. Everything the
/// renderer needs is either stored here or derived on demand by
/// [`compute_viewmodel`](Self::compute_viewmodel).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog loaded at startup. Never mutated.
    pub catalog: Catalog,

    /// Current matches and how many pages of them are revealed.
    ///
    /// Replaced by `submit_search`, advanced in place by `show_more`.
    pub pagination: Pagination,

    /// Criteria of the last submitted search.
    pub criteria: FilterCriteria,

    /// Rendering surface.
    pub document: Document,

    /// Active theme.
    pub theme: Theme,

    /// Index of the highlighted row within the rendered list items.
    ///
    /// Reset to 0 on every search. Wraps around during navigation.
    pub selected_index: usize,

    /// Preview element bound to the highlighted row.
    pub selection_preview: BookPreview,
}

/// Renders a batch of books for the list, resolving author names.
fn preview_units(catalog: &Catalog, books: &[Book]) -> Vec<PreviewUnit> {
    books
        .iter()
        .map(|book| render_inline(book, catalog.author_name(&book.author).ok()))
        .collect()
}

impl AppState {
    /// Builds the initial state: every book matches and page 1 is rendered.
    ///
    /// The "Show more" label is written here from the full catalog and is not
    /// updated by later searches.
    ///
    /// # Parameters
    ///
    /// * `catalog` - Validated catalog, possibly empty
    /// * `page_size` - Books revealed per page; must be positive
    /// * `theme` - Startup theme, applied to the style root immediately
    ///
    /// # Example
    ///
    /// ```
    /// use bookshelf::app::{AppState, Surface};
    /// use bookshelf::catalog::Catalog;
    /// use bookshelf::ui::Theme;
    ///
    /// let state = AppState::new(Catalog::empty(), 36, Theme::Night);
    /// assert_eq!(state.document.list.show_more.label, "Show more (0)");
    /// assert!(state.document.list.show_more.disabled);
    /// assert_eq!(state.focused_surface(), Surface::List);
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog, page_size: usize, theme: Theme) -> Self {
        let _span = tracing::debug_span!("app_state_new",
            books = catalog.len(),
            page_size,
            theme = theme.name()
        ).entered();

        let pagination = Pagination::new(catalog.books().to_vec(), page_size);

        let mut document = Document::default();
        document.search_overlay.form = SearchForm::for_catalog(&catalog);
        document.settings_overlay.theme = theme;
        document.list.show_more = ShowMoreControl {
            label: format!("Show more ({})", pagination.remaining_count()),
            disabled: !pagination.has_more(),
        };
        document.list.items.append(preview_units(&catalog, pagination.current_slice()));
        document.list.message_visible = pagination.matches().is_empty();
        theme.apply(&mut document.style);

        let mut state = Self {
            catalog,
            pagination,
            criteria: FilterCriteria::default(),
            document,
            theme,
            selected_index: 0,
            selection_preview: BookPreview::new(),
        };
        state.selection_preview.connected();
        state.sync_selection_preview();

        tracing::debug!(
            rendered = state.document.list.items.len(),
            label = %state.document.list.show_more.label,
            "initial page rendered"
        );
        state
    }

    /// Runs a search: filter, reset pagination, and re-render the list.
    ///
    /// Closes the search overlay. Criteria are normalized first so blank
    /// selects behave like "any".
    ///
    /// # Steps
    ///
    /// 1. Filter the whole catalog with the normalized criteria
    /// 2. Reset pagination to page 1 over the new matches
    /// 3. Clear the list and render the first page
    /// 4. Disable "Show more" unless more matches remain
    /// 5. Show the empty message iff nothing matched
    ///
    /// The "Show more" label keeps its startup text.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span carrying the three criteria fields.
    pub fn submit_search(&mut self, criteria: FilterCriteria) {
        let criteria = criteria.normalized();
        let _span = tracing::debug_span!("submit_search",
            title = %criteria.title,
            author = %criteria.author,
            genre = %criteria.genre
        ).entered();

        let matches = filter::apply(self.catalog.books(), &criteria);
        self.pagination.reset(matches);

        let list = &mut self.document.list;
        list.items.clear();
        list.items.append(preview_units(&self.catalog, self.pagination.current_slice()));
        list.show_more.disabled = !self.pagination.has_more();
        list.message_visible = self.pagination.matches().is_empty();

        self.document.search_overlay.form.load(&criteria);
        self.document.search_overlay.open = false;
        self.criteria = criteria;

        self.selected_index = 0;
        self.sync_selection_preview();

        tracing::debug!(
            matches = self.pagination.matches().len(),
            rendered = self.document.list.items.len(),
            has_more = self.pagination.has_more(),
            "search submitted"
        );
    }

    /// Reveals the next page and appends its rows after the existing ones.
    ///
    /// Returns how many rows were appended.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Exhausted`] when nothing is left. The control
    /// is disabled and nothing else changes.
    ///
    /// # Example
    ///
    /// ```
    /// use bookshelf::app::AppState;
    /// use bookshelf::catalog::Catalog;
    /// use bookshelf::ui::Theme;
    /// use bookshelf::BookshelfError;
    ///
    /// let mut state = AppState::new(Catalog::empty(), 36, Theme::Day);
    /// assert!(matches!(state.show_more(), Err(BookshelfError::Exhausted)));
    /// assert!(state.document.list.show_more.disabled);
    /// ```
    pub fn show_more(&mut self) -> Result<usize> {
        let _span = tracing::debug_span!("show_more", page = self.pagination.page()).entered();

        let units = match self.pagination.advance() {
            Ok(revealed) => preview_units(&self.catalog, revealed),
            Err(e) => {
                self.document.list.show_more.disabled = true;
                return Err(e);
            }
        };

        let appended = units.len();
        self.document.list.items.append(units);
        self.document.list.show_more.disabled = !self.pagination.has_more();

        tracing::debug!(appended, total = self.document.list.items.len(), "rows appended");
        Ok(appended)
    }

    /// Fills the detail overlay for book `id` and opens it.
    ///
    /// The overlay shows the cover (also used as the blurred backdrop), the
    /// title, `"Author (Year)"` and the description. A missing author falls
    /// back to "Unknown Author".
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::NotFound`] for an unknown id; the overlay is
    /// left untouched.
    pub fn open_detail(&mut self, id: &str) -> Result<()> {
        let Some(book) = self.catalog.find_book_by_id(id) else {
            tracing::debug!(book_id = %id, "detail requested for unknown book");
            return Err(BookshelfError::NotFound {
                kind: crate::domain::EntityKind::Book,
                id: id.to_string(),
            });
        };

        let author = self.catalog.author_name_or_unknown(&book.author);
        let detail = &mut self.document.detail_overlay;
        detail.blur.clone_from(&book.image);
        detail.image.clone_from(&book.image);
        detail.title = display_field(Some(&book.title), UNKNOWN_TITLE).to_string();
        detail.subtitle = format!("{author} ({})", book.published_year());
        detail.description.clone_from(&book.description);
        detail.book_id = Some(book.id.clone());
        detail.open = true;

        tracing::debug!(book_id = %id, "detail opened");
        Ok(())
    }

    /// Closes the detail overlay. Its last contents stay in the document.
    pub fn close_detail(&mut self) {
        self.document.detail_overlay.open = false;
    }

    /// Opens the search overlay with the current draft.
    ///
    /// After a submit or cancel the draft equals the last submitted criteria.
    pub fn open_search(&mut self) {
        self.document.search_overlay.open = true;
    }

    /// Closes the search overlay, discarding the draft.
    ///
    /// The form is reloaded from the last submitted criteria and its focus
    /// returns to the title input. The list is left alone.
    ///
    /// # Example
    ///
    /// ```
    /// use bookshelf::app::AppState;
    /// use bookshelf::catalog::Catalog;
    /// use bookshelf::ui::Theme;
    ///
    /// let mut state = AppState::new(Catalog::empty(), 36, Theme::Day);
    /// state.open_search();
    /// state.document.search_overlay.form.title.push_str("dune");
    /// state.cancel_search();
    /// assert!(state.document.search_overlay.form.title.is_empty());
    /// assert!(!state.document.search_overlay.open);
    /// ```
    pub fn cancel_search(&mut self) {
        self.document.search_overlay.form.load(&self.criteria);
        self.document.search_overlay.open = false;
    }

    /// Opens the settings overlay with the active theme preselected.
    pub fn open_settings(&mut self) {
        self.document.settings_overlay.theme = self.theme;
        self.document.settings_overlay.open = true;
    }

    /// Closes the settings overlay, discarding the draft.
    pub fn cancel_settings(&mut self) {
        self.document.settings_overlay.theme = self.theme;
        self.document.settings_overlay.open = false;
    }

    /// Applies `theme` to the style root and closes the settings overlay.
    ///
    /// Writes both color variables, so every later frame resolves the new
    /// palette.
    pub fn submit_theme(&mut self, theme: Theme) {
        self.theme = theme;
        theme.apply(&mut self.document.style);
        self.document.settings_overlay.theme = theme;
        self.document.settings_overlay.open = false;
    }

    /// Surface that receives keyboard input.
    ///
    /// The overlays are independent flags; the topmost open one wins, in the
    /// order detail, settings, search, list.
    #[must_use]
    pub const fn focused_surface(&self) -> Surface {
        if self.document.detail_overlay.open {
            Surface::Detail
        } else if self.document.settings_overlay.open {
            Surface::Settings
        } else if self.document.search_overlay.open {
            Surface::Search
        } else {
            Surface::List
        }
    }

    /// Moves the highlight down one row, wrapping to the top.
    ///
    /// No-op when the list is empty. The selection preview follows the highlight.
    ///
    /// # Example
    ///
    /// ```
    /// # use bookshelf::app::AppState;
    /// # use bookshelf::catalog::Catalog;
    /// # use bookshelf::ui::Theme;
    /// # let mut state = AppState::new(Catalog::empty(), 36, Theme::Day);
    /// state.move_selection_down();
    /// assert_eq!(state.selected_index, 0);
    /// ```
    pub fn move_selection_down(&mut self) {
        let len = self.document.list.items.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
        self.sync_selection_preview();
    }

    /// Moves the highlight up one row, wrapping to the bottom.
    ///
    /// No-op when the list is empty.
    pub fn move_selection_up(&mut self) {
        let len = self.document.list.items.len();
        if len == 0 {
            return;
        }
        self.selected_index = self.selected_index.checked_sub(1).unwrap_or(len - 1);
        self.sync_selection_preview();
    }

    /// The highlighted row, if any rows are rendered.
    ///
    /// # Returns
    ///
    /// - `Some(&PreviewUnit)` for the highlighted list row
    /// - `None` when the list is empty
    #[must_use]
    pub fn selected_unit(&self) -> Option<&PreviewUnit> {
        self.document.list.items.get(self.selected_index)
    }

    /// Writes the highlighted row into the preview element's attributes.
    fn sync_selection_preview(&mut self) {
        let Some(unit) = self.document.list.items.get(self.selected_index).cloned() else {
            for name in [ATTR_TITLE, ATTR_AUTHOR_NAME, ATTR_IMAGE] {
                self.selection_preview.remove_attribute(name);
            }
            return;
        };

        self.selection_preview.set_attribute(ATTR_TITLE, unit.title);
        self.selection_preview.set_attribute(ATTR_AUTHOR_NAME, unit.author);
        self.selection_preview.set_attribute(ATTR_IMAGE, unit.image.src);
    }

    /// Computes the view model for a pane of `rows` by `cols` cells.
    ///
    /// The visible window of rows is centered on the selection and shifted to
    /// stay full near either end of the list.
    ///
    /// # Parameters
    ///
    /// * `rows` - Pane height in character cells
    /// * `cols` - Pane width in character cells
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract the fixed chrome (header, borders, show-more, card, footer)
    /// 2. Center the window on the selected row
    /// 3. Shift it back near the end of the list so it stays full
    /// 4. Report the selection relative to the window
    ///
    /// # Example
    ///
    /// ```
    /// # use bookshelf::app::AppState;
    /// # use bookshelf::catalog::Catalog;
    /// # use bookshelf::ui::Theme;
    /// # let state = AppState::new(Catalog::empty(), 36, Theme::Day);
    /// let vm = state.compute_viewmodel(24, 80);
    /// assert!(vm.rows.is_empty());
    /// assert!(vm.empty_state.is_some());
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let units = self.document.list.items.units();
        let available_rows = rows.saturating_sub(CHROME_ROWS);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(units.len());
        if visible_end - visible_start.min(visible_end) < available_rows && units.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        let visible_start = visible_start.min(visible_end);

        let display_rows = units[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, unit)| DisplayRow {
                highlight_ranges: match_ranges(&unit.title, &self.criteria.title),
                title: unit.title.clone(),
                author: unit.author.clone(),
                cover: Self::cover_text(unit),
                is_selected: visible_start + offset == self.selected_index,
            })
            .collect();

        UIViewModel {
            rows: display_rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            show_more: ShowMoreInfo {
                label: self.document.list.show_more.label.clone(),
                disabled: self.document.list.show_more.disabled,
            },
            empty_state: self.document.list.message_visible.then(|| EmptyState {
                message: EMPTY_MESSAGE.to_string(),
                subtitle: "Press / to change the search".to_string(),
            }),
            selection_card: self.compute_selection_card(cols),
            overlay: self.compute_overlay(),
            palette: Palette::resolve(&self.document.style),
        }
    }

    fn cover_text(unit: &PreviewUnit) -> String {
        if unit.image.src.is_empty() {
            format!("[{}]", unit.image.alt)
        } else {
            unit.image.src.clone()
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " Bookshelf ({} of {}) ",
                self.document.list.items.len(),
                self.pagination.matches().len()
            ),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focused_surface() {
            Surface::List => {
                "j/k or Ctrl+n/p: navigate  Enter: details  m: show more  /: search  s: settings  q: quit"
            }
            Surface::Search => "Tab: next field  ←/→: change  Enter: search  Esc: cancel",
            Surface::Settings => "←/→: choose theme  Enter: apply  Esc: cancel",
            Surface::Detail => "Esc/Enter/q: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_selection_card(&self, cols: usize) -> Option<SelectionCard> {
        self.selected_unit()?;
        let unit = self.selection_preview.shadow()?;
        Some(SelectionCard {
            title: truncate(&unit.title, cols),
            author: unit.author.clone(),
            cover: Self::cover_text(unit),
        })
    }

    fn compute_overlay(&self) -> Option<OverlayView> {
        let document = &self.document;
        match self.focused_surface() {
            Surface::List => None,
            Surface::Search => {
                let form = &document.search_overlay.form;
                Some(OverlayView::Search(SearchView {
                    title: form.title.clone(),
                    author: form.authors.label().to_string(),
                    genre: form.genres.label().to_string(),
                    focus: form.focus,
                }))
            }
            Surface::Settings => Some(OverlayView::Settings(SettingsView {
                theme: document.settings_overlay.theme,
            })),
            Surface::Detail => {
                let detail = &document.detail_overlay;
                Some(OverlayView::Detail(DetailView {
                    blur: detail.blur.clone(),
                    image: detail.image.clone(),
                    title: detail.title.clone(),
                    subtitle: detail.subtitle.clone(),
                    description: detail.description.clone(),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ANY;
    use crate::domain::{Author, Genre};
    use chrono::NaiveDate;

    fn book(id: &str, title: &str, author: &str, genre: &str) -> Book {
        Book {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            image: format!("https://covers/{id}.jpg"),
            genres: vec![genre.into()],
            published: NaiveDate::from_ymd_opt(1869, 1, 1).unwrap(),
            description: format!("About {title}."),
        }
    }

    fn catalog(count: usize) -> Catalog {
        let books = (0..count)
            .map(|i| {
                let author = if i % 2 == 0 { "a1" } else { "a2" };
                book(&format!("b{i}"), &format!("Book {i}"), author, "g1")
            })
            .collect();
        Catalog::initialize(
            books,
            vec![
                Author { id: "a1".into(), name: "Leo Tolstoy".into() },
                Author { id: "a2".into(), name: "Jane Austen".into() },
            ],
            vec![Genre { id: "g1".into(), name: "Classics".into() }],
        )
        .unwrap()
    }

    #[test]
    fn startup_renders_first_page_and_label() {
        let state = AppState::new(catalog(120), 36, Theme::Day);
        assert_eq!(state.document.list.items.len(), 36);
        assert_eq!(state.document.list.show_more.label, "Show more (84)");
        assert!(!state.document.list.show_more.disabled);
        assert!(!state.document.list.message_visible);
        assert_eq!(state.focused_surface(), Surface::List);
    }

    #[test]
    fn small_catalog_starts_with_disabled_control() {
        let state = AppState::new(catalog(10), 36, Theme::Day);
        assert_eq!(state.document.list.items.len(), 10);
        assert_eq!(state.document.list.show_more.label, "Show more (0)");
        assert!(state.document.list.show_more.disabled);
    }

    #[test]
    fn label_is_not_recomputed_after_search() {
        let mut state = AppState::new(catalog(120), 36, Theme::Day);
        state.submit_search(FilterCriteria::new("", "a1", ANY));
        assert_eq!(state.pagination.matches().len(), 60);
        assert_eq!(state.document.list.show_more.label, "Show more (84)");
    }

    #[test]
    fn show_more_appends_until_exhausted() {
        let mut state = AppState::new(catalog(80), 36, Theme::Day);
        assert_eq!(state.show_more().unwrap(), 36);
        assert_eq!(state.document.list.items.len(), 72);
        assert!(!state.document.list.show_more.disabled);

        assert_eq!(state.show_more().unwrap(), 8);
        assert_eq!(state.document.list.items.len(), 80);
        assert!(state.document.list.show_more.disabled);

        assert!(matches!(state.show_more(), Err(BookshelfError::Exhausted)));
        assert_eq!(state.document.list.items.len(), 80);
        assert_eq!(state.pagination.page(), 3);
    }

    #[test]
    fn search_replaces_rows_and_closes_overlay() {
        let mut state = AppState::new(catalog(80), 36, Theme::Day);
        state.show_more().unwrap();
        state.open_search();
        state.move_selection_down();

        state.submit_search(FilterCriteria::new("book 7", ANY, ANY));
        let titles: Vec<&str> = state.document.list.items.units().iter().map(|u| u.title.as_str()).collect();
        assert_eq!(titles, vec!["Book 7", "Book 70", "Book 71", "Book 72", "Book 73", "Book 74", "Book 75", "Book 76", "Book 77", "Book 78", "Book 79"]);
        assert_eq!(state.pagination.page(), 1);
        assert!(!state.document.search_overlay.open);
        assert!(state.document.list.show_more.disabled);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn empty_message_tracks_match_count() {
        let mut state = AppState::new(catalog(5), 36, Theme::Day);
        state.submit_search(FilterCriteria::new("zzz", ANY, ANY));
        assert!(state.document.list.message_visible);
        assert!(state.document.list.items.is_empty());
        assert!(state.selected_unit().is_none());

        state.submit_search(FilterCriteria::default());
        assert!(!state.document.list.message_visible);
        assert_eq!(state.document.list.items.len(), 5);
    }

    #[test]
    fn detail_shows_author_and_year() {
        let mut state = AppState::new(catalog(3), 36, Theme::Day);
        state.open_detail("b1").unwrap();
        let detail = &state.document.detail_overlay;
        assert!(detail.open);
        assert_eq!(detail.title, "Book 1");
        assert_eq!(detail.subtitle, "Jane Austen (1869)");
        assert_eq!(detail.image, "https://covers/b1.jpg");
        assert_eq!(detail.blur, detail.image);
        assert_eq!(state.focused_surface(), Surface::Detail);

        state.close_detail();
        assert_eq!(state.focused_surface(), Surface::List);
    }

    #[test]
    fn unknown_detail_id_changes_nothing() {
        let mut state = AppState::new(catalog(3), 36, Theme::Day);
        let before = state.document.detail_overlay.clone();
        assert!(state.open_detail("nope").is_err());
        assert_eq!(state.document.detail_overlay, before);
        assert!(!state.document.search_overlay.open);
        assert!(!state.document.settings_overlay.open);
    }

    #[test]
    fn cancel_discards_drafts() {
        let mut state = AppState::new(catalog(3), 36, Theme::Day);
        state.open_search();
        state.document.search_overlay.form.title = "draft".into();
        state.cancel_search();
        assert!(state.document.search_overlay.form.title.is_empty());

        state.open_settings();
        state.document.settings_overlay.theme = Theme::Night;
        state.cancel_settings();
        assert_eq!(state.document.settings_overlay.theme, Theme::Day);
        assert_eq!(state.theme, Theme::Day);
    }

    #[test]
    fn selection_wraps_and_drives_preview() {
        let mut state = AppState::new(catalog(3), 36, Theme::Day);
        assert_eq!(state.selection_preview.shadow().unwrap().title, "Book 0");

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        assert_eq!(state.selection_preview.shadow().unwrap().title, "Book 2");
        assert_eq!(state.selection_preview.shadow().unwrap().author, "Leo Tolstoy");

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = AppState::new(catalog(30), 36, Theme::Day);
        for _ in 0..20 {
            state.move_selection_down();
        }
        let vm = state.compute_viewmodel(CHROME_ROWS + 10, 80);
        assert_eq!(vm.rows.len(), 10);
        assert!(vm.rows[vm.selected_index].is_selected);
        assert_eq!(vm.rows[vm.selected_index].title, "Book 20");

        let vm = state.compute_viewmodel(3, 80);
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn viewmodel_highlights_submitted_title() {
        let mut state = AppState::new(catalog(12), 36, Theme::Day);
        state.submit_search(FilterCriteria::new("OK 1", ANY, ANY));
        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.rows[0].title, "Book 1");
        assert_eq!(vm.rows[0].highlight_ranges, vec![(2, 6)]);
        assert!(vm.empty_state.is_none());
        assert!(vm.overlay.is_none());
    }
}
