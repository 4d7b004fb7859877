//! The rendering surface: named attachment points the controller writes into.
//!
//! [`Document`] mirrors the logical slots of the browser page:
//!
//! - the search overlay with its form (title input, author and genre selects)
//! - the settings overlay with its theme select
//! - the list container with its items area, "Show more" control and empty message
//! - the detail overlay
//! - the style root holding the theme color variables
//!
//! Triggers, cancel buttons and form submission have no slot of their own:
//! they are key presses the plugin shim maps to [`Event`](crate::app::Event)s.
//! The controller only mutates these slots; the renderer decides how each one
//! is painted in the terminal.
//!
//! # Example
//!
//! ```
//! use bookshelf::ui::Document;
//!
//! let document = Document::default();
//! assert!(!document.search_overlay.open);
//! assert!(document.list.items.is_empty());
//! assert_eq!(document.search_overlay.form.authors.value(), "any");
//! ```

use crate::app::modes::SearchField;
use crate::catalog::{Catalog, FilterCriteria, ANY};
use crate::ui::preview::PreviewUnit;
use crate::ui::theme::{StyleRoot, Theme};

/// Label of the leading author option.
pub const ALL_AUTHORS: &str = "All Authors";

/// Label of the leading genre option.
pub const ALL_GENRES: &str = "All Genres";

/// Root of the rendering surface.
///
/// Every overlay starts closed and the list starts empty; `AppState::new`
/// fills in the first page.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Root style properties holding the theme color variables.
    pub style: StyleRoot,
    pub search_overlay: SearchOverlay,
    pub settings_overlay: SettingsOverlay,
    pub list: ListContainer,
    pub detail_overlay: DetailOverlay,
}

/// List container: rendered items, "Show more" control and empty message.
#[derive(Debug, Clone, Default)]
pub struct ListContainer {
    pub items: ListItems,
    pub show_more: ShowMoreControl,
    /// Whether the "no results" message is shown.
    ///
    /// True exactly when the last search matched nothing.
    pub message_visible: bool,
}

/// Items area of the list. Rows are appended, never patched in place.
///
/// # Example
///
/// ```
/// use bookshelf::ui::document::ListItems;
/// use bookshelf::ui::preview::BookPreview;
/// use bookshelf::ui::ObservedAttributes;
///
/// let mut element = BookPreview::new();
/// element.connected();
/// let unit = element.shadow().cloned().into_iter();
///
/// let mut items = ListItems::default();
/// items.append(unit);
/// assert_eq!(items.len(), 1);
/// items.clear();
/// assert!(items.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItems {
    units: Vec<PreviewUnit>,
}

impl ListItems {
    /// Appends a batch of rendered units after the existing ones.
    ///
    /// Existing rows keep their positions, so a "Show more" never moves the
    /// highlighted row.
    pub fn append(&mut self, units: impl IntoIterator<Item = PreviewUnit>) {
        self.units.extend(units);
    }

    /// Removes every row. Used when a new search replaces the list.
    pub fn clear(&mut self) {
        self.units.clear();
    }

    /// All rendered rows in display order.
    #[must_use]
    pub fn units(&self) -> &[PreviewUnit] {
        &self.units
    }

    /// Row at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PreviewUnit> {
        self.units.get(index)
    }

    /// Number of rendered rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// The "Show more" button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowMoreControl {
    /// `"Show more (N)"`, written once at startup.
    pub label: String,
    /// Set when the current matches are fully revealed.
    pub disabled: bool,
}

/// One option of a select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value: an author or genre id, or `"any"`.
    pub value: String,
    /// Display text.
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select input with a current choice.
///
/// Always holds at least one option, so [`value`](Self::value) is always
/// defined. Cycling wraps at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    options: Vec<SelectOption>,
    selected: usize,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::new(ANY, "Any")],
            selected: 0,
        }
    }
}

impl Select {
    /// Builds a select whose first option is `any` with the given label.
    fn with_any(any_label: &str, entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut options = vec![SelectOption::new(ANY, any_label)];
        options.extend(entries.into_iter().map(|(value, label)| SelectOption::new(value, label)));
        Self { options, selected: 0 }
    }

    /// Every option in display order, `any` first.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Value of the current choice.
    #[must_use]
    pub fn value(&self) -> &str {
        self.options.get(self.selected).map_or(ANY, |o| o.value.as_str())
    }

    /// Label of the current choice.
    #[must_use]
    pub fn label(&self) -> &str {
        self.options.get(self.selected).map_or("", |o| o.label.as_str())
    }

    /// Chooses the option with `value`, falling back to the first option.
    pub fn select_value(&mut self, value: &str) {
        self.selected = self.options.iter().position(|o| o.value == value).unwrap_or(0);
    }

    /// Moves to the next option, wrapping to the first.
    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// Moves to the previous option, wrapping to the last.
    pub fn previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.options.len() - 1);
        }
    }
}

/// Search form: title input plus author and genre selects.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    /// Title input text, matched as a case-insensitive substring.
    pub title: String,
    pub authors: Select,
    pub genres: Select,
    /// Field receiving typed input and option cycling.
    pub focus: SearchField,
}

impl SearchForm {
    /// Builds the form with one option per catalog author and genre.
    ///
    /// Options follow catalog load order, after a leading "All Authors" /
    /// "All Genres" option.
    ///
    /// # Example
    ///
    /// ```
    /// use bookshelf::catalog::Catalog;
    /// use bookshelf::domain::Author;
    /// use bookshelf::ui::document::SearchForm;
    ///
    /// let catalog = Catalog::initialize(
    ///     vec![],
    ///     vec![Author { id: "a1".into(), name: "Jules Verne".into() }],
    ///     vec![],
    /// )?;
    /// let form = SearchForm::for_catalog(&catalog);
    /// let labels: Vec<&str> = form.authors.options().iter().map(|o| o.label.as_str()).collect();
    /// assert_eq!(labels, ["All Authors", "Jules Verne"]);
    /// # Ok::<(), bookshelf::BookshelfError>(())
    /// ```
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            title: String::new(),
            authors: Select::with_any(
                ALL_AUTHORS,
                catalog.authors().iter().map(|a| (a.id.clone(), a.name.clone())),
            ),
            genres: Select::with_any(
                ALL_GENRES,
                catalog.genres().iter().map(|g| (g.id.clone(), g.name.clone())),
            ),
            focus: SearchField::Title,
        }
    }

    /// Current form values as filter criteria.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.title.clone(), self.authors.value(), self.genres.value())
    }

    /// Resets every field to `criteria`, discarding in-progress input.
    ///
    /// Unknown author or genre ids fall back to the `any` option. Focus
    /// returns to the title input.
    pub fn load(&mut self, criteria: &FilterCriteria) {
        self.title.clone_from(&criteria.title);
        self.authors.select_value(&criteria.author);
        self.genres.select_value(&criteria.genre);
        self.focus = SearchField::Title;
    }
}

/// Search overlay slot.
#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    pub open: bool,
    /// Draft criteria; reloaded from the last submit on cancel.
    pub form: SearchForm,
}

/// Settings overlay slot with its theme select.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverlay {
    pub open: bool,
    /// Draft theme; only applied on submit.
    pub theme: Theme,
}

/// Detail overlay slot.
///
/// Filled by `AppState::open_detail`. Closing keeps the contents, which are
/// overwritten by the next open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailOverlay {
    pub open: bool,
    /// Background image, painted blurred.
    pub blur: String,
    pub image: String,
    pub title: String,
    /// `"Author (Year)"`.
    pub subtitle: String,
    pub description: String,
    /// Id of the book being shown.
    pub book_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Genre};

    fn catalog() -> Catalog {
        Catalog::initialize(
            vec![],
            vec![
                Author { id: "a1".into(), name: "Jane Austen".into() },
                Author { id: "a2".into(), name: "Leo Tolstoy".into() },
            ],
            vec![Genre { id: "g1".into(), name: "Classics".into() }],
        )
        .unwrap()
    }

    #[test]
    fn form_options_lead_with_any() {
        let form = SearchForm::for_catalog(&catalog());
        assert_eq!(form.authors.options()[0].value, ANY);
        assert_eq!(form.authors.options()[0].label, ALL_AUTHORS);
        assert_eq!(form.authors.options().len(), 3);
        assert_eq!(form.genres.options()[0].label, ALL_GENRES);
        assert_eq!(form.criteria(), FilterCriteria::default());
    }

    #[test]
    fn selects_cycle_in_both_directions() {
        let mut form = SearchForm::for_catalog(&catalog());
        form.authors.previous();
        assert_eq!(form.authors.value(), "a2");
        form.authors.next();
        assert_eq!(form.authors.value(), ANY);
        form.authors.next();
        assert_eq!(form.authors.label(), "Jane Austen");
    }

    #[test]
    fn load_discards_draft_input() {
        let mut form = SearchForm::for_catalog(&catalog());
        form.title = "half typed".into();
        form.authors.next();
        form.focus = SearchField::Genre;

        form.load(&FilterCriteria::new("war", ANY, "g1"));
        assert_eq!(form.criteria(), FilterCriteria::new("war", ANY, "g1"));
        assert_eq!(form.focus, SearchField::Title);

        form.load(&FilterCriteria::new("", "unknown-id", ANY));
        assert_eq!(form.authors.value(), ANY);
    }

    #[test]
    fn list_items_append_cumulatively() {
        let mut items = ListItems::default();
        let unit = |id: &str| PreviewUnit {
            id: Some(id.into()),
            image: crate::ui::preview::CoverImage { src: String::new(), alt: String::new() },
            title: id.into(),
            author: String::new(),
        };
        items.append(vec![unit("1"), unit("2")]);
        items.append(vec![unit("3")]);
        assert_eq!(items.len(), 3);
        assert_eq!(items.get(2).and_then(|u| u.id.as_deref()), Some("3"));
        items.clear();
        assert!(items.is_empty());
    }
}
