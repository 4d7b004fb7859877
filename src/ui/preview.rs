//! Preview renderer: the display unit for one book.
//!
//! A preview shows a cover image, the title and the author name, and carries the
//! book id so a later "click" can find the book again. It is produced on two
//! surfaces that must stay behaviorally identical:
//!
//! - [`render_inline`] builds a unit straight from a [`Book`] for appending into
//!   the list container.
//! - [`BookPreview`] is a self-contained element driven by the declarative
//!   attributes `title`, `author-name` and `image`. It re-renders whenever one of
//!   them changes after it has been connected.
//!
//! Both surfaces resolve missing or empty values through [`display_field`], so
//! they agree on the fallbacks:
//!
//! | Field      | Fallback          |
//! |------------|-------------------|
//! | title      | `Unknown Title`   |
//! | author     | `Unknown Author`  |
//! | image alt  | `Book cover`      |
//!
//! The image alt text is the title when one is present.

use crate::catalog::UNKNOWN_AUTHOR;
use crate::domain::Book;
use std::collections::BTreeMap;

/// Title shown when a book has none.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Image alt text when there is no title to describe the cover.
pub const COVER_ALT: &str = "Book cover";

/// Observed attribute carrying the book title.
pub const ATTR_TITLE: &str = "title";
/// Observed attribute carrying the resolved author name.
pub const ATTR_AUTHOR_NAME: &str = "author-name";
/// Observed attribute carrying the cover URL.
pub const ATTR_IMAGE: &str = "image";

/// Returns `value`, or `fallback` when it is missing or empty.
///
/// ```
/// use bookshelf::ui::preview::display_field;
///
/// assert_eq!(display_field(Some("Emma"), "Unknown Title"), "Emma");
/// assert_eq!(display_field(Some(""), "Unknown Title"), "Unknown Title");
/// assert_eq!(display_field(None, "Unknown Title"), "Unknown Title");
/// ```
#[must_use]
pub fn display_field<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Cover image element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    /// Image URL; empty when the book has none.
    pub src: String,
    /// Title of the book, or [`COVER_ALT`] without one.
    pub alt: String,
}

/// Rendered preview of one book.
///
/// Plain data: the list keeps a `Vec` of these and the renderer paints them as
/// rows. Both preview surfaces produce identical units for identical inputs,
/// except that the element carries no `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewUnit {
    /// Identity tag used to look the book up on selection.
    pub id: Option<String>,
    pub image: CoverImage,
    pub title: String,
    pub author: String,
}

fn build_unit(id: Option<&str>, title: Option<&str>, author: Option<&str>, image: Option<&str>) -> PreviewUnit {
    PreviewUnit {
        id: id.map(ToString::to_string),
        image: CoverImage {
            src: image.unwrap_or_default().to_string(),
            alt: display_field(title, COVER_ALT).to_string(),
        },
        title: display_field(title, UNKNOWN_TITLE).to_string(),
        author: display_field(author, UNKNOWN_AUTHOR).to_string(),
    }
}

/// Renders a book for the inline list surface.
///
/// # Parameters
///
/// * `book` - Book to render; its id becomes the unit's identity tag
/// * `author_name` - Resolved author display name, or `None` when the lookup missed
///
/// # Returns
///
/// A [`PreviewUnit`] with every empty field replaced by its fallback.
///
/// # Example
///
/// ```
/// use bookshelf::domain::Book;
/// use bookshelf::ui::preview::render_inline;
/// use chrono::NaiveDate;
///
/// let book = Book {
///     id: "b7".into(),
///     title: String::new(),
///     author: "a9".into(),
///     image: "cover.jpg".into(),
///     genres: vec!["g1".into()],
///     published: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
///     description: String::new(),
/// };
/// let unit = render_inline(&book, None);
/// assert_eq!(unit.id.as_deref(), Some("b7"));
/// assert_eq!(unit.title, "Unknown Title");
/// assert_eq!(unit.author, "Unknown Author");
/// assert_eq!(unit.image.alt, "Book cover");
/// ```
#[must_use]
pub fn render_inline(book: &Book, author_name: Option<&str>) -> PreviewUnit {
    build_unit(
        Some(&book.id),
        Some(&book.title),
        author_name,
        Some(&book.image),
    )
}

/// Element lifecycle driven by observed attributes.
///
/// The host calls [`connected`](Self::connected) once the element is attached and
/// [`attribute_changed`](Self::attribute_changed) for every change to an observed
/// attribute. Changes before connection are recorded but not rendered.
pub trait ObservedAttributes {
    /// Attribute names whose changes trigger `attribute_changed`.
    fn observed_attributes() -> &'static [&'static str]
    where
        Self: Sized;

    /// Called after an observed attribute changed value.
    ///
    /// # Parameters
    ///
    /// * `name` - Attribute name, one of [`observed_attributes`](Self::observed_attributes)
    /// * `old` - Previous value, `None` if it was unset
    /// * `new` - New value, `None` if it was removed
    fn attribute_changed(&mut self, name: &str, old: Option<&str>, new: Option<&str>);

    /// Called once the element is attached. Performs the first render.
    fn connected(&mut self);

    /// Rebuilds the element's rendered subtree from its current attributes.
    fn render(&mut self);
}

/// Attribute-driven preview element.
///
/// # Example
///
/// ```
/// use bookshelf::ui::preview::{BookPreview, ObservedAttributes};
///
/// let mut element = BookPreview::new();
/// element.connected();
/// let unit = element.shadow().unwrap();
/// assert_eq!(unit.title, "Unknown Title");
/// assert_eq!(unit.author, "Unknown Author");
/// assert_eq!(unit.image.alt, "Book cover");
///
/// element.set_attribute("title", "Dracula");
/// assert_eq!(element.shadow().unwrap().title, "Dracula");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BookPreview {
    attributes: BTreeMap<String, String>,
    is_connected: bool,
    shadow: Option<PreviewUnit>,
    render_count: usize,
}

impl BookPreview {
    /// Creates a detached element with no attributes and nothing rendered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, notifying the element if it is observed and changed.
    ///
    /// Setting the same value again does not re-render.
    ///
    /// # Example
    ///
    /// ```
    /// use bookshelf::ui::preview::{BookPreview, ObservedAttributes};
    ///
    /// let mut element = BookPreview::new();
    /// element.connected();
    /// element.set_attribute("image", "dracula.jpg");
    /// element.set_attribute("image", "dracula.jpg");
    /// assert_eq!(element.render_count(), 2);
    /// ```
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let old = self.attributes.insert(name.to_string(), value.clone());
        if old.as_deref() != Some(value.as_str()) && Self::observed_attributes().contains(&name) {
            self.attribute_changed(name, old.as_deref(), Some(&value));
        }
    }

    /// Removes an attribute, notifying the element if it was observed and set.
    ///
    /// The next render falls back to that field's default text.
    pub fn remove_attribute(&mut self, name: &str) {
        if let Some(old) = self.attributes.remove(name) {
            if Self::observed_attributes().contains(&name) {
                self.attribute_changed(name, Some(&old), None);
            }
        }
    }

    /// Current value of attribute `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Rendered subtree; `None` until the element has been connected.
    #[must_use]
    pub const fn shadow(&self) -> Option<&PreviewUnit> {
        self.shadow.as_ref()
    }

    /// Whether [`connected`](ObservedAttributes::connected) has been called.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.is_connected
    }

    /// Number of renders so far.
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.render_count
    }
}

impl ObservedAttributes for BookPreview {
    fn observed_attributes() -> &'static [&'static str] {
        &[ATTR_TITLE, ATTR_AUTHOR_NAME, ATTR_IMAGE]
    }

    fn attribute_changed(&mut self, name: &str, old: Option<&str>, new: Option<&str>) {
        tracing::trace!(attribute = name, ?old, ?new, "preview attribute changed");
        if self.is_connected {
            self.render();
        }
    }

    fn connected(&mut self) {
        self.is_connected = true;
        self.render();
    }

    fn render(&mut self) {
        self.shadow = Some(build_unit(
            None,
            self.attribute(ATTR_TITLE),
            self.attribute(ATTR_AUTHOR_NAME),
            self.attribute(ATTR_IMAGE),
        ));
        self.render_count += 1;
    }
}
