//! Day/night theme, the style root holding the color variables, and ANSI helpers.
//!
//! The theme only ever sets two variables on the [`StyleRoot`]: `--color-dark`
//! and `--color-light`, each an `"r, g, b"` triple. Every other color the
//! renderer paints is derived from them the way `rgba(var(--color-dark), 0.4)`
//! would be: the variable is alpha-blended over the light color.
//!
//! | Theme | `--color-dark` | `--color-light` |
//! |-------|----------------|-----------------|
//! | day   | `10, 10, 20`   | `255, 255, 255` |
//! | night | `255, 255, 255`| `10, 10, 20`    |
//!
//! # Example
//!
//! ```
//! use bookshelf::ui::theme::{StyleRoot, Theme, COLOR_DARK};
//!
//! let mut root = StyleRoot::default();
//! Theme::Night.apply(&mut root);
//! assert_eq!(root.property(COLOR_DARK), Some("255, 255, 255"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// Name of the dark color variable.
pub const COLOR_DARK: &str = "--color-dark";

/// Name of the light color variable.
pub const COLOR_LIGHT: &str = "--color-light";

/// Accent used for the selected row.
const COLOR_BLUE: Rgb = Rgb::new(0, 150, 255);

const NEAR_BLACK: Rgb = Rgb::new(10, 10, 20);
const NEAR_WHITE: Rgb = Rgb::new(255, 255, 255);

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `"r, g, b"` triple as stored in a color variable.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let mut channels = value.split(',').map(|c| c.trim().parse::<u8>());
        let r = channels.next()?.ok()?;
        let g = channels.next()?.ok()?;
        let b = channels.next()?.ok()?;
        if channels.next().is_some() {
            return None;
        }
        Some(Self::new(r, g, b))
    }

    /// Composites `self` at `alpha` over `base`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn over(self, base: Self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| {
            // Both inputs are u8 and alpha is clamped, so the result stays in range.
            f32::from(top).mul_add(alpha, f32::from(bottom) * (1.0 - alpha)).round() as u8
        };
        Self::new(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Process-wide color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Day,
    /// Light text on a dark background.
    Night,
}

impl Theme {
    /// Both themes in select-option order.
    pub const ALL: [Self; 2] = [Self::Day, Self::Night];

    /// `(dark, light)` variable values for this theme.
    #[must_use]
    pub const fn variables(self) -> (Rgb, Rgb) {
        match self {
            Self::Day => (NEAR_BLACK, NEAR_WHITE),
            Self::Night => (NEAR_WHITE, NEAR_BLACK),
        }
    }

    /// Writes both color variables onto the style root.
    pub fn apply(self, root: &mut StyleRoot) {
        let (dark, light) = self.variables();
        root.set_property(COLOR_DARK, dark.to_string());
        root.set_property(COLOR_LIGHT, light.to_string());
        tracing::debug!(theme = self.name(), "theme applied");
    }

    /// Parses a theme name (`day` / `night`), ignoring case and surrounding blanks.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            _ => None,
        }
    }

    /// Picks the startup theme from the host's ambient color-scheme preference.
    ///
    /// `dark` selects night and `light` selects day. A theme name (`day` /
    /// `night`) is accepted as well. Anything else, including no preference,
    /// selects day.
    ///
    /// ```
    /// use bookshelf::ui::Theme;
    ///
    /// assert_eq!(Theme::from_color_scheme(Some("dark")), Theme::Night);
    /// assert_eq!(Theme::from_color_scheme(Some("Night")), Theme::Night);
    /// assert_eq!(Theme::from_color_scheme(None), Theme::Day);
    /// ```
    #[must_use]
    pub fn from_color_scheme(preference: Option<&str>) -> Self {
        match preference.map(|p| p.trim().to_ascii_lowercase()).as_deref() {
            Some("dark") => Self::Night,
            Some("light") | None => Self::Day,
            Some(other) => Self::from_name(other).unwrap_or_default(),
        }
    }

    /// Lowercase name used in logs and by [`from_name`](Self::from_name).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// Display label in the settings overlay.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }

    /// The other theme. Left/right in the settings overlay flip between the two.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

/// Settable style properties on the document root.
///
/// Values are stored as text, the way a stylesheet holds them. Colors use the
/// `"r, g, b"` form so they can be read back with [`color`](Self::color).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRoot {
    properties: BTreeMap<String, String>,
}

impl StyleRoot {
    /// Sets property `name`, replacing any earlier value.
    ///
    /// # Example
    ///
    /// ```
    /// use bookshelf::ui::theme::{Rgb, StyleRoot, COLOR_DARK};
    ///
    /// let mut root = StyleRoot::default();
    /// root.set_property(COLOR_DARK, "10, 10, 20");
    /// assert_eq!(root.color(COLOR_DARK), Some(Rgb::new(10, 10, 20)));
    /// ```
    pub fn set_property(&mut self, name: &str, value: impl Into<String>) {
        self.properties.insert(name.to_string(), value.into());
    }

    /// Raw text of property `name`, if set.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Parsed color variable, if set and well-formed.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Rgb> {
        self.property(name).and_then(Rgb::parse)
    }

    fn dark(&self) -> Rgb {
        self.color(COLOR_DARK).unwrap_or(NEAR_BLACK)
    }

    fn light(&self) -> Rgb {
        self.color(COLOR_LIGHT).unwrap_or(NEAR_WHITE)
    }
}

/// Concrete colors the renderer paints with, resolved from a [`StyleRoot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub title: Rgb,
    pub author: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub selection_bg: Rgb,
    pub match_highlight: Rgb,
}

impl Palette {
    #[must_use]
    pub fn resolve(root: &StyleRoot) -> Self {
        let dark = root.dark();
        let light = root.light();
        Self {
            background: light,
            title: dark.over(light, 0.8),
            author: dark.over(light, 0.4),
            border: dark.over(light, 0.15),
            text: dark.over(light, 0.9),
            selection_bg: COLOR_BLUE.over(light, 0.25),
            match_highlight: COLOR_BLUE,
        }
    }

    /// Background plus body text color, re-applied after every reset.
    #[must_use]
    pub fn base(&self) -> String {
        format!("{}{}", Self::bg(self.background), Self::fg(self.text))
    }

    /// ANSI 24-bit foreground escape sequence.
    #[must_use]
    pub fn fg(color: Rgb) -> String {
        format!("\u{001b}[38;2;{};{};{}m", color.r, color.g, color.b)
    }

    /// ANSI 24-bit background escape sequence.
    #[must_use]
    pub fn bg(color: Rgb) -> String {
        format!("\u{001b}[48;2;{};{};{}m", color.r, color.g, color.b)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn strikethrough() -> &'static str {
        "\u{001b}[9m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}
