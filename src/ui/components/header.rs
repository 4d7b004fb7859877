//! Header component renderer.
//!
//! Renders the title bar: the shelf name plus how many books are shown out of
//! the current matches, centered and bold on the theme background.

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, palette: &Palette, cols: usize) -> usize {
    let title_len = header.title.chars().count().min(cols);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", palette.base());
    print!("{}{}", Palette::bold(), Palette::fg(palette.title));
    print!("{}", " ".repeat(padding));
    print_padded(&header.title, cols.saturating_sub(padding));
    print!("{}", Palette::reset());
    row + 1
}
