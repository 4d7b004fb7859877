//! Empty list message renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line "no results" message starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, palette: &Palette, cols: usize) -> usize {
    let lines = [
        (format!("{}{}", Palette::bold(), Palette::fg(palette.title)), &empty.message),
        (format!("{}{}", Palette::dim(), Palette::fg(palette.author)), &empty.subtitle),
    ];

    for (offset, (style, text)) in lines.iter().enumerate() {
        let text = truncate(text, cols);
        let len = text.chars().count();
        let padding = cols.saturating_sub(len) / 2;

        position_cursor(row + offset, 1);
        print!("{}", palette.base());
        print!("{}", " ".repeat(padding));
        print!("{style}{text}{}", Palette::reset());
        print!("{}", palette.base());
        print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
        print!("{}", Palette::reset());
    }
    row + lines.len()
}
