//! Footer component renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::FooterInfo;

/// Renders centered keybinding hints at `row`.
///
/// Hints wider than the pane are truncated so they never wrap onto the next
/// line.
pub fn render_footer(row: usize, footer: &FooterInfo, palette: &Palette, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = help_text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", palette.base());
    print!("{}", Palette::fg(palette.author));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Palette::reset());
    row + 1
}
