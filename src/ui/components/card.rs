//! Selection card: the preview element for the highlighted row.

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::SelectionCard;

/// Height of the card in rows.
pub const CARD_HEIGHT: usize = 2;

/// Renders the card at `row`, or blank lines when nothing is selected.
pub fn render_selection_card(row: usize, card: Option<&SelectionCard>, palette: &Palette, cols: usize) -> usize {
    let width = cols.saturating_sub(4);

    position_cursor(row, 1);
    print!("{}", palette.base());
    match card {
        Some(card) => {
            print!("{} ▌ {}", Palette::fg(palette.match_highlight), Palette::bold());
            print!("{}", Palette::fg(palette.title));
            print_padded(&format!("{} by {}", card.title, card.author), width);
        }
        None => print!("{}", " ".repeat(cols)),
    }
    print!("{}", Palette::reset());

    position_cursor(row + 1, 1);
    print!("{}", palette.base());
    match card {
        Some(card) => {
            print!("{} ▌ {}", Palette::fg(palette.match_highlight), Palette::dim());
            print!("{}", Palette::fg(palette.author));
            print_padded(&card.cover, width);
        }
        None => print!("{}", " ".repeat(cols)),
    }
    print!("{}", Palette::reset());

    row + CARD_HEIGHT
}
