//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with the shown/matched counts
//! - [`list`]: Column headers, preview rows and the "Show more" control
//! - [`empty`]: Message shown when a search matches nothing
//! - [`card`]: Preview card for the selected row
//! - [`overlay`]: Search, settings and detail overlays
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Column headers]
//! [Rows | empty message]
//! [Show more]
//! [Selection card - 2 lines]
//! [Border]
//! [Footer]
//! ```
//!
//! Overlays are painted last, on top of the list.

mod card;
mod empty;
mod footer;
mod header;
mod list;
mod overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::UIViewModel;

use card::{render_selection_card, CARD_HEIGHT};
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::{render_list_headers, render_list_rows, render_show_more};
use overlay::render_overlay;

/// Rows taken by everything except the list rows.
pub const CHROME_ROWS: usize = 5 + CARD_HEIGHT + 2;

fn render_border(row: usize, palette: &Palette, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", palette.base());
    print!("{}", Palette::fg(palette.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Palette::reset());
    row + 1
}

fn fill_background(palette: &Palette, cols: usize, rows: usize) {
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{}{}{}", palette.base(), " ".repeat(cols), Palette::reset());
    }
}

/// Renders the full browser frame.
pub fn render_browser(vm: &UIViewModel, cols: usize, rows: usize) {
    let palette = &vm.palette;
    fill_background(palette, cols, rows);

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, palette, cols);
    current_row = render_border(current_row, palette, cols);
    current_row = render_list_headers(current_row, palette, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, palette, cols);
    } else {
        render_list_rows(current_row, &vm.rows, palette, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let card_row = border_row.saturating_sub(CARD_HEIGHT);
    let show_more_row = card_row.saturating_sub(1);

    render_show_more(show_more_row, &vm.show_more, palette, cols);
    render_selection_card(card_row, vm.selection_card.as_ref(), palette, cols);
    render_border(border_row, palette, cols);
    render_footer(footer_row, &vm.footer, palette, cols);

    if let Some(overlay) = &vm.overlay {
        render_overlay(overlay, palette, cols, rows);
    }
}
