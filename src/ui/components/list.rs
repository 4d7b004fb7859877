//! Book list renderer: preview rows and the "Show more" control.
//!
//! Each row is one preview unit laid out as three columns:
//!
//! ```text
//!  TITLE (45%)                AUTHOR (25%)         COVER (rest)
//! ```
//!
//! The selected row gets the selection background across the full width, and
//! title matches for the submitted query are highlighted on the other rows.

use crate::ui::helpers::{self, position_cursor, print_padded, truncate};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{DisplayRow, ShowMoreInfo};

/// Column widths for a pane `cols` wide: `(title, author, cover)`.
fn column_widths(cols: usize) -> (usize, usize, usize) {
    let usable = cols.saturating_sub(4);
    let title = usable * 45 / 100;
    let author = usable * 25 / 100;
    (title, author, usable.saturating_sub(title + author))
}

/// Renders the column headers at `row`.
pub fn render_list_headers(row: usize, palette: &Palette, cols: usize) -> usize {
    let (title_w, author_w, cover_w) = column_widths(cols);

    position_cursor(row, 1);
    print!("{}", palette.base());
    print!("{}{}", Palette::bold(), Palette::fg(palette.author));
    print!(" ");
    print_padded("TITLE", title_w);
    print!(" ");
    print_padded("AUTHOR", author_w);
    print!(" ");
    print_padded("COVER", cover_w);
    print!(" ");
    print!("{}", Palette::reset());
    row + 1
}

/// Renders every row starting at `row` and returns the next free row.
pub fn render_list_rows(row: usize, rows: &[DisplayRow], palette: &Palette, cols: usize) -> usize {
    rows.iter()
        .fold(row, |current, item| render_list_row(current, item, palette, cols))
}

fn render_list_row(row: usize, item: &DisplayRow, palette: &Palette, cols: usize) -> usize {
    let (title_w, author_w, cover_w) = column_widths(cols);

    position_cursor(row, 1);
    print!("{}", palette.base());
    if item.is_selected {
        print!("{}", Palette::bg(palette.selection_bg));
    }

    print!("{}{} ", Palette::bold(), Palette::fg(palette.title));
    let title = truncate(&item.title, title_w);
    if item.is_selected {
        print!("{title}");
    } else {
        helpers::render_highlighted_text(&title, &item.highlight_ranges, palette, false);
    }
    print!("{}", " ".repeat(title_w.saturating_sub(title.chars().count())));

    print!("{}", Palette::reset());
    print!("{}", palette.base());
    if item.is_selected {
        print!("{}", Palette::bg(palette.selection_bg));
    }

    print!(" {}", Palette::fg(palette.author));
    print_padded(&item.author, author_w);
    print!(" {}", Palette::dim());
    print_padded(&item.cover, cover_w);
    print!(" ");
    print!("{}", Palette::reset());
    row + 1
}

/// Renders the "Show more" control, struck through when disabled.
pub fn render_show_more(row: usize, show_more: &ShowMoreInfo, palette: &Palette, cols: usize) -> usize {
    let button = format!("[ {} ]", show_more.label);
    let len = button.chars().count().min(cols);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{}", palette.base());
    print!("{}", " ".repeat(padding));
    if show_more.disabled {
        print!("{}{}", Palette::dim(), Palette::strikethrough());
        print!("{}", Palette::fg(palette.border));
    } else {
        print!("{}{}", Palette::bold(), Palette::fg(palette.match_highlight));
    }
    print!("{}", truncate(&button, cols));
    print!("{}", Palette::reset());
    print!("{}", palette.base());
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Palette::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::column_widths;

    #[test]
    fn columns_fill_the_pane() {
        let (title, author, cover) = column_widths(84);
        assert_eq!((title, author, cover), (36, 20, 24));
        assert_eq!(title + author + cover + 4, 84);
        assert_eq!(column_widths(2), (0, 0, 0));
    }
}
