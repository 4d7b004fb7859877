//! Overlay renderers: search form, settings form and book detail.
//!
//! Every overlay is a bordered box centered horizontally over the list:
//!
//! ```text
//! [margin] ┌─ Title ───────────┐
//! [margin] │ line              │
//! [margin] └───────────────────┘
//! ```

use crate::app::modes::SearchField;
use crate::ui::helpers::{position_cursor, print_padded, truncate, wrap};
use crate::ui::theme::{Palette, Theme};
use crate::ui::viewmodel::{DetailView, OverlayView, SearchView, SettingsView};

/// Widest an overlay box gets, borders included.
const MAX_BOX_WIDTH: usize = 72;

/// First row of every overlay.
const BOX_TOP: usize = 4;

/// One styled line of box content.
struct Line {
    style: String,
    text: String,
}

impl Line {
    fn new(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(String::new(), String::new())
    }
}

/// Renders whichever overlay the view model carries.
pub fn render_overlay(overlay: &OverlayView, palette: &Palette, cols: usize, rows: usize) {
    let box_width = cols.saturating_sub(4).min(MAX_BOX_WIDTH);
    let inner = box_width.saturating_sub(4);

    let (title, lines) = match overlay {
        OverlayView::Search(search) => ("Search", search_lines(search, palette)),
        OverlayView::Settings(settings) => ("Settings", settings_lines(settings, palette)),
        OverlayView::Detail(detail) => ("Details", detail_lines(detail, palette, inner)),
    };

    let max_lines = rows.saturating_sub(BOX_TOP + 3);
    draw_box(title, &lines[..lines.len().min(max_lines)], palette, cols, box_width);
}

fn search_lines(search: &SearchView, palette: &Palette) -> Vec<Line> {
    let field = |which: SearchField, label: &str, value: String| {
        let focused = search.focus == which;
        let marker = if focused { "▸" } else { " " };
        let style = if focused {
            format!("{}{}", Palette::bold(), Palette::fg(palette.match_highlight))
        } else {
            Palette::fg(palette.text)
        };
        Line::new(style, format!("{marker} {label:<8}{value}"))
    };

    vec![
        field(SearchField::Title, "Title", format!("{}_", search.title)),
        field(SearchField::Author, "Author", format!("‹ {} ›", search.author)),
        field(SearchField::Genre, "Genre", format!("‹ {} ›", search.genre)),
        Line::blank(),
        Line::new(
            Palette::fg(palette.author),
            "Tab: next field  ←/→: change  Enter: search  Esc: cancel",
        ),
    ]
}

fn settings_lines(settings: &SettingsView, palette: &Palette) -> Vec<Line> {
    let options: Vec<String> = Theme::ALL
        .iter()
        .map(|theme| {
            if *theme == settings.theme {
                format!("[{}]", theme.label())
            } else {
                format!(" {} ", theme.label())
            }
        })
        .collect();

    vec![
        Line::new(
            format!("{}{}", Palette::bold(), Palette::fg(palette.match_highlight)),
            format!("▸ Theme   {}", options.join(" ")),
        ),
        Line::blank(),
        Line::new(Palette::fg(palette.author), "←/→: choose  Enter: apply  Esc: cancel"),
    ]
}

fn detail_lines(detail: &DetailView, palette: &Palette, inner: usize) -> Vec<Line> {
    let backdrop = truncate(&format!("░░ {} ", detail.blur), inner);
    let shade = "░".repeat(inner.saturating_sub(backdrop.chars().count()));

    let mut lines = vec![
        Line::new(format!("{}{}", Palette::dim(), Palette::fg(palette.border)), format!("{backdrop}{shade}")),
        Line::new(Palette::fg(palette.author), format!("Cover: {}", detail.image)),
        Line::blank(),
        Line::new(format!("{}{}", Palette::bold(), Palette::fg(palette.title)), detail.title.clone()),
        Line::new(Palette::fg(palette.author), detail.subtitle.clone()),
        Line::blank(),
    ];
    lines.extend(
        wrap(&detail.description, inner)
            .into_iter()
            .map(|text| Line::new(Palette::fg(palette.text), text)),
    );
    lines.push(Line::blank());
    lines.push(Line::new(Palette::fg(palette.author), "Esc/Enter: close"));
    lines
}

fn draw_box(title: &str, lines: &[Line], palette: &Palette, cols: usize, box_width: usize) {
    let margin = cols.saturating_sub(box_width) / 2;
    let inner = box_width.saturating_sub(4);
    let border = Palette::fg(palette.border);

    let heading = format!("─ {title} ");
    let rule = "─".repeat(box_width.saturating_sub(2 + heading.chars().count()));

    position_cursor(BOX_TOP, margin + 1);
    print!("{}{border}┌{heading}{rule}┐{}", palette.base(), Palette::reset());

    for (offset, line) in lines.iter().enumerate() {
        position_cursor(BOX_TOP + 1 + offset, margin + 1);
        print!("{}{border}│ ", palette.base());
        print!("{}", line.style);
        print_padded(&line.text, inner);
        print!("{}{}{border} │{}", Palette::reset(), palette.base(), Palette::reset());
    }

    position_cursor(BOX_TOP + 1 + lines.len(), margin + 1);
    print!(
        "{}{border}└{}┘{}",
        palette.base(),
        "─".repeat(box_width.saturating_sub(2)),
        Palette::reset()
    );
}
