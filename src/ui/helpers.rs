//! Shared rendering utilities.
//!
//! Cursor positioning, title match highlighting, and the width-aware text
//! helpers the components share. All text measurements are in characters,
//! not bytes, so titles with accents truncate cleanly.

use crate::ui::theme::Palette;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the given character ranges in the highlight color.
///
/// Highlighting is skipped on the selected row so it does not fight with the
/// selection background.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], palette: &Palette, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal: String = chars[current_pos..start].iter().collect();
        print!("{normal}");

        print!("{}{}", Palette::bold(), Palette::fg(palette.match_highlight));
        let highlighted: String = chars[start..end].iter().collect();
        print!("{highlighted}");
        print!("{}{}{}{}", Palette::reset(), palette.base(), Palette::bold(), Palette::fg(palette.title));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Finds non-overlapping, case-insensitive occurrences of `query` in `text`.
///
/// Returns `(start, end)` character ranges into `text`. A blank query matches
/// nothing. Case folding is `str::to_lowercase` on both sides, the same folding
/// the title filter uses, so every filtered row that matched on its title gets
/// a highlight. A character that lowercases to several characters (`İ`) is
/// highlighted whole.
///
/// ```
/// use bookshelf::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("War and Peace", "war"), vec![(0, 3)]);
/// assert_eq!(match_ranges("Peacewar", "WAR"), vec![(5, 8)]);
/// assert!(match_ranges("Emma", "  ").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    // Origin character index of every folded character.
    let origins: Vec<usize> = text
        .chars()
        .enumerate()
        .flat_map(|(index, c)| std::iter::repeat(index).take(c.to_lowercase().count()))
        .collect();
    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if haystack.len() != origins.len() {
        return Vec::new();
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            let start = origins[i];
            let end = origins[i + needle.len() - 1] + 1;
            if ranges.last().map_or(true, |&(_, last_end)| start >= last_end) {
                ranges.push((start, end));
            }
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Greedy word wrap to `width` characters per line.
///
/// Words longer than a line are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Prints `text` padded with spaces to exactly `width` characters.
pub fn print_padded(text: &str, width: usize) {
    let shown = truncate(text, width);
    let pad = width.saturating_sub(shown.chars().count());
    print!("{shown}{}", " ".repeat(pad));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("Warlock of the War", "war"), vec![(0, 3), (15, 18)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Emma", "persuasion").is_empty());
    }

    #[test]
    fn match_ranges_counts_characters_not_bytes() {
        assert_eq!(match_ranges("Les Misérables", "rab"), vec![(8, 11)]);
    }

    #[test]
    fn match_ranges_agrees_with_the_title_filter() {
        use crate::catalog::{filter, FilterCriteria, ANY};
        use crate::domain::Book;
        use chrono::NaiveDate;

        let title = "\u{130}stanbul Nights";
        let query = "i\u{307}s";
        let book = Book {
            id: "b1".into(),
            title: title.into(),
            author: "a1".into(),
            image: String::new(),
            genres: vec!["g1".into()],
            published: NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
            description: String::new(),
        };

        assert_eq!(filter::apply(&[book], &FilterCriteria::new(query, ANY, ANY)).len(), 1);
        assert_eq!(match_ranges(title, query), vec![(0, 2)]);
        assert_eq!(match_ranges(title, "nights"), vec![(9, 15)]);
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Middlemarch", 20), "Middlemarch");
        assert_eq!(truncate("Middlemarch", 8), "Middl...");
        assert_eq!(truncate("Middlemarch", 2), "Mi");
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("It is a truth universally acknowledged", 12);
        assert_eq!(lines, vec!["It is a", "truth", "universally", "acknowledged"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert!(wrap("   ", 10).is_empty());
    }
}
