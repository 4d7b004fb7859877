//! End-to-end browsing over the bundled demo catalog, driven through the
//! public event API the plugin shim uses.

use bookshelf::app::state::EMPTY_MESSAGE;
use bookshelf::catalog::{FilterCriteria, ANY};
use bookshelf::{handle_event, initialize, Action, AppState, Config, Event, Surface, Theme};

const PAGE: usize = 36;
const TOTAL: usize = 40;

fn demo() -> AppState {
    initialize(&Config::default())
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn rendered_ids(state: &AppState) -> Vec<String> {
    state
        .document
        .list
        .items
        .units()
        .iter()
        .filter_map(|u| u.id.clone())
        .collect()
}

#[test]
fn startup_renders_first_page_and_counts_the_rest() {
    let state = demo();

    assert_eq!(state.catalog.len(), TOTAL);
    assert_eq!(state.document.list.items.len(), PAGE);
    assert_eq!(state.document.list.show_more.label, "Show more (4)");
    assert!(!state.document.list.show_more.disabled);
    assert!(!state.document.list.message_visible);
    assert_eq!(state.focused_surface(), Surface::List);
    assert_eq!(state.theme, Theme::Day);
}

#[test]
fn show_more_appends_the_remainder_then_disables() {
    let mut state = demo();
    let first_page = rendered_ids(&state);

    let (render, actions) = send(&mut state, Event::ShowMore);
    assert!(render);
    assert_eq!(actions, vec![Action::RenamePane { title: format!("Bookshelf ({TOTAL}/{TOTAL})") }]);
    assert_eq!(state.document.list.items.len(), TOTAL);
    assert_eq!(rendered_ids(&state)[..PAGE], first_page[..]);
    assert!(state.document.list.show_more.disabled);

    let (_, actions) = send(&mut state, Event::ShowMore);
    assert!(actions.is_empty());
    assert_eq!(state.document.list.items.len(), TOTAL);
}

#[test]
fn search_resets_the_list_to_the_first_page() {
    let mut state = demo();
    send(&mut state, Event::ShowMore);

    send(&mut state, Event::SubmitSearch(FilterCriteria::new("", "a01", ANY)));

    assert_eq!(state.pagination.matches().len(), 5);
    assert_eq!(state.document.list.items.len(), 5);
    assert!(state.document.list.show_more.disabled);
    assert!(state.pagination.matches().iter().all(|b| b.author == "a01"));
    assert_eq!(state.selected_index, 0);
}

#[test]
fn show_more_label_keeps_its_startup_count() {
    let mut state = demo();
    send(&mut state, Event::SubmitSearch(FilterCriteria::new("war", ANY, ANY)));
    assert_eq!(state.document.list.show_more.label, "Show more (4)");
}

#[test]
fn title_search_is_case_insensitive_and_combines_with_genre() {
    let mut state = demo();

    send(&mut state, Event::SubmitSearch(FilterCriteria::new("WAR", ANY, ANY)));
    let titles: Vec<&str> = state.document.list.items.units().iter().map(|u| u.title.as_str()).collect();
    assert_eq!(titles, vec!["War and Peace", "The War of the Worlds"]);

    send(&mut state, Event::SubmitSearch(FilterCriteria::new("war", ANY, "g03")));
    let titles: Vec<&str> = state.document.list.items.units().iter().map(|u| u.title.as_str()).collect();
    assert_eq!(titles, vec!["The War of the Worlds"]);
}

#[test]
fn empty_message_tracks_zero_matches() {
    let mut state = demo();

    send(&mut state, Event::SubmitSearch(FilterCriteria::new("no such title", ANY, ANY)));
    assert!(state.document.list.items.is_empty());
    assert!(state.document.list.message_visible);
    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(vm.empty_state.map(|e| e.message), Some(EMPTY_MESSAGE.to_string()));

    send(&mut state, Event::SubmitSearch(FilterCriteria::default()));
    assert!(!state.document.list.message_visible);
    assert_eq!(state.document.list.items.len(), PAGE);
}

#[test]
fn detail_overlay_shows_author_and_year() {
    let mut state = demo();

    send(&mut state, Event::OpenDetail("b001".into()));
    let detail = &state.document.detail_overlay;
    assert!(detail.open);
    assert_eq!(detail.title, "Pride and Prejudice");
    assert_eq!(detail.subtitle, "Jane Austen (1813)");
    assert_eq!(detail.image, "https://covers.example.org/b001.jpg");
    assert_eq!(detail.blur, detail.image);
    assert_eq!(state.focused_surface(), Surface::Detail);

    send(&mut state, Event::Dismiss);
    assert_eq!(state.focused_surface(), Surface::List);
}

#[test]
fn unknown_detail_id_leaves_overlays_closed() {
    let mut state = demo();
    let (render, _) = send(&mut state, Event::OpenDetail("b999".into()));

    assert!(!render);
    assert!(!state.document.detail_overlay.open);
    assert_eq!(state.focused_surface(), Surface::List);
}

#[test]
fn keyboard_search_flow() {
    let mut state = demo();

    send(&mut state, Event::OpenSearch);
    assert_eq!(state.focused_surface(), Surface::Search);
    for c in "emma".chars() {
        send(&mut state, Event::Char(c));
    }
    send(&mut state, Event::Confirm);

    assert_eq!(state.focused_surface(), Surface::List);
    assert_eq!(state.criteria.title, "emma");
    assert_eq!(state.document.list.items.len(), 1);

    // Reopening shows the submitted criteria; cancelling a new draft restores them.
    send(&mut state, Event::OpenSearch);
    send(&mut state, Event::Backspace);
    send(&mut state, Event::Dismiss);
    assert_eq!(state.document.search_overlay.form.title, "emma");
}

#[test]
fn theme_switch_through_settings() {
    let mut state = demo();

    send(&mut state, Event::OpenSettings);
    send(&mut state, Event::NextOption);
    send(&mut state, Event::Confirm);
    assert_eq!(state.theme, Theme::Night);

    send(&mut state, Event::SubmitTheme(Theme::Day));
    assert_eq!(state.theme, Theme::Day);
}

#[test]
fn viewmodel_windows_rows_around_the_selection() {
    let mut state = demo();
    for _ in 0..20 {
        send(&mut state, Event::KeyDown);
    }

    let vm = state.compute_viewmodel(19, 100);
    assert_eq!(vm.rows.len(), 10);
    assert!(vm.rows[vm.selected_index].is_selected);
    assert_eq!(vm.show_more.label, "Show more (4)");
}
