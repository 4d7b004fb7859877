//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Bookshelf library
//! and the Zellij plugin system. It implements `ZellijPlugin`, maps host key
//! presses to library events and carries out the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, load the catalog into `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Map keys by focused surface, delegate to the library layer
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! On the list:
//! - `j`/`Down`/`Ctrl+n`, `k`/`Up`/`Ctrl+p`: Move the highlight
//! - `Enter`: Open the detail overlay for the highlighted book
//! - `m`: Show more
//! - `/`: Open search
//! - `s`: Open settings
//! - `q`/`Esc`: Close plugin
//!
//! In the search overlay:
//! - Printable characters: Type into the title input
//! - `Tab`: Next field
//! - `Left`/`Right`: Cycle the author or genre select
//! - `Enter`: Submit, `Esc`: Cancel
//!
//! In the settings overlay:
//! - `Left`/`Right`/`h`/`l`: Switch theme
//! - `Enter`: Apply, `Esc`: Cancel
//!
//! In the detail overlay:
//! - `Esc`/`Enter`/`q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookshelf::{handle_event, Action, Config, Event, Surface};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from the library layer.
    app: bookshelf::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookshelf::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `ReadApplicationState`: Read the plugin's own pane ids
    /// - `ChangeApplicationState`: Rename and hide the plugin pane
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookshelf::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(catalog_file = ?config.catalog_file, color_scheme = ?config.color_scheme, "parsed configuration");
        self.app = bookshelf::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - pane title and hide unavailable");
                    }
                }
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        bookshelf::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the focused surface.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
        let surface = self.app.focused_surface();
        Some(match (surface, key.bare_key) {
            (Surface::List, BareKey::Char('n')) if ctrl => Event::KeyDown,
            (Surface::List, BareKey::Char('p')) if ctrl => Event::KeyUp,
            (_, BareKey::Char(_)) if ctrl => return None,

            (Surface::List, BareKey::Down | BareKey::Char('j')) => Event::KeyDown,
            (Surface::List, BareKey::Up | BareKey::Char('k')) => Event::KeyUp,
            (Surface::List, BareKey::Char('/')) => Event::OpenSearch,
            (Surface::List, BareKey::Char('s')) => Event::OpenSettings,
            (Surface::List, BareKey::Char('m')) => Event::ShowMore,
            (Surface::List, BareKey::Char('q')) => Event::CloseFocus,

            (Surface::Search, BareKey::Tab) => Event::NextField,
            (Surface::Search, BareKey::Backspace) => Event::Backspace,
            (Surface::Search, BareKey::Char(c)) => Event::Char(c),

            (Surface::Search | Surface::Settings, BareKey::Left) => Event::PrevOption,
            (Surface::Search | Surface::Settings, BareKey::Right) => Event::NextOption,
            (Surface::Settings, BareKey::Char('h')) => Event::PrevOption,
            (Surface::Settings, BareKey::Char('l')) => Event::NextOption,

            (Surface::Detail, BareKey::Char('q')) => Event::CloseDetail,

            (_, BareKey::Enter) => Event::Confirm,
            (_, BareKey::Esc) => Event::Dismiss,
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::RenamePane { title } => {
                let ids = get_plugin_ids();
                tracing::debug!(plugin_id = ids.plugin_id, %title, "renaming plugin pane");
                rename_plugin_pane(ids.plugin_id, title);
            }
        }
    }
}
