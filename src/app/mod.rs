//! Application layer: state, events and actions.
//!
//! ```text
//! Key input → Event → handle_event → AppState mutations → Actions → host calls
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects returned by the handler
//! - [`handler`]: Event processing and surface routing
//! - [`modes`]: Focused surface and search field types
//! - [`state`]: Application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{SearchField, Surface};
pub use state::AppState;
