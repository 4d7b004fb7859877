//! User interface layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//!     ↑
//! Document (slots the controller writes into)
//! ```
//!
//! # Modules
//!
//! - [`document`]: The rendering surface and its named slots
//! - [`preview`]: Preview units for one book, inline and attribute-driven
//! - [`theme`]: Day/night color variables and ANSI color helpers
//! - [`viewmodel`]: Display-ready snapshot of one frame
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Per-region renderers
//! - [`helpers`]: Shared text and cursor utilities

pub mod components;
pub mod document;
pub mod helpers;
pub mod preview;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use document::Document;
pub use preview::{render_inline, BookPreview, ObservedAttributes, PreviewUnit};
pub use renderer::render;
pub use theme::{Palette, StyleRoot, Theme};
pub use viewmodel::UIViewModel;
