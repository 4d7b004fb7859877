//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the application
//! state, then hand it to the component renderers, which print ANSI-styled
//! output to stdout. The renderer does not clear the screen; the browser
//! layout paints every row itself.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI for a pane of `rows` by `cols` cells.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, rows, cols);
}

/// Renders a precomputed view model.
pub fn render_viewmodel(vm: &UIViewModel, rows: usize, cols: usize) {
    components::render_browser(vm, cols, rows);
}
