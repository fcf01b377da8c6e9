// src/gui/actions/reload.rs
use tracing::debug;

use crate::gui::app::App;

/// Fetch and parse the source again; the board is replaced when it lands.
pub fn reload(app: &mut App) {
    if app.is_loading() {
        debug!("Reload: Clicked while a load is running");
        return;
    }
    app.status(format!("Loading {}…", app.state.options.load.source));
    app.start_load();
}
