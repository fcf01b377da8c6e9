// src/gui/actions/export.rs
use tracing::{ debug, error, info };

use crate::{ file, gui::app::App };

pub fn export(app: &mut App) {
    // apply a typed path first
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        info!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    if app.controller.dataset().is_empty() {
        debug!("Export: Clicked, but there's no dataset");
        app.status("Nothing to export");
        return;
    }

    let opts = &app.state.options;
    let result = file::render_export(
        opts.export.format,
        app.controller.dataset(),
        &opts.criteria,
        opts.sort,
    )
    .map_err(|e| e.to_string())
    .and_then(|body| file::write_export(&opts.export, &body).map_err(|e| e.to_string()));

    let msg = match result {
        Ok(path) => format!("Exported {}", path.display()),
        Err(e) => {
            error!("Export: Error: {e}");
            format!("Export error: {e}")
        }
    };
    app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    app.status(msg);
}
