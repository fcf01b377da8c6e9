// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{ debug, error, info };

use crate::{
    config::options::ExportFormat,
    file,
    gui::app::App,
};

/// Put the visible robots on the clipboard as TSV (glance columns).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.view.is_empty() {
        debug!("Copy: Clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    }

    let opts = &app.state.options;
    match file::render_export(ExportFormat::Tsv, app.controller.dataset(), &opts.criteria, opts.sort) {
        Ok(txt) => {
            ui_ctx.copy_text(txt);
            info!("Copy: {} robots", app.view.len());
            app.status(format!("Copied {} robots", app.view.len()));
        }
        Err(e) => {
            error!("Copy: {e}");
            app.status(format!("Copy error: {e}"));
        }
    }
}
