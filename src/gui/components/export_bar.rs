// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::{ debug, info };

use crate::{
    config::options::ExportFormat,
    gui::{ actions, app::App },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Export");

    let export = &mut app.state.options.export;
    let prev_fmt = export.format;
    ui.horizontal(|ui| {
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Html, "HTML");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
    });
    if export.format != prev_fmt {
        info!("UI: Export format → {:?}", export.format);
        // A path the user never touched follows the format's extension.
        if !app.out_path_dirty && export.is_default_path() {
            app.out_path_text = export.out_path().to_string_lossy().into_owned();
        }
    }

    ui.label("Output:");
    if ui
        .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
        .changed()
    {
        app.out_path_dirty = true;
        debug!("UI: out_path_text changed → {}", app.out_path_text);
    }

    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });
}
