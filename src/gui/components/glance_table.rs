// src/gui/components/glance_table.rs
//
// "Details at a glance": the filtered view as a flat table, cheapest first.

use eframe::egui::{ self, RichText };
use egui_extras::{ Column, TableBuilder };

use crate::gui::app::App;
use crate::render::glance::{ COLUMNS, COLUMN_WIDTHS };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.glance_rows.is_empty() {
        ui.centered_and_justified(|ui| ui.label(RichText::new("Nothing to show").weak()));
        return;
    }

    let mut table = TableBuilder::new(ui)
        .id_salt("glance")
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for &w in COLUMN_WIDTHS.iter() {
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }

    table
        .header(22.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui| {
                    ui.label(RichText::new(name).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.glance_rows.len(), |mut row| {
                let Some(cells) = app.glance_rows.get(row.index()) else { return };
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
