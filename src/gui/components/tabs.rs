// src/gui/components/tabs.rs
//
// Top tabs. Both pages draw from the same filtered view, so a switch only
// changes which page the central panel asks to draw.

use eframe::egui;
use tracing::info;

use crate::gui::{ app::App, router };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page_kind();
                app.set_current_index(idx);
                info!("UI: Tab switch {:?} → {:?}", prev, page.kind());
            }
        }
    });
}
