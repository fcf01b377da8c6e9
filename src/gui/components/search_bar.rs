// src/gui/components/search_bar.rs
//
// The search box. Every edit re-filters the full dataset.

use eframe::egui;

use crate::config::consts::{ APP_TITLE, SEARCH_ID };
use crate::gui::{ actions, app::App };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.heading(APP_TITLE);

    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query)
                .id(egui::Id::new(SEARCH_ID))
                .hint_text("Name or manufacturer")
                .desired_width(320.0),
        );
        if resp.changed() {
            app.refresh();
        }

        if !app.state.gui.query.is_empty() && ui.small_button("✕").clicked() {
            app.state.gui.query.clear();
            app.refresh();
        }

        ui.separator();
        ui.toggle_value(&mut app.state.gui.show_filters, "Filters");

        let loading = app.is_loading();
        if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
            actions::reload(app);
        }
        if loading {
            ui.add(egui::Spinner::new());
        }
    });
    ui.add_space(4.0);
}
