// src/gui/components/card_board.rs
//
// The `dashboard` container: draws whatever the board currently holds.
// It never filters; the controller replaces the board's cards wholesale.

use eframe::egui::{ self, RichText };

use crate::config::consts::{ CARD_COLUMNS, CARD_WIDTH_MIN, DASHBOARD_ID };
use crate::gui::app::App;
use crate::render::Card;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let board = &app.board;

    if board.is_empty() {
        ui.centered_and_justified(|ui| {
            let msg = if app.is_loading() {
                "Loading…"
            } else if app.controller.dataset().is_empty() {
                "No robots loaded"
            } else {
                "No robots match your search"
            };
            ui.label(RichText::new(msg).weak());
        });
        return;
    }

    let cols = ((ui.available_width() / CARD_WIDTH_MIN).floor() as usize).clamp(1, CARD_COLUMNS);
    let generation = board.generation();

    egui::ScrollArea::vertical()
        .id_salt(DASHBOARD_ID)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (row_ix, chunk) in board.cards().chunks(cols).enumerate() {
                ui.columns(cols, |columns| {
                    for (col_ix, card) in chunk.iter().enumerate() {
                        draw_card(&mut columns[col_ix], card, (generation, row_ix * cols + col_ix));
                    }
                });
                ui.add_space(8.0);
            }
        });
}

fn draw_card(ui: &mut egui::Ui, card: &Card, salt: (u64, usize)) {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&card.title).heading().strong());
            ui.label(format!("Manufacturer: {}", card.manufacturer));
            ui.label(format!("Price: {}", card.price));
            if let Some(g) = &card.grade_line {
                ui.label(RichText::new(g).small().weak());
            }

            // Keyed by generation so disclosure state resets with each replace.
            egui::CollapsingHeader::new("More Info")
                .id_salt(salt)
                .default_open(false)
                .show(ui, |ui| {
                    for d in &card.details {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new(format!("{}:", d.label)).strong());
                            ui.label(&d.value);
                        });
                    }
                    ui.add_space(4.0);
                    ui.label(&card.description);
                });

            ui.horizontal(|ui| {
                link(ui, "Buy Now", card.purchase_url.as_deref());
                link(ui, "Manufacturer Site", card.manufacturer_url.as_deref());
            });
        });
}

/// A missing URL renders as an inert label (the HTML page uses `#`).
fn link(ui: &mut egui::Ui, text: &str, url: Option<&str>) {
    match url {
        Some(url) => {
            ui.add(egui::Hyperlink::from_label_and_url(text, url).open_in_new_tab(true));
        }
        None => {
            ui.add_enabled(false, egui::Label::new(text));
        }
    }
}
