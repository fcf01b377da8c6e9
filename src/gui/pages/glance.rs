// src/gui/pages/glance.rs
use eframe::egui;

use crate::gui::{ app::App, components::glance_table };
use super::{ Page, PageKind };

pub struct GlancePage;
pub static PAGE: GlancePage = GlancePage;

impl Page for GlancePage {
    fn title(&self) -> &'static str { "Details at a glance" }
    fn kind(&self) -> PageKind { PageKind::Glance }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        glance_table::draw(ui, app);
    }
}
