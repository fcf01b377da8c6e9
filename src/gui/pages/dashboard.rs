// src/gui/pages/dashboard.rs
use eframe::egui;

use crate::gui::{ app::App, components::card_board };
use super::{ Page, PageKind };

pub struct DashboardPage;
pub static PAGE: DashboardPage = DashboardPage;

impl Page for DashboardPage {
    fn title(&self) -> &'static str { "Robots" }
    fn kind(&self) -> PageKind { PageKind::Dashboard }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        card_board::draw(ui, app);
    }
}
