// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;

pub mod dashboard;
pub mod glance;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Dashboard,
    Glance,
}

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body into the central panel.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
