// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use robot_guide::{
    config::{ consts::APP_TITLE, state::GuiState },
    gui, log,
};

fn main() {
    log::init_gui();

    let gui = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([gui.window_w as f32, gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        tracing::error!("GUI failed: {e}");
        eprintln!("GUI failed: {e}");
        std::process::exit(1);
    }
}
