// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Current text of the search box
    pub query: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Side panel with the facet filters
    pub show_filters: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query: s!(),
            window_w: 1100,
            window_h: 760,
            current_page_index: 0,
            show_filters: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
