// src/gui/app.rs
use std::{
    error::Error,
    sync::{ Arc, Mutex },
    time::Duration,
};

use eframe::egui;
use tracing::{ error, info };

use crate::{
    config::{
        consts::{ APP_TITLE, LOAD_POLL_MS },
        options::LoadOptions,
        state::AppState,
    },
    controller::SearchController,
    filter::{ FacetOptions, FilteredView, SortKey },
    loader::PendingLoad,
    render::{ glance, CardBoard },
};

use super::{
    components,
    pages::{ Page, PageKind },
    progress::GuiProgress,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    state.options.load = LoadOptions::from_env();

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // immutable dataset behind the search box; replaced only by a (re)load
    pub controller: SearchController,

    // what the dashboard currently shows
    pub board: CardBoard,
    pub view: FilteredView,
    pub glance_rows: Vec<Vec<String>>,

    // choices for the facet controls
    pub facets: FacetOptions,

    // status/progress (loader thread writes here)
    pub status: Arc<Mutex<String>>,
    pub pending: Option<PendingLoad>,

    // export path textbox; applied on export
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let mut app = Self {
            state,
            controller: SearchController::default(),
            board: CardBoard::default(),
            view: FilteredView::default(),
            glance_rows: Vec::new(),
            facets: FacetOptions::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            pending: None,
            out_path_text,
            out_path_dirty: false,
        };
        app.start_load();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages.get(self.current_index()).copied().unwrap_or(pages[0])
    }

    #[inline]
    pub fn is_loading(&self) -> bool { self.pending.is_some() }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /* ---------- load ---------- */

    /// Kick off a (re)load of the configured source on a worker thread.
    pub fn start_load(&mut self) {
        let opts = self.state.options.load.clone();
        info!("UI: Load requested source={}", opts.source);
        let progress = GuiProgress::new(Arc::clone(&self.status));
        self.pending = Some(PendingLoad::spawn(opts, progress));
    }

    /// Collect the load result once it is there.
    fn poll_load(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.pending.as_mut() else { return };

        match pending.try_take() {
            None => ctx.request_repaint_after(Duration::from_millis(LOAD_POLL_MS)),
            Some(result) => {
                self.pending = None;
                match result {
                    Ok(ds) => {
                        self.facets = FacetOptions::collect(&ds);
                        self.controller = SearchController::new(Arc::new(ds));
                    }
                    Err(e) => {
                        // Keep nothing from a previous load; the board goes blank.
                        error!("UI: Load failed: {e}");
                        self.facets = FacetOptions::default();
                        self.controller = SearchController::default();
                        self.status(format!("Error: {e}"));
                    }
                }
                self.refresh();
            }
        }
    }

    /* ---------- view ---------- */

    /// Re-run the search over the full dataset and replace what is shown.
    pub fn refresh(&mut self) {
        let criteria = &mut self.state.options.criteria;
        criteria.query = self.state.gui.query.clone();
        let sort = self.state.options.sort;

        self.view = if criteria.is_query_only() && sort == SortKey::Source {
            self.controller.on_input(&criteria.query, &mut self.board)
        } else {
            self.controller.apply(criteria, sort, &mut self.board)
        };
        self.glance_rows = glance::rows(self.controller.dataset(), &self.view);
    }

    /// Clear every facet (the text query stays).
    pub fn reset_facets(&mut self) {
        self.state.options.criteria = Default::default();
        self.state.options.sort = SortKey::Source;
        self.refresh();
        info!("UI: Facets reset");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load(ctx);

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            components::search_bar::draw(ui, self);
            components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        if self.state.gui.show_filters {
            egui::SidePanel::left("filters")
                .resizable(false)
                .show(ctx, |ui| {
                    components::filter_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
