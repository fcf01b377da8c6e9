// src/controller.rs
//! Input controller: search text in, full re-render out.
//!
//! Holds the immutable dataset and nothing else. Every call filters the
//! full dataset from scratch, builds fresh cards and hands them to the
//! display, so there is no intermediate state to go stale.

use std::sync::Arc;

use tracing::debug;

use crate::filter::{ Criteria, FilteredView, SortKey };
use crate::record::Dataset;
use crate::render::{ render_cards, Display };

#[derive(Clone, Debug, Default)]
pub struct SearchController {
    dataset: Arc<Dataset>,
}

impl SearchController {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Initial state: every record, file order.
    pub fn show_all(&self, display: &mut dyn Display) -> FilteredView {
        let view = FilteredView::all(&self.dataset);
        self.present(&view, display);
        view
    }

    /// One input event: the current value of the search box.
    pub fn on_input(&self, value: &str, display: &mut dyn Display) -> FilteredView {
        let view = FilteredView::query(&self.dataset, value);
        debug!("Search: {:?} → {}/{}", value, view.len(), self.dataset.len());
        self.present(&view, display);
        view
    }

    /// Query plus facets and ordering.
    pub fn apply(&self, criteria: &Criteria, sort: SortKey, display: &mut dyn Display) -> FilteredView {
        let view = FilteredView::apply(&self.dataset, criteria, sort);
        debug!(
            "Search: {:?} facets={} sort={:?} → {}/{}",
            criteria.query,
            !criteria.is_query_only(),
            sort,
            view.len(),
            self.dataset.len()
        );
        self.present(&view, display);
        view
    }

    fn present(&self, view: &FilteredView, display: &mut dyn Display) {
        display.replace_all(render_cards(view.records(&self.dataset)));
    }
}
