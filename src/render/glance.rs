// src/render/glance.rs
//! "Details at a glance": one flat row per robot, cheapest first.

use crate::config::consts::PLACEHOLDER;
use crate::core::format::money_or_placeholder;
use crate::core::sanitize::normalize_ws;
use crate::filter::{ FilteredView, SortKey };
use crate::record::{ field, Dataset, Record };

pub const COLUMNS: [&str; 9] = [
    field::NAME,
    field::MANUFACTURER,
    field::PRICE,
    field::MIN_GRADE_LEVEL,
    field::RECHARGEABLE,
    field::BATTERIES,
    field::SET_AVAILABLE,
    field::MAX_USERS,
    field::DEVICE_REQUIRED,
];

/// Column widths for the on-screen table (px-ish).
pub const COLUMN_WIDTHS: [f32; 9] = [180.0, 160.0, 80.0, 110.0, 100.0, 80.0, 100.0, 80.0, 120.0];

pub fn headers() -> Vec<String> {
    COLUMNS.iter().map(|c| s!(*c)).collect()
}

pub fn row_for(r: &Record) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|&c| {
            if c == field::PRICE {
                money_or_placeholder(r.get(c))
            } else {
                normalize_ws(r.value_or(c, PLACEHOLDER))
            }
        })
        .collect()
}

/// Rows for `view`, re-ordered by price (ascending, unparseable last).
/// The view itself is left untouched.
pub fn rows(dataset: &Dataset, view: &FilteredView) -> Vec<Vec<String>> {
    let mut by_price = view.clone();
    by_price.sort(dataset, SortKey::Price);
    by_price.records(dataset).map(row_for).collect()
}
