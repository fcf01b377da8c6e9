// src/record.rs
//! Record normalizer and the in-memory dataset.
//!
//! A `Record` is a plain field-name → raw-string mapping. Header-to-cell
//! association is strictly positional; nothing here parses numbers or
//! booleans. Display code decides what an empty value looks like.

use std::collections::HashMap;
use std::fmt;

use tracing::{ debug, warn };

use crate::csv::{ self, HeaderMode, SourceRow };

/// Field names observed in the robots sheet.
pub mod field {
    pub const NAME: &str = "Name";
    pub const MANUFACTURER: &str = "Manufacturer";
    pub const PRICE: &str = "Price";
    pub const SET_AVAILABLE: &str = "Set Available";
    pub const SET_SIZE: &str = "Set size";
    pub const PURCHASE_WEBSITE: &str = "Purchase Website";
    pub const MANUFACTURER_WEBSITE: &str = "Manufacturer Website";
    pub const MIN_GRADE_LEVEL: &str = "Min Grade Level";
    pub const MIN_AGE: &str = "Min Age";
    pub const MAX_USERS: &str = "Max Users";
    pub const PRICE_PER_SET: &str = "Price per Classroom Set";
    pub const RECHARGEABLE: &str = "Rechargeable";
    pub const BATTERIES: &str = "Batteries";
    pub const DEVICE_REQUIRED: &str = "Device Required";
    pub const AUDITORY_ACCESSIBILITY: &str = "Auditory Accessibility";
    pub const VISUAL_ACCESSIBILITY: &str = "Visual Accessibility";
    pub const DESCRIPTION: &str = "Description";
    pub const IMAGE: &str = "Image";

    pub const ALL: [&str; 18] = [
        NAME,
        MANUFACTURER,
        PRICE,
        SET_AVAILABLE,
        SET_SIZE,
        PURCHASE_WEBSITE,
        MANUFACTURER_WEBSITE,
        MIN_GRADE_LEVEL,
        MIN_AGE,
        MAX_USERS,
        PRICE_PER_SET,
        RECHARGEABLE,
        BATTERIES,
        DEVICE_REQUIRED,
        AUDITORY_ACCESSIBILITY,
        VISUAL_ACCESSIBILITY,
        DESCRIPTION,
        IMAGE,
    ];

    /// Fields the text query is matched against.
    pub const SEARCHABLE: [&str; 2] = [NAME, MANUFACTURER];

    /// The known spelling of `name`, ignoring case.
    pub fn canonical(name: &str) -> Option<&'static str> {
        ALL.iter().copied().find(|f| f.eq_ignore_ascii_case(name))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Raw value, `None` when the field is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value when present and non-empty.
    pub fn truthy(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Value, or `fallback` when absent or empty.
    pub fn value_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.truthy(name).unwrap_or(fallback)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn name(&self) -> Option<&str> {
        self.truthy(field::NAME)
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.truthy(field::MANUFACTURER)
    }
}

/// A data row whose cell count did not match the header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowWarning {
    /// 1-based line in the source text
    pub line: u64,
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = if self.found < self.expected { "missing" } else { "extra" };
        write!(
            f,
            "line {}: {} cells for {} headers ({} values {})",
            self.line,
            self.found,
            self.expected,
            self.expected.abs_diff(self.found),
            what
        )
    }
}

/// Zip one row against the headers. Empty header names never become keys,
/// the first of duplicate names wins, overflow cells are ignored and
/// missing trailing cells stay absent.
pub fn normalize_row<S: AsRef<str>>(headers: &[String], cells: &[S]) -> Record {
    let mut r = Record::default();
    for (name, cell) in headers.iter().zip(cells) {
        if name.is_empty() || r.contains(name) {
            continue;
        }
        r.insert(name.as_str(), cell.as_ref());
    }
    r
}

/// Header names as used for keys: trimmed, in column order. Known fields
/// take their canonical spelling (`name` → `Name`); others stay as written.
pub fn clean_headers<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|h| {
            let h = h.as_ref().trim();
            s!(field::canonical(h).unwrap_or(h))
        })
        .collect()
}

/// Full ordered dataset, built once per load and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    pub warnings: Vec<RowWarning>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-split header + data rows.
    pub fn from_rows(header: &[String], data: &[SourceRow], drop_incomplete: bool) -> Self {
        let headers = clean_headers(header);
        let mut records = Vec::with_capacity(data.len());
        let mut warnings = Vec::new();
        let mut dropped = 0usize;

        for row in data {
            if row.cells.len() != headers.len() {
                let w = RowWarning { line: row.line, expected: headers.len(), found: row.cells.len() };
                warn!("Parse: {w}");
                warnings.push(w);
            }
            let rec = normalize_row(&headers, &row.cells);
            if drop_incomplete && (rec.name().is_none() || rec.manufacturer().is_none()) {
                dropped += 1;
                continue;
            }
            records.push(rec);
        }

        if dropped > 0 {
            debug!("Parse: dropped {dropped} record(s) without Name/Manufacturer");
        }

        Self { headers, records, warnings }
    }

    /// Parse CSV text into a dataset. Empty text gives an empty dataset.
    pub fn parse(text: &str, mode: HeaderMode, drop_incomplete: bool) -> Result<Self, ::csv::Error> {
        let rows = csv::parse_rows(text)?;
        let Some((header, data)) = csv::split_header(rows, mode) else {
            debug!("Parse: no header row ({})", mode.label());
            return Ok(Self::empty());
        };
        Ok(Self::from_rows(&header.cells, &data, drop_incomplete))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, ix: usize) -> Option<&Record> {
        self.records.get(ix)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
