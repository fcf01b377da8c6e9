// src/filter.rs
//! Filter predicate and the derived view over a dataset.
//!
//! Every function here takes the *full* dataset and returns a fresh result;
//! nothing narrows a previous result. The text query is a case-insensitive
//! substring test against Name or Manufacturer. Facets in `Criteria` are
//! optional extras and all default to "off".

use std::cmp::Ordering;

use crate::record::{ field, Dataset, Record };

/* ---------------- Text query ---------------- */

/// Does `record` match `query`? Empty query matches everything; an absent
/// searchable field simply doesn't match.
pub fn matches_query(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_lowered(record, &query.to_lowercase())
}

fn matches_lowered(record: &Record, q: &str) -> bool {
    field::SEARCHABLE.iter().any(|f| {
        record
            .get(f)
            .map(|v| v.to_lowercase().contains(q))
            .unwrap_or(false)
    })
}

/// Ordered sub-sequence of `dataset` matching `query`.
pub fn filter_records<'a>(dataset: &'a Dataset, query: &str) -> Vec<&'a Record> {
    FilteredView::query(dataset, query)
        .row_ix
        .into_iter()
        .filter_map(|ix| dataset.get(ix))
        .collect()
}

/* ---------------- Facets ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum YesNo {
    #[default]
    Any,
    Yes,
    No,
}

impl YesNo {
    fn accepts(self, value: Option<&str>) -> bool {
        let want = match self {
            YesNo::Any => return true,
            YesNo::Yes => "yes",
            YesNo::No => "no",
        };
        value.is_some_and(|v| v.trim().eq_ignore_ascii_case(want))
    }

    pub fn label(self) -> &'static str {
        match self {
            YesNo::Any => "All",
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

/// Inclusive numeric bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max { Self { min, max } } else { Self { min: max, max: min } }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Criteria {
    pub query: String,
    pub manufacturer: Option<String>,
    pub grades: Vec<String>,
    pub rechargeable: YesNo,
    pub batteries: YesNo,
    pub available_only: bool,
    pub price: Option<Range>,
    pub min_age: Option<Range>,
}

impl Criteria {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }

    /// True when no facet is active (only the text query applies).
    pub fn is_query_only(&self) -> bool {
        Self { query: self.query.clone(), ..Self::default() } == *self
    }

    fn accepts(&self, r: &Record, q_lower: &str) -> bool {
        if !q_lower.is_empty() && !matches_lowered(r, q_lower) {
            return false;
        }
        if let Some(m) = &self.manufacturer {
            if r.get(field::MANUFACTURER) != Some(m.as_str()) {
                return false;
            }
        }
        if !self.grades.is_empty() {
            let g = r.get(field::MIN_GRADE_LEVEL).map(str::trim);
            if !g.is_some_and(|g| self.grades.iter().any(|s| s == g)) {
                return false;
            }
        }
        if !self.rechargeable.accepts(r.get(field::RECHARGEABLE))
            || !self.batteries.accepts(r.get(field::BATTERIES))
        {
            return false;
        }
        if self.available_only && !YesNo::Yes.accepts(r.get(field::SET_AVAILABLE)) {
            return false;
        }
        if let Some(range) = self.price {
            if !price_of(r).is_some_and(|p| range.contains(p)) {
                return false;
            }
        }
        if let Some(range) = self.min_age {
            if !min_age_of(r).is_some_and(|a| range.contains(a)) {
                return false;
            }
        }
        true
    }
}

/* ---------------- Sorting ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// File order
    #[default]
    Source,
    Price,
    MinAge,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Source, SortKey::Price, SortKey::MinAge, SortKey::Name];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Source => "Sheet order",
            SortKey::Price => "Price",
            SortKey::MinAge => "Min Age",
            SortKey::Name => "Name",
        }
    }
}

/// Numbers first (ascending), unparseable last.
fn cmp_numeric(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/* ---------------- Numeric fields ---------------- */

/// "$1,299.00" → 1299.0. `None` when blank or not a number.
pub fn parse_money(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn price_of(r: &Record) -> Option<f64> {
    r.get(field::PRICE).and_then(parse_money)
}

pub fn min_age_of(r: &Record) -> Option<f64> {
    r.get(field::MIN_AGE)
        .and_then(|v| v.trim().trim_end_matches('+').parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Ordering key for grade levels: PK < K < 1 < 2 < … < anything else.
pub fn grade_rank(g: &str) -> (u32, String) {
    let g = g.trim();
    if g.eq_ignore_ascii_case("PK") || g.eq_ignore_ascii_case("Pre-K") {
        (0, s!())
    } else if g.eq_ignore_ascii_case("K") {
        (1, s!())
    } else if let Ok(n) = g.parse::<u32>() {
        (n.saturating_add(2), s!())
    } else {
        (u32::MAX, g.to_ascii_lowercase())
    }
}

/* ---------------- View ---------------- */

/// Indices into the full dataset selected by the current criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredView {
    pub row_ix: Vec<usize>,
}

impl FilteredView {
    /// Everything, in file order.
    pub fn all(dataset: &Dataset) -> Self {
        Self { row_ix: (0..dataset.len()).collect() }
    }

    /// Text query only. Single pass, order-preserving.
    pub fn query(dataset: &Dataset, query: &str) -> Self {
        let q = query.to_lowercase();
        let row_ix = dataset
            .iter()
            .enumerate()
            .filter(|(_, r)| q.is_empty() || matches_lowered(r, &q))
            .map(|(ix, _)| ix)
            .collect();
        Self { row_ix }
    }

    /// Query + facets, then the requested ordering.
    pub fn apply(dataset: &Dataset, criteria: &Criteria, sort: SortKey) -> Self {
        let q = criteria.query.to_lowercase();
        let mut view = Self {
            row_ix: dataset
                .iter()
                .enumerate()
                .filter(|(_, r)| criteria.accepts(r, &q))
                .map(|(ix, _)| ix)
                .collect(),
        };
        view.sort(dataset, sort);
        view
    }

    /// Stable reorder of the selected rows.
    pub fn sort(&mut self, dataset: &Dataset, key: SortKey) {
        let rec = |ix: &usize| dataset.get(*ix);
        match key {
            SortKey::Source => {}
            SortKey::Price => self
                .row_ix
                .sort_by(|a, b| cmp_numeric(rec(a).and_then(price_of), rec(b).and_then(price_of))),
            SortKey::MinAge => self
                .row_ix
                .sort_by(|a, b| cmp_numeric(rec(a).and_then(min_age_of), rec(b).and_then(min_age_of))),
            SortKey::Name => self.row_ix.sort_by_cached_key(|ix| {
                rec(ix)
                    .and_then(Record::name)
                    .map(str::to_lowercase)
                    .unwrap_or_default()
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.row_ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    pub fn records<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Record> + 'a {
        self.row_ix.iter().filter_map(move |&ix| dataset.get(ix))
    }
}

/* ---------------- Facet options ---------------- */

/// Choices offered by the facet controls, collected from the dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacetOptions {
    pub manufacturers: Vec<String>,
    pub grades: Vec<String>,
    pub price: Option<Range>,
    pub min_age: Option<Range>,
}

impl FacetOptions {
    pub fn collect(dataset: &Dataset) -> Self {
        let mut manufacturers: Vec<String> = dataset
            .iter()
            .filter_map(Record::manufacturer)
            .map(str::to_owned)
            .collect();
        manufacturers.sort();
        manufacturers.dedup();

        let mut grades: Vec<String> = dataset
            .iter()
            .filter_map(|r| r.truthy(field::MIN_GRADE_LEVEL))
            .map(|g| g.trim().to_owned())
            .filter(|g| !g.is_empty())
            .collect();
        // Same-rank spellings (PK / Pre-K) may interleave, so order fully first.
        grades.sort_by_cached_key(|g| (grade_rank(g), g.clone()));
        grades.dedup();

        Self {
            manufacturers,
            grades,
            price: bounds(dataset.iter().filter_map(price_of)),
            min_age: bounds(dataset.iter().filter_map(min_age_of)),
        }
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<Range> {
    values.fold(None, |acc: Option<Range>, v| match acc {
        None => Some(Range { min: v, max: v }),
        Some(r) => Some(Range { min: r.min.min(v), max: r.max.max(v) }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_parsing() {
        assert_eq!(parse_money("$1,299.50"), Some(1299.5));
        assert_eq!(parse_money(" 199 "), Some(199.0));
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("call for quote"), None);
    }

    #[test]
    fn grade_ordering() {
        let mut gs = vec!["3", "K", "10", "PK", "2", "Middle"];
        gs.sort_by_key(|g| grade_rank(g));
        assert_eq!(gs, vec!["PK", "K", "2", "3", "10", "Middle"]);
    }

    #[test]
    fn yes_no_is_case_insensitive() {
        assert!(YesNo::Yes.accepts(Some(" yes")));
        assert!(!YesNo::No.accepts(Some("Yes")));
        assert!(!YesNo::No.accepts(None));
        assert!(YesNo::Any.accepts(None));
    }

    #[test]
    fn range_normalizes_bounds() {
        let r = Range::new(10.0, 2.0);
        assert!(r.contains(2.0) && r.contains(10.0));
        assert!(!r.contains(10.5));
    }

    fn sheet() -> Dataset {
        Dataset {
            headers: Vec::new(),
            records: vec![
                record! {
                    "Name" => "Bee-Bot", "Manufacturer" => "TTS", "Price" => "$89.95",
                    "Min Grade Level" => "PK", "Min Age" => "3", "Rechargeable" => "Yes",
                    "Batteries" => "No", "Set Available" => "Yes",
                },
                record! {
                    "Name" => "Dash", "Manufacturer" => "Wonder Workshop", "Price" => "$149.99",
                    "Min Grade Level" => "K", "Min Age" => "6+", "Rechargeable" => "yes",
                    "Batteries" => "no", "Set Available" => "No",
                },
                record! {
                    "Name" => "cubetto", "Manufacturer" => "Primo Toys", "Price" => "call",
                    "Min Grade Level" => "Pre-K", "Rechargeable" => "No", "Batteries" => "Yes",
                },
                record! {
                    "Name" => "Cue", "Manufacturer" => "Wonder Workshop", "Price" => "$89.95",
                    "Min Grade Level" => "PK", "Min Age" => "11", "Rechargeable" => "Yes",
                    "Batteries" => "No", "Set Available" => " yes",
                },
            ],
            warnings: Vec::new(),
        }
    }

    fn names(ds: &Dataset, view: &FilteredView) -> Vec<String> {
        view.records(ds).filter_map(Record::name).map(str::to_owned).collect()
    }

    fn pick(criteria: Criteria) -> Vec<String> {
        let ds = sheet();
        names(&ds, &FilteredView::apply(&ds, &criteria, SortKey::Source))
    }

    #[test]
    fn default_criteria_equal_bare_query() {
        let ds = sheet();
        for q in ["", "wonder", "CUB", "zzz"] {
            let bare = FilteredView::query(&ds, q);
            let applied = FilteredView::apply(&ds, &Criteria::with_query(q), SortKey::Source);
            assert_eq!(bare, applied, "query {q:?}");
        }
    }

    #[test]
    fn facets_only_narrow() {
        assert_eq!(
            pick(Criteria { manufacturer: Some(s!("Wonder Workshop")), ..Criteria::default() }),
            vec!["Dash", "Cue"]
        );
        assert_eq!(
            pick(Criteria { grades: vec![s!("PK"), s!("Pre-K")], ..Criteria::default() }),
            vec!["Bee-Bot", "cubetto", "Cue"]
        );
        assert_eq!(pick(Criteria { rechargeable: YesNo::Yes, ..Criteria::default() }), vec!["Bee-Bot", "Dash", "Cue"]);
        assert_eq!(pick(Criteria { batteries: YesNo::Yes, ..Criteria::default() }), vec!["cubetto"]);
        assert_eq!(pick(Criteria { available_only: true, ..Criteria::default() }), vec!["Bee-Bot", "Cue"]);
        assert_eq!(
            pick(Criteria { min_age: Some(Range::new(3.0, 6.0)), ..Criteria::default() }),
            vec!["Bee-Bot", "Dash"]
        );
        assert_eq!(
            pick(Criteria { price: Some(Range::new(0.0, 100.0)), ..Criteria::default() }),
            vec!["Bee-Bot", "Cue"]
        );

        // query and facets combine; the result is a subset of the bare query
        let both = pick(Criteria { available_only: true, ..Criteria::with_query("wonder") });
        assert_eq!(both, vec!["Cue"]);
        let ds = sheet();
        let bare = names(&ds, &FilteredView::query(&ds, "wonder"));
        assert!(both.iter().all(|n| bare.contains(n)));
    }

    #[test]
    fn sorts_are_stable_with_unparseable_last() {
        let ds = sheet();
        let all = Criteria::default();
        let by = |key| names(&ds, &FilteredView::apply(&ds, &all, key));

        assert_eq!(by(SortKey::Source), vec!["Bee-Bot", "Dash", "cubetto", "Cue"]);
        // Bee-Bot and Cue tie on price: file order kept
        assert_eq!(by(SortKey::Price), vec!["Bee-Bot", "Cue", "Dash", "cubetto"]);
        assert_eq!(by(SortKey::MinAge), vec!["Bee-Bot", "Dash", "Cue", "cubetto"]);
        assert_eq!(by(SortKey::Name), vec!["Bee-Bot", "cubetto", "Cue", "Dash"]);
    }

    #[test]
    fn facet_options_are_distinct_and_ordered() {
        let mut ds = sheet();
        ds.records.push(record! { "Name" => "Mouse", "Manufacturer" => "TTS", "Min Grade Level" => "PK " });
        let f = FacetOptions::collect(&ds);
        assert_eq!(f.manufacturers, vec!["Primo Toys", "TTS", "Wonder Workshop"]);
        assert_eq!(f.grades, vec!["PK", "Pre-K", "K"]);
        assert_eq!(f.price, Some(Range { min: 89.95, max: 149.99 }));
        assert_eq!(f.min_age, Some(Range { min: 3.0, max: 11.0 }));
    }

    #[test]
    fn query_only_detection() {
        assert!(Criteria::with_query("robo").is_query_only());
        let c = Criteria { available_only: true, ..Criteria::default() };
        assert!(!c.is_query_only());
    }
}
