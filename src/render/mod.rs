// src/render/mod.rs
//! Renderer: records → cards → some display.
//!
//! `Card` is the render-ready projection of a record with every placeholder
//! already applied, so the sinks (HTML, egui, tests) never look at raw
//! fields. Sinks implement `Display`; `replace_all` is the only place where
//! the visible list changes and it always swaps the whole list.

pub mod factsheet;
pub mod glance;
pub mod html;

use crate::config::consts::{ NO_LINK, PLACEHOLDER };
use crate::record::{ field, Record };

/// One label/value line inside the card's disclosure section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub manufacturer: String,
    pub price: String,
    /// "Grade: … | Age: …", only when either value is present
    pub grade_line: Option<String>,
    pub details: Vec<Detail>,
    pub description: String,
    /// Literal sheet value; `None` when the field is empty.
    pub purchase_url: Option<String>,
    pub manufacturer_url: Option<String>,
    /// Lowercased raw Name / Manufacturer (empty when absent), for
    /// re-filtering an already rendered list.
    pub name_key: String,
    pub manufacturer_key: String,
}

impl Card {
    pub fn from_record(r: &Record) -> Self {
        let v = |f: &str| s!(r.value_or(f, PLACEHOLDER));

        let grade_line = match (r.truthy(field::MIN_GRADE_LEVEL), r.truthy(field::MIN_AGE)) {
            (None, None) => None,
            (g, a) => Some(format!(
                "Grade: {} | Age: {}",
                g.unwrap_or(PLACEHOLDER),
                a.unwrap_or(PLACEHOLDER)
            )),
        };

        let set = format!(
            "{} ({})",
            r.value_or(field::SET_AVAILABLE, PLACEHOLDER),
            r.value_or(field::SET_SIZE, PLACEHOLDER)
        );

        let details = vec![
            Detail { label: "Set Available", value: set },
            Detail { label: "Max Users", value: v(field::MAX_USERS) },
            Detail { label: "Price per Classroom Set", value: v(field::PRICE_PER_SET) },
            Detail { label: "Rechargeable", value: v(field::RECHARGEABLE) },
            Detail { label: "Batteries", value: v(field::BATTERIES) },
            Detail { label: "Device Required", value: v(field::DEVICE_REQUIRED) },
            Detail { label: "Auditory Accessibility", value: v(field::AUDITORY_ACCESSIBILITY) },
            Detail { label: "Visual Accessibility", value: v(field::VISUAL_ACCESSIBILITY) },
        ];

        Self {
            title: v(field::NAME),
            manufacturer: v(field::MANUFACTURER),
            price: v(field::PRICE),
            grade_line,
            details,
            description: v(field::DESCRIPTION),
            purchase_url: r.truthy(field::PURCHASE_WEBSITE).map(str::to_owned),
            manufacturer_url: r.truthy(field::MANUFACTURER_WEBSITE).map(str::to_owned),
            name_key: r.get(field::NAME).map(str::to_lowercase).unwrap_or_default(),
            manufacturer_key: r.get(field::MANUFACTURER).map(str::to_lowercase).unwrap_or_default(),
        }
    }

    /// Same test as `filter::matches_query`, against the card's keys.
    /// An absent field has an empty key, which only the empty query matches.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        q.is_empty() || self.name_key.contains(&q) || self.manufacturer_key.contains(&q)
    }

    /// href for the purchase link (`#` when missing).
    pub fn purchase_href(&self) -> &str {
        self.purchase_url.as_deref().unwrap_or(NO_LINK)
    }

    pub fn manufacturer_href(&self) -> &str {
        self.manufacturer_url.as_deref().unwrap_or(NO_LINK)
    }
}

/// One card per record, same order.
pub fn render_cards<'a, I>(records: I) -> Vec<Card>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().map(Card::from_record).collect()
}

/// The display container. Implementations drop whatever they showed before
/// and show exactly `cards`.
pub trait Display {
    fn replace_all(&mut self, cards: Vec<Card>);
}

/// Keeps the cards in memory; the egui board draws from it and tests
/// inspect it.
#[derive(Clone, Debug, Default)]
pub struct CardBoard {
    cards: Vec<Card>,
    generation: u64,
}

impl CardBoard {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Bumped on every replace; lets the GUI reset per-card widget state.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.title.as_str()).collect()
    }
}

impl Display for CardBoard {
    fn replace_all(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.generation = self.generation.wrapping_add(1);
    }
}
