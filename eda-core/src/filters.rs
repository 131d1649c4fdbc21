//! Filter vocabulary, user selection and the store that holds both.
//!
//! The store owns one explicit copy of the filter state. Selections are
//! replaced wholesale per facet; the selector UI is responsible for working
//! out the new sequence (add, remove, reorder) before handing it over.

use crate::facet::{Facet, FacetValue, FilterOption};
use crate::query::CanonicalQuery;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `GET /filters/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiltersResponse {
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub pack_types: Vec<String>,
    #[serde(default)]
    pub ppgs: Vec<String>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub years: Vec<i64>,
    #[serde(default)]
    pub months: Vec<i64>,
}

/// Options available per facet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    options: BTreeMap<Facet, Vec<FilterOption>>,
}

impl Vocabulary {
    pub fn options(&self, facet: Facet) -> &[FilterOption] {
        self.options.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of options across all facets.
    pub fn len(&self) -> usize {
        self.options.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<FiltersResponse> for Vocabulary {
    fn from(raw: FiltersResponse) -> Self {
        let text = |values: Vec<String>| -> Vec<FilterOption> {
            values
                .into_iter()
                .map(|v| FilterOption::plain(FacetValue::Text(v)))
                .collect()
        };

        let mut options = BTreeMap::new();
        options.insert(Facet::Brand, text(raw.brands));
        options.insert(Facet::PackType, text(raw.pack_types));
        options.insert(Facet::Ppg, text(raw.ppgs));
        options.insert(Facet::Channel, text(raw.channels));
        options.insert(
            Facet::Year,
            raw.years
                .into_iter()
                .map(|y| FilterOption::plain(FacetValue::Number(y)))
                .collect(),
        );
        options.insert(
            Facet::Month,
            raw.months.into_iter().map(FilterOption::month).collect(),
        );
        Self { options }
    }
}

/// Chosen options per facet, in click order. An empty facet means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    chosen: BTreeMap<Facet, Vec<FilterOption>>,
}

impl Selection {
    pub fn get(&self, facet: Facet) -> &[FilterOption] {
        self.chosen.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the whole sequence for one facet.
    pub fn set(&mut self, facet: Facet, items: Vec<FilterOption>) {
        if items.is_empty() {
            self.chosen.remove(&facet);
        } else {
            self.chosen.insert(facet, items);
        }
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// True when no facet has anything selected.
    pub fn is_empty(&self) -> bool {
        self.chosen.values().all(Vec::is_empty)
    }
}

/// Vocabulary plus current selection.
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    vocabulary: Vocabulary,
    selection: Selection,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the vocabulary fetched at startup.
    pub fn set_vocabulary(&mut self, vocabulary: Vocabulary) {
        log::info!("filters: vocabulary loaded with {} options", vocabulary.len());
        self.vocabulary = vocabulary;
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace a facet's selection and return the query it implies.
    ///
    /// Items are not checked against the vocabulary.
    pub fn set_selection(&mut self, facet: Facet, items: Vec<FilterOption>) -> CanonicalQuery {
        log::debug!("filters: {} -> {} selected", facet, items.len());
        self.selection.set(facet, items);
        self.query()
    }

    /// Clear every facet and return the (empty) query.
    pub fn reset_all(&mut self) -> CanonicalQuery {
        self.selection.clear();
        self.query()
    }

    pub fn query(&self) -> CanonicalQuery {
        CanonicalQuery::derive(&self.selection)
    }
}
