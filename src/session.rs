//! Browse session: filter state management for one catalog page
//!
//! A `BrowseSession` owns the mutable filter/sort state for a single list
//! view over one immutable collection. All updates flow through named
//! setters; consumers only ever see read-only query results. Re-running
//! `results()` against unchanged state yields an identical ordering.

use std::collections::BTreeSet;

use crate::catalog::CatalogEntry;
use crate::engine::{self, FilterCriteria, QueryOutcome, SortKey, ALL_CATEGORIES};

/// Mutable filter/sort state bound to one collection for the page lifetime.
#[derive(Debug)]
pub struct BrowseSession<'a> {
    collection: &'a [CatalogEntry],
    criteria: FilterCriteria,
    sort: SortKey,
}

impl<'a> BrowseSession<'a> {
    /// Start a session with no constraints and Featured ordering.
    pub fn new(collection: &'a [CatalogEntry]) -> Self {
        Self {
            collection,
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
        }
    }

    /// Start a session seeded from navigation query parameters, the way the
    /// list pages read their URL: `search`, `category`, `framework` (or
    /// `tool` for automations), and `ai=true`. Unknown keys are ignored.
    pub fn seeded(collection: &'a [CatalogEntry], params: &[(&str, &str)]) -> Self {
        let mut session = Self::new(collection);
        for (key, value) in params {
            match *key {
                "search" => session.criteria.search = (*value).to_string(),
                "category" => {
                    session.criteria.categories.insert((*value).to_string());
                }
                "framework" | "tool" => {
                    session.criteria.platforms.insert((*value).to_string());
                }
                "ai" => session.criteria.ai_ready_only = *value == "true",
                _ => {}
            }
        }
        session
    }

    /// Current criteria, read-only.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Replace the search text. Empty text removes the constraint.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
    }

    /// Toggle a category selection on or off.
    pub fn toggle_category(&mut self, label: &str) {
        Self::toggle(&mut self.criteria.categories, label);
    }

    /// Toggle a framework/tool selection on or off.
    pub fn toggle_platform(&mut self, label: &str) {
        Self::toggle(&mut self.criteria.platforms, label);
    }

    /// Toggle a price-type/difficulty selection on or off.
    pub fn toggle_tier(&mut self, label: &str) {
        Self::toggle(&mut self.criteria.tiers, label);
    }

    pub fn set_ai_ready_only(&mut self, on: bool) {
        self.criteria.ai_ready_only = on;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Set the sort from a user-supplied label; unknown labels degrade to
    /// Featured.
    pub fn set_sort_label(&mut self, label: &str) {
        self.sort = SortKey::parse(label);
    }

    /// The one-click reset behind the "no results" empty state. Clears every
    /// filter; the sort selection is kept.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Heading label for the current view: the category when exactly one is
    /// selected, otherwise "All".
    pub fn heading_category(&self) -> &str {
        if self.criteria.categories.len() == 1 {
            self.criteria
                .categories
                .iter()
                .next()
                .map(String::as_str)
                .unwrap_or(ALL_CATEGORIES)
        } else {
            ALL_CATEGORIES
        }
    }

    /// Run the query engine against the current state.
    pub fn results(&self) -> QueryOutcome<'a> {
        engine::query(self.collection, &self.criteria, self.sort)
    }

    fn toggle(set: &mut BTreeSet<String>, value: &str) {
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }
}
