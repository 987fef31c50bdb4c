//! Filter criteria
//!
//! The active combination of search text, category, framework/tool,
//! price-type/difficulty, and AI-ready selections. Every field left empty
//! imposes no constraint; active predicates combine conjunctively.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::CatalogEntry;

/// Selecting this category label is equivalent to selecting none.
pub const ALL_CATEGORIES: &str = "All";

/// User-selected filter state for one catalog collection.
///
/// Set-valued fields are `BTreeSet`s so iteration order (and therefore any
/// serialized form) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and short description
    #[serde(default)]
    pub search: String,

    /// Selected category labels; empty or containing [`ALL_CATEGORIES`]
    /// means no constraint
    #[serde(default)]
    pub categories: BTreeSet<String>,

    /// Selected frameworks (boilerplates) or tools (automations)
    #[serde(default)]
    pub platforms: BTreeSet<String>,

    /// Selected price types (boilerplates) or difficulties (automations)
    #[serde(default)]
    pub tiers: BTreeSet<String>,

    /// Keep only AI-ready entries
    #[serde(default)]
    pub ai_ready_only: bool,
}

impl FilterCriteria {
    /// True when no predicate is active at all.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && !self.category_filter_active()
            && self.platforms.is_empty()
            && self.tiers.is_empty()
            && !self.ai_ready_only
    }

    /// Whether the category set actually constrains anything.
    fn category_filter_active(&self) -> bool {
        !self.categories.is_empty() && !self.categories.contains(ALL_CATEGORIES)
    }

    /// Conjunctive filter predicate: the entry must satisfy every active
    /// criterion to be kept.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_title = entry.title.to_lowercase().contains(&needle);
            let in_description = entry.description.to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }

        if self.category_filter_active() && !self.categories.contains(entry.category.label()) {
            return false;
        }

        if !self.platforms.is_empty() && !self.platforms.contains(entry.platform_label()) {
            return false;
        }

        if self.ai_ready_only && !entry.ai_ready {
            return false;
        }

        if !self.tiers.is_empty() && !self.tiers.contains(entry.tier_label()) {
            return false;
        }

        true
    }
}
