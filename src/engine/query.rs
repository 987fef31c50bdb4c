//! Catalog query engine
//!
//! Pure filter/sort pipeline over one catalog collection. The engine never
//! mutates its input: filtering collects references and sorting reorders the
//! collected list. Repeated invocations with the same inputs yield identical
//! output (all sorts are stable, ties keep original collection order).

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::catalog::CatalogEntry;
use crate::engine::criteria::FilterCriteria;
use crate::engine::freshness;

/// Minimum rating for an entry to surface as a featured pick.
pub const FEATURED_RATING_FLOOR: f32 = 4.8;

/// Maximum number of featured picks surfaced above the grid.
pub const FEATURED_PICKS_CAP: usize = 3;

/// Result ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortKey {
    /// Original collection order (curation order is the feature ranking)
    #[default]
    Featured,
    /// Descending review count
    MostPopular,
    /// Descending rating
    HighestRated,
    /// Best-effort recency of the `lastUpdated` display string
    Newest,
}

impl SortKey {
    /// Parse a user-supplied sort label. Unknown labels degrade to
    /// [`SortKey::Featured`] rather than failing the whole render.
    pub fn parse(label: &str) -> SortKey {
        match label.trim().to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "mostpopular" | "popular" => SortKey::MostPopular,
            "highestrated" | "rating" => SortKey::HighestRated,
            "newest" => SortKey::Newest,
            _ => SortKey::Featured,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::MostPopular => "Most Popular",
            SortKey::HighestRated => "Highest Rated",
            SortKey::Newest => "Newest",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered query result plus its derived featured-picks view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutcome<'a> {
    /// The full filtered, sorted result
    pub items: Vec<&'a CatalogEntry>,

    /// Subsequence of `items` with rating >= [`FEATURED_RATING_FLOOR`],
    /// capped at [`FEATURED_PICKS_CAP`]. Picks also remain in `items`; the
    /// spotlight row duplicates rather than removes them.
    pub featured_picks: Vec<&'a CatalogEntry>,
}

impl QueryOutcome<'_> {
    /// Zero matches. A normal output state, not an error: render "no results"
    /// with a filter-reset affordance.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Filter a collection by `criteria` and order the survivors by `sort`.
pub fn query<'a>(
    collection: &'a [CatalogEntry],
    criteria: &FilterCriteria,
    sort: SortKey,
) -> QueryOutcome<'a> {
    let mut items: Vec<&CatalogEntry> =
        collection.iter().filter(|e| criteria.matches(e)).collect();
    sort_items(&mut items, sort);

    let featured_picks = items
        .iter()
        .copied()
        .filter(|e| e.rating >= FEATURED_RATING_FLOOR)
        .take(FEATURED_PICKS_CAP)
        .collect();

    debug!(
        total = collection.len(),
        matched = items.len(),
        sort = %sort,
        "query evaluated"
    );
    QueryOutcome {
        items,
        featured_picks,
    }
}

/// Stable in-place sort of the filtered references.
fn sort_items(items: &mut [&CatalogEntry], sort: SortKey) {
    match sort {
        SortKey::Featured => {}
        SortKey::HighestRated => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::MostPopular => items.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortKey::Newest => items.sort_by_key(|e| freshness::age_rank(&e.last_updated)),
    }
}
