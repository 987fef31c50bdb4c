//! Catalog query engine: filter criteria, sorting, and derived views.

pub mod criteria;
mod freshness;
pub mod query;

pub use criteria::{FilterCriteria, ALL_CATEGORIES};
pub use query::{query, QueryOutcome, SortKey, FEATURED_PICKS_CAP, FEATURED_RATING_FLOOR};
