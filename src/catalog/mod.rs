//! Catalog data model and read-only store.

pub mod entry;
pub mod store;

pub use entry::{
    AutomationDetails, CatalogEntry, Category, Difficulty, EntryKind, PriceType, Review, StepKind,
    Tool, RELATED_CAP,
};
pub use store::{CatalogStore, CategoryInfo, Detail};
