//! Read-only catalog store
//!
//! Holds the fixed, ordered collections the directory serves: boilerplates,
//! automations, blog posts, and category metadata. Parsed once from YAML
//! (the embedded dataset or an alternate file), validated, and never mutated
//! afterwards. Lookups are linear scans; the dataset is small and ordered,
//! and original order is load order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

use crate::blog::BlogPost;
use crate::catalog::entry::{CatalogEntry, EntryKind, RELATED_CAP};
use crate::error::{AtlasError, Result};

/// The dataset shipped with the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.yaml");

static SHARED: Lazy<CatalogStore> = Lazy::new(|| {
    CatalogStore::from_yaml(EMBEDDED_CATALOG).expect("embedded catalog dataset is well-formed")
});

/// On-disk shape of a catalog dataset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    #[allow(dead_code)]
    api_version: String,
    #[allow(dead_code)]
    kind: String,
    #[serde(default)]
    boilerplates: Vec<CatalogEntry>,
    #[serde(default)]
    automations: Vec<CatalogEntry>,
    #[serde(default)]
    posts: Vec<BlogPost>,
    #[serde(default)]
    categories: Vec<CategoryInfo>,
    #[serde(default)]
    automation_categories: Vec<CategoryInfo>,
}

/// Descriptive metadata for one category tile / browse header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Directory-wide listing count shown on the tile (editorial, not derived)
    pub count: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A resolved detail view: the entry plus its related items.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail<'a> {
    pub entry: &'a CatalogEntry,
    /// Same-collection neighbors sharing the entry's category (boilerplates)
    /// or tool (automations); excludes the entry itself, capped at
    /// [`RELATED_CAP`], original collection order.
    pub related: Vec<&'a CatalogEntry>,
}

/// Immutable catalog collections, loaded once.
#[derive(Debug)]
pub struct CatalogStore {
    boilerplates: Vec<CatalogEntry>,
    automations: Vec<CatalogEntry>,
    posts: Vec<BlogPost>,
    categories: Vec<CategoryInfo>,
    automation_categories: Vec<CategoryInfo>,
}

impl CatalogStore {
    /// The store backing the embedded dataset.
    pub fn shared() -> &'static CatalogStore {
        &SHARED
    }

    /// Parse and validate a dataset from YAML.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_yaml_ng::from_str(content)?;

        let store = Self {
            boilerplates: doc.boilerplates,
            automations: doc.automations,
            posts: doc.posts,
            categories: doc.categories,
            automation_categories: doc.automation_categories,
        };
        store.validate()?;

        debug!(
            boilerplates = store.boilerplates.len(),
            automations = store.automations.len(),
            posts = store.posts.len(),
            "catalog loaded"
        );
        Ok(store)
    }

    /// Load a dataset from an alternate YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// All starter-kit entries, original order.
    pub fn boilerplates(&self) -> &[CatalogEntry] {
        &self.boilerplates
    }

    /// All automation workflow entries, original order.
    pub fn automations(&self) -> &[CatalogEntry] {
        &self.automations
    }

    /// All blog posts, original order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Boilerplate category metadata.
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// Automation category metadata.
    pub fn automation_categories(&self) -> &[CategoryInfo] {
        &self.automation_categories
    }

    /// The collection for an entry kind.
    pub fn collection(&self, kind: EntryKind) -> &[CatalogEntry] {
        match kind {
            EntryKind::Boilerplate => &self.boilerplates,
            EntryKind::Automation => &self.automations,
        }
    }

    /// Look up an entry by id within one collection. Unknown id is a normal
    /// `None` outcome, never an error.
    pub fn entry(&self, kind: EntryKind, id: &str) -> Option<&CatalogEntry> {
        self.collection(kind).iter().find(|e| e.id == id)
    }

    /// Look up an entry by id across both collections, boilerplates first.
    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entry(EntryKind::Boilerplate, id)
            .or_else(|| self.entry(EntryKind::Automation, id))
    }

    /// Resolve a detail view: the entry plus its related items. Related items
    /// are never computed for a missing entry.
    pub fn detail(&self, kind: EntryKind, id: &str) -> Option<Detail<'_>> {
        let entry = self.entry(kind, id)?;
        Some(Detail {
            entry,
            related: self.related(entry),
        })
    }

    /// Same-collection entries sharing the category (boilerplates) or tool
    /// (automations), excluding the entry itself, capped at [`RELATED_CAP`].
    pub fn related<'a>(&'a self, entry: &CatalogEntry) -> Vec<&'a CatalogEntry> {
        let collection = self.collection(entry.kind());
        let matches_peer: Box<dyn Fn(&CatalogEntry) -> bool> = match &entry.automation {
            Some(details) => {
                let tool = details.tool;
                Box::new(move |peer: &CatalogEntry| {
                    peer.automation.as_ref().map(|d| d.tool) == Some(tool)
                })
            }
            None => {
                let category = entry.category;
                Box::new(move |peer: &CatalogEntry| peer.category == category)
            }
        };

        collection
            .iter()
            .filter(|peer| peer.id != entry.id && matches_peer(peer))
            .take(RELATED_CAP)
            .collect()
    }

    /// Browse-header blurb for a category label, when we have one.
    pub fn category_description(&self, label: &str) -> Option<&str> {
        self.categories
            .iter()
            .chain(self.automation_categories.iter())
            .find(|c| c.id == label)
            .map(|c| c.description.as_str())
    }

    /// Enforce dataset invariants. Review-count drift from the review list is
    /// tolerated (the counter is an independent display value) but logged.
    fn validate(&self) -> Result<()> {
        Self::validate_collection("boilerplates", &self.boilerplates, EntryKind::Boilerplate)?;
        Self::validate_collection("automations", &self.automations, EntryKind::Automation)?;

        let mut slugs = HashSet::new();
        for post in &self.posts {
            if !slugs.insert(post.slug.as_str()) {
                return Err(AtlasError::Catalog(format!(
                    "duplicate blog post slug '{}'",
                    post.slug
                )));
            }
        }
        Ok(())
    }

    fn validate_collection(
        name: &str,
        entries: &[CatalogEntry],
        expected: EntryKind,
    ) -> Result<()> {
        let mut ids = HashSet::new();
        for entry in entries {
            if !ids.insert(entry.id.as_str()) {
                return Err(AtlasError::Catalog(format!(
                    "duplicate id '{}' in {name}",
                    entry.id
                )));
            }
            if entry.kind() != expected {
                return Err(AtlasError::Catalog(format!(
                    "entry '{}' in {name} has kind {}",
                    entry.id,
                    entry.kind()
                )));
            }
            if !(0.0..=5.0).contains(&entry.rating) {
                return Err(AtlasError::Catalog(format!(
                    "entry '{}' has rating {} outside [0, 5]",
                    entry.id, entry.rating
                )));
            }
            for review in &entry.reviews {
                if !(1..=5).contains(&review.rating) {
                    return Err(AtlasError::Catalog(format!(
                        "review '{}' on entry '{}' has rating {} outside [1, 5]",
                        review.id, entry.id, review.rating
                    )));
                }
            }
            if entry.review_count as usize != entry.reviews.len() {
                warn!(
                    id = %entry.id,
                    review_count = entry.review_count,
                    reviews = entry.reviews.len(),
                    "review counter does not match review list; keeping counter as-is"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_yaml() -> &'static str {
        r##"
apiVersion: atlas.dev/v1
kind: Catalog
boilerplates:
  - id: bp-1
    title: Alpha Kit
    description: A SaaS starter.
    longDescription: Longer text.
    priceType: Paid
    price: "$10"
    lastUpdated: 2 days ago
    rating: 4.9
    reviewCount: 10
    author: Alpha
    imageUrl: "#"
    category: SaaS
    framework: Next.js
    aiReady: true
    demoUrl: "#"
    repoUrl: "#"
  - id: bp-2
    title: Beta Kit
    description: Another SaaS starter.
    longDescription: Longer text.
    priceType: Free
    price: Free
    lastUpdated: 1 week ago
    rating: 4.2
    reviewCount: 3
    author: Beta
    imageUrl: "#"
    category: SaaS
    framework: Vue
    aiReady: false
    demoUrl: "#"
    repoUrl: "#"
  - id: bp-3
    title: Gamma Dash
    description: A dashboard.
    longDescription: Longer text.
    priceType: Free
    price: Free
    lastUpdated: 1 day ago
    rating: 4.0
    reviewCount: 0
    author: Gamma
    imageUrl: "#"
    category: Dashboard
    framework: React
    aiReady: false
    demoUrl: "#"
    repoUrl: "#"
automations:
  - id: wf-1
    title: Lead Sync
    description: Sync leads.
    longDescription: Longer text.
    priceType: Free
    price: Free
    lastUpdated: 3 days ago
    rating: 4.8
    reviewCount: 5
    author: Wiz
    imageUrl: "#"
    category: Automation
    framework: n8n
    aiReady: false
    demoUrl: "#"
    repoUrl: "#"
    automation:
      tool: n8n
      difficulty: Beginner
      steps: ["Trigger: Form", "Action: Sync"]
  - id: wf-2
    title: Ticket Drafts
    description: Draft replies.
    longDescription: Longer text.
    priceType: Paid
    price: "$5"
    lastUpdated: 1 week ago
    rating: 4.6
    reviewCount: 2
    author: Wiz
    imageUrl: "#"
    category: Automation
    framework: n8n
    aiReady: true
    demoUrl: "#"
    repoUrl: "#"
    automation:
      tool: n8n
      difficulty: Advanced
      steps: ["Trigger: Ticket", "Action: Draft"]
"##
    }

    #[test]
    fn test_parse_and_counts() {
        let store = CatalogStore::from_yaml(sample_yaml()).unwrap();
        assert_eq!(store.boilerplates().len(), 3);
        assert_eq!(store.automations().len(), 2);
    }

    #[test]
    fn test_entry_lookup() {
        let store = CatalogStore::from_yaml(sample_yaml()).unwrap();

        let entry = store.entry(EntryKind::Boilerplate, "bp-2").unwrap();
        assert_eq!(entry.title, "Beta Kit");

        // Ids do not leak across collections
        assert!(store.entry(EntryKind::Automation, "bp-2").is_none());
        assert!(store.entry(EntryKind::Boilerplate, "missing").is_none());
    }

    #[test]
    fn test_detail_not_found_is_none() {
        let store = CatalogStore::from_yaml(sample_yaml()).unwrap();
        assert!(store.detail(EntryKind::Boilerplate, "missing").is_none());
    }

    #[test]
    fn test_related_by_category() {
        let store = CatalogStore::from_yaml(sample_yaml()).unwrap();
        let detail = store.detail(EntryKind::Boilerplate, "bp-1").unwrap();

        let ids: Vec<&str> = detail.related.iter().map(|e| e.id.as_str()).collect();
        // Same category (SaaS), self excluded, dashboard not included
        assert_eq!(ids, vec!["bp-2"]);
    }

    #[test]
    fn test_related_by_tool() {
        let store = CatalogStore::from_yaml(sample_yaml()).unwrap();
        let detail = store.detail(EntryKind::Automation, "wf-1").unwrap();

        let ids: Vec<&str> = detail.related.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["wf-2"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let yaml = sample_yaml().replace("id: bp-2", "id: bp-1");
        let err = CatalogStore::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let yaml = sample_yaml().replace("rating: 4.9", "rating: 5.3");
        let err = CatalogStore::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("outside [0, 5]"));
    }

    #[test]
    fn test_misfiled_entry_rejected() {
        // An automation block inside the boilerplates collection
        let yaml = sample_yaml().replace(
            "    aiReady: true\n    demoUrl: \"#\"\n    repoUrl: \"#\"\n  - id: bp-2",
            "    aiReady: true\n    demoUrl: \"#\"\n    repoUrl: \"#\"\n    automation:\n      tool: Make\n      difficulty: Beginner\n      steps: []\n  - id: bp-2",
        );
        let err = CatalogStore::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("has kind automation"));
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let store = CatalogStore::shared();
        assert!(!store.boilerplates().is_empty());
        assert!(!store.automations().is_empty());
        assert!(!store.posts().is_empty());
    }
}
