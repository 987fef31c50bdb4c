//! Detail resolution and content tests against the embedded catalog
//!
//! Covers entry lookup across collections, related-item derivation, the
//! automation-specific detail fields, the blog front page, and category
//! metadata.

use pretty_assertions::assert_eq;

use atlas::blog::{self, BlogQuery};
use atlas::catalog::{CatalogStore, EntryKind, StepKind, Tool, RELATED_CAP};

#[test]
fn detail_resolves_within_a_kind() {
    let store = CatalogStore::shared();
    let detail = store.detail(EntryKind::Boilerplate, "1").unwrap();

    assert_eq!(detail.entry.title, "Nexus AI Starter");
    assert_eq!(detail.entry.kind(), EntryKind::Boilerplate);
}

#[test]
fn find_searches_boilerplates_before_automations() {
    let store = CatalogStore::shared();

    assert_eq!(store.find("1").unwrap().kind(), EntryKind::Boilerplate);
    assert_eq!(store.find("auto-2").unwrap().kind(), EntryKind::Automation);
    assert!(store.find("no-such-id").is_none());
}

#[test]
fn unknown_id_yields_no_detail() {
    let store = CatalogStore::shared();
    assert!(store.detail(EntryKind::Boilerplate, "999").is_none());
    assert!(store.detail(EntryKind::Automation, "1").is_none());
}

#[test]
fn related_boilerplates_share_the_category() {
    let store = CatalogStore::shared();
    let detail = store.detail(EntryKind::Boilerplate, "1").unwrap();

    let ids: Vec<&str> = detail.related.iter().map(|e| e.id.as_str()).collect();
    // The only other AI-category kit.
    assert_eq!(ids, vec!["5"]);
    assert!(detail.related.len() <= RELATED_CAP);
    for peer in &detail.related {
        assert_eq!(peer.category, detail.entry.category);
        assert_ne!(peer.id, detail.entry.id);
    }
}

#[test]
fn related_automations_share_the_tool() {
    let store = CatalogStore::shared();
    let detail = store.detail(EntryKind::Automation, "auto-1").unwrap();

    // Every embedded automation runs on a different tool.
    assert!(detail.related.is_empty());
}

#[test]
fn automation_detail_exposes_tool_difficulty_and_steps() {
    let store = CatalogStore::shared();
    let entry = store.entry(EntryKind::Automation, "auto-1").unwrap();
    let details = entry.automation.as_ref().unwrap();

    assert_eq!(details.tool, Tool::N8n);
    assert_eq!(entry.platform_label(), "n8n");
    assert_eq!(entry.tier_label(), "Intermediate");

    assert_eq!(StepKind::of(&details.steps[0]), StepKind::Trigger);
    assert_eq!(StepKind::strip_tag(&details.steps[0]), "Typeform Submission");
}

#[test]
fn connected_apps_exclude_the_hosting_tool() {
    let store = CatalogStore::shared();
    let entry = store.entry(EntryKind::Automation, "auto-1").unwrap();

    assert_eq!(entry.connected_apps(), vec!["Typeform", "HubSpot", "Clearbit"]);
}

#[test]
fn boilerplate_detail_has_no_automation_block() {
    let store = CatalogStore::shared();
    let entry = store.entry(EntryKind::Boilerplate, "6").unwrap();

    assert!(entry.automation.is_none());
    assert_eq!(entry.platform_label(), "Next.js");
    assert_eq!(entry.tier_label(), "Paid");
}

#[test]
fn blog_front_page_rows_overlap() {
    let store = CatalogStore::shared();
    let filtered = blog::filter_posts(store.posts(), &BlogQuery::default());
    let page = blog::front_page(&filtered);

    let slugs = |v: &[&atlas::blog::BlogPost]| {
        v.iter().map(|p| p.slug.clone()).collect::<Vec<_>>()
    };
    assert_eq!(
        slugs(&page.featured),
        vec![
            "top-10-nextjs-boilerplates-2024",
            "rag-is-future-of-saas",
            "supabase-vs-firebase",
        ]
    );
    // Rows share posts; the layout reuses them.
    assert_eq!(page.trending[0].slug, "supabase-vs-firebase");
    assert_eq!(page.latest[0].slug, "building-ai-agent-langchain");
}

#[test]
fn blog_search_and_category_combine() {
    let store = CatalogStore::shared();
    let query = BlogQuery {
        search: "next.js".to_string(),
        category: "Tutorials".to_string(),
    };
    let slugs: Vec<&str> = blog::filter_posts(store.posts(), &query)
        .iter()
        .map(|p| p.slug.as_str())
        .collect();

    assert_eq!(slugs, vec!["nextjs-14-server-actions"]);
}

#[test]
fn blog_categories_start_with_all() {
    let store = CatalogStore::shared();
    let categories = blog::categories(store.posts());

    assert_eq!(categories[0], "All");
    assert!(categories.contains(&"Guides".to_string()));
}

#[test]
fn category_metadata_backs_the_browse_header() {
    let store = CatalogStore::shared();

    assert_eq!(store.categories().len(), 5);
    assert_eq!(store.automation_categories().len(), 9);

    let blurb = store.category_description("AI").unwrap();
    assert!(blurb.contains("RAG"));
    assert!(store.category_description("Nonexistent").is_none());
}
