use std::path::PathBuf;

use super::{parse_kind, CommandHandler, StoreHandle};
use crate::catalog::{CatalogStore, Detail, StepKind};
use crate::Result;

/// Handler for the `show` command: one entry's detail view.
pub struct ShowCommand {
    pub id: String,
    pub kind: Option<String>,
    pub format: String,
    pub catalog: Option<PathBuf>,
}

impl CommandHandler for ShowCommand {
    fn execute(&self) -> Result<()> {
        let store = StoreHandle::resolve(self.catalog.as_deref())?;
        let store = store.get();

        let detail = self.resolve(store)?;
        let Some(detail) = detail else {
            // Not-found is a rendered outcome with a way back, not an error.
            println!("No catalog entry with id '{}'.", self.id);
            println!("Run `atlas browse` or `atlas automations` to list the catalog.");
            return Ok(());
        };

        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(&detail)?);
            return Ok(());
        }

        self.print_detail(&detail);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    pub fn new(id: String, kind: Option<String>, format: String, catalog: Option<PathBuf>) -> Self {
        Self {
            id,
            kind,
            format,
            catalog,
        }
    }

    /// Locate the entry: within the requested kind's collection, or across
    /// both (boilerplates first) when no kind was given.
    fn resolve<'a>(&self, store: &'a CatalogStore) -> Result<Option<Detail<'a>>> {
        match &self.kind {
            Some(label) => {
                let kind = parse_kind(label)?;
                Ok(store.detail(kind, &self.id))
            }
            None => Ok(store
                .find(&self.id)
                .and_then(|entry| store.detail(entry.kind(), &self.id))),
        }
    }

    fn print_detail(&self, detail: &Detail<'_>) {
        let entry = detail.entry;

        println!("{} [{}]", entry.title, entry.id);
        println!("by {}  |  {:.1} stars ({} reviews)  |  updated {}",
            entry.author, entry.rating, entry.review_count, entry.last_updated);
        println!();
        println!("{}", entry.long_description);
        println!();
        println!("Category:  {}", entry.category);
        match &entry.automation {
            Some(details) => {
                println!("Tool:      {}", details.tool);
                println!("Level:     {}", details.difficulty);
            }
            None => {
                println!("Framework: {}", entry.framework);
                if let Some(database) = &entry.database {
                    println!("Database:  {database}");
                }
            }
        }
        println!("Price:     {} ({})", entry.price, entry.price_type);
        println!("AI-ready:  {}", if entry.ai_ready { "yes" } else { "no" });
        if !entry.tags.is_empty() {
            println!("Tags:      {}", entry.tags.join(", "));
        }

        if !entry.features.is_empty() {
            println!("\nFeatures:");
            for feature in &entry.features {
                println!("  - {feature}");
            }
        }

        if let Some(details) = &entry.automation {
            if !details.steps.is_empty() {
                println!("\nWorkflow:");
                for step in &details.steps {
                    println!("  [{:?}] {}", StepKind::of(step), StepKind::strip_tag(step));
                }
            }
            let apps = entry.connected_apps();
            if !apps.is_empty() {
                println!("\nConnected apps: {}", apps.join(", "));
            }
        }

        for review in &entry.reviews {
            println!("\n\"{}\"", review.comment);
            println!("  - {}, {} stars, {}", review.user, review.rating, review.date);
        }

        if !detail.related.is_empty() {
            println!("\nYou might also like:");
            for peer in &detail.related {
                println!("  {}  {} ({:.1} stars)", peer.id, peer.title, peer.rating);
            }
        }

        println!("\nDemo: {}  Repo: {}", entry.demo_url, entry.repo_url);
    }
}
