use std::path::PathBuf;

use super::{CommandHandler, StoreHandle};
use crate::catalog::CategoryInfo;
use crate::Result;

/// Handler for the `categories` command: the category overview tiles.
pub struct CategoriesCommand {
    pub automations: bool,
    pub format: String,
    pub catalog: Option<PathBuf>,
}

impl CommandHandler for CategoriesCommand {
    fn execute(&self) -> Result<()> {
        let store = StoreHandle::resolve(self.catalog.as_deref())?;
        let categories = if self.automations {
            store.get().automation_categories().to_vec()
        } else {
            store.get().categories().to_vec()
        };

        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(&categories)?);
            return Ok(());
        }

        if categories.is_empty() {
            println!("No categories in this catalog.");
            return Ok(());
        }

        self.print_categories_table(&categories);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "categories"
    }
}

impl CategoriesCommand {
    fn print_categories_table(&self, categories: &[CategoryInfo]) {
        let title_width = categories
            .iter()
            .map(|c| c.title.len())
            .max()
            .unwrap_or(5)
            .max("TITLE".len());

        println!("{:<title_width$}  {:>5}  DESCRIPTION", "TITLE", "COUNT");
        println!("{}  {}  {}", "-".repeat(title_width), "-".repeat(5), "-".repeat(11));
        for category in categories {
            println!(
                "{:<title_width$}  {:>5}  {}",
                category.title, category.count, category.description,
            );
            if !category.features.is_empty() {
                println!("{:<title_width$}         includes: {}", "", category.features.join(", "));
            }
        }
        println!("\nTotal: {} categories", categories.len());
    }
}
