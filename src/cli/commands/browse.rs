use std::path::PathBuf;

use super::{render_outcome, CommandHandler, StoreHandle};
use crate::session::BrowseSession;
use crate::Result;

/// Handler for the `browse` command: the boilerplate list page.
pub struct BrowseCommand {
    pub search: Option<String>,
    pub categories: Vec<String>,
    pub frameworks: Vec<String>,
    pub prices: Vec<String>,
    pub ai_ready: bool,
    pub sort: String,
    pub format: String,
    pub catalog: Option<PathBuf>,
}

impl CommandHandler for BrowseCommand {
    fn execute(&self) -> Result<()> {
        let store = StoreHandle::resolve(self.catalog.as_deref())?;
        let store = store.get();

        let mut session = BrowseSession::new(store.boilerplates());
        if let Some(search) = &self.search {
            session.set_search(search.clone());
        }
        for category in &self.categories {
            session.toggle_category(category);
        }
        for framework in &self.frameworks {
            session.toggle_platform(framework);
        }
        for price in &self.prices {
            session.toggle_tier(price);
        }
        session.set_ai_ready_only(self.ai_ready);
        session.set_sort_label(&self.sort);

        let outcome = session.results();

        if self.format != "json" {
            let heading = session.heading_category();
            println!("{heading} Boilerplates");
            if let Some(description) = store.category_description(heading) {
                println!("{description}");
            }
            println!();
        }
        render_outcome(&outcome, "boilerplates", &self.format)
    }

    fn name(&self) -> &'static str {
        "browse"
    }
}
