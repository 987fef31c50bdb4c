use std::path::PathBuf;

use super::{render_outcome, CommandHandler, StoreHandle};
use crate::session::BrowseSession;
use crate::Result;

/// Handler for the `automations` command: the workflow-template list page.
pub struct AutomationsCommand {
    pub search: Option<String>,
    pub categories: Vec<String>,
    pub tools: Vec<String>,
    pub difficulties: Vec<String>,
    pub ai_ready: bool,
    pub sort: String,
    pub format: String,
    pub catalog: Option<PathBuf>,
}

impl CommandHandler for AutomationsCommand {
    fn execute(&self) -> Result<()> {
        let store = StoreHandle::resolve(self.catalog.as_deref())?;
        let store = store.get();

        let mut session = BrowseSession::new(store.automations());
        if let Some(search) = &self.search {
            session.set_search(search.clone());
        }
        for category in &self.categories {
            session.toggle_category(category);
        }
        for tool in &self.tools {
            session.toggle_platform(tool);
        }
        for difficulty in &self.difficulties {
            session.toggle_tier(difficulty);
        }
        session.set_ai_ready_only(self.ai_ready);
        session.set_sort_label(&self.sort);

        let outcome = session.results();

        if self.format != "json" {
            println!("{} Automations", session.heading_category());
            println!("Curated automation workflows for n8n, Make, Zapier, and Pipedream.");
            println!();
        }
        render_outcome(&outcome, "automations", &self.format)
    }

    fn name(&self) -> &'static str {
        "automations"
    }
}
