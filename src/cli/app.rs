use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Boilerplate Atlas: a curated directory of starter kits and automations
#[derive(Parser)]
#[command(name = "atlas")]
#[command(version = "0.1.0")]
#[command(about = "Browse a curated directory of boilerplates and automation workflows")]
#[command(
    long_about = "Boilerplate Atlas serves a curated, read-only catalog of starter-kit \
boilerplates and automation workflow templates, with filtering, sorting, search, \
detail views, and a blog."
)]
pub struct Cli {
    /// Alternate catalog dataset (YAML); defaults to the embedded catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse starter-kit boilerplates
    Browse {
        /// Search text matched against title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category (repeatable); "All" means no constraint
        #[arg(short, long)]
        category: Vec<String>,

        /// Filter by framework (repeatable)
        #[arg(short, long)]
        framework: Vec<String>,

        /// Filter by price type: Free, Paid, Freemium (repeatable)
        #[arg(short, long)]
        price: Vec<String>,

        /// Only show AI/LLM-ready kits
        #[arg(long)]
        ai_ready: bool,

        /// Sort order (featured, most-popular, highest-rated, newest)
        #[arg(long, default_value = "featured")]
        sort: String,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Browse automation workflow templates
    Automations {
        /// Search text matched against title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category (repeatable); "All" means no constraint
        #[arg(short, long)]
        category: Vec<String>,

        /// Filter by workflow tool: n8n, Make, Zapier, Pipedream (repeatable)
        #[arg(short, long)]
        tool: Vec<String>,

        /// Filter by difficulty: Beginner, Intermediate, Advanced (repeatable)
        #[arg(short, long)]
        difficulty: Vec<String>,

        /// Only show automations that use AI models
        #[arg(long)]
        ai_ready: bool,

        /// Sort order (featured, most-popular, highest-rated, newest)
        #[arg(long, default_value = "featured")]
        sort: String,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show one catalog entry in detail, with related items
    Show {
        /// Entry id
        id: String,

        /// Entry kind (boilerplate, automation); both collections are
        /// searched when omitted
        #[arg(short, long)]
        kind: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Browse blog posts, or read one by slug
    Blog {
        /// Post slug to read
        slug: Option<String>,

        /// Search text matched against title and excerpt
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by a single category; "All" means no constraint
        #[arg(short, long)]
        category: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List category overviews
    Categories {
        /// Show automation categories instead of boilerplate categories
        #[arg(long)]
        automations: bool,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Browse { .. } => "browse",
            Commands::Automations { .. } => "automations",
            Commands::Show { .. } => "show",
            Commands::Blog { .. } => "blog",
            Commands::Categories { .. } => "categories",
        }
    }
}
