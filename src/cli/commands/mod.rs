pub mod automations;
pub mod blog;
pub mod browse;
pub mod categories;
pub mod show;

use std::path::Path;

use crate::catalog::{CatalogEntry, CatalogStore, EntryKind};
use crate::engine::QueryOutcome;
use crate::error::{AtlasError, Result};

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// The catalog a command runs against: the embedded dataset or a file the
/// user pointed at with `--catalog`.
pub enum StoreHandle {
    Shared(&'static CatalogStore),
    Owned(CatalogStore),
}

impl StoreHandle {
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(StoreHandle::Owned(CatalogStore::load_from_file(path)?)),
            None => Ok(StoreHandle::Shared(CatalogStore::shared())),
        }
    }

    pub fn get(&self) -> &CatalogStore {
        match self {
            StoreHandle::Shared(store) => store,
            StoreHandle::Owned(store) => store,
        }
    }
}

/// Parse a user-supplied entry kind label.
pub fn parse_kind(label: &str) -> Result<EntryKind> {
    match label.to_lowercase().as_str() {
        "boilerplate" => Ok(EntryKind::Boilerplate),
        "automation" => Ok(EntryKind::Automation),
        other => Err(AtlasError::Cli(format!(
            "unknown entry kind '{other}' (expected 'boilerplate' or 'automation')"
        ))),
    }
}

/// Render a query outcome as text or JSON. Empty results get the explicit
/// "no matches" state with a reset hint instead of a bare empty table.
pub fn render_outcome(outcome: &QueryOutcome<'_>, noun: &str, format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    if outcome.is_empty() {
        println!("No {noun} found matching your criteria.");
        println!("Tip: drop a filter, or run the command without flags to see everything.");
        return Ok(());
    }

    if !outcome.featured_picks.is_empty() {
        println!("Editor's Choice");
        for pick in &outcome.featured_picks {
            println!("  * {} ({:.1} stars) - {}", pick.title, pick.rating, pick.author);
        }
        println!();
    }

    print_entries_table(&outcome.items);
    println!("\nTotal: {} results", outcome.len());
    Ok(())
}

/// Print entries in compact table format
pub fn print_entries_table(entries: &[&CatalogEntry]) {
    let id_width = column_width(entries.iter().map(|e| e.id.len()), "ID".len());
    let title_width = column_width(entries.iter().map(|e| e.title.len()), "TITLE".len());
    let platform_width = column_width(
        entries.iter().map(|e| e.platform_label().len()),
        "PLATFORM".len(),
    );
    let tier_width = column_width(entries.iter().map(|e| e.tier_label().len()), "TIER".len());

    println!(
        "{:<id_width$}  {:<title_width$}  {:<platform_width$}  {:<tier_width$}  {:>6}  {:>7}  UPDATED",
        "ID", "TITLE", "PLATFORM", "TIER", "RATING", "REVIEWS",
    );
    println!(
        "{}  {}  {}  {}  {}  {}  {}",
        "-".repeat(id_width),
        "-".repeat(title_width),
        "-".repeat(platform_width),
        "-".repeat(tier_width),
        "-".repeat(6),
        "-".repeat(7),
        "-".repeat(7),
    );

    for entry in entries {
        println!(
            "{:<id_width$}  {:<title_width$}  {:<platform_width$}  {:<tier_width$}  {:>6.1}  {:>7}  {}",
            entry.id,
            entry.title,
            entry.platform_label(),
            entry.tier_label(),
            entry.rating,
            entry.review_count,
            entry.last_updated,
        );
    }
}

fn column_width(lengths: impl Iterator<Item = usize>, header: usize) -> usize {
    lengths.max().unwrap_or(header).max(header)
}
