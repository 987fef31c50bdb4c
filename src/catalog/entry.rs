//! Catalog entry data model
//!
//! A `CatalogEntry` is one listable item: either a starter-kit boilerplate or
//! an automation workflow template. The two kinds share a common core; an
//! automation carries an additional `AutomationDetails` block. The
//! discriminator is decided when the dataset is authored, never inferred from
//! field shapes at use sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many related items a detail view shows.
pub const RELATED_CAP: usize = 3;

/// One listable catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique id within its collection
    pub id: String,

    /// Display title
    pub title: String,

    /// Short description shown on cards; searched together with the title
    pub description: String,

    /// Long-form description for the detail view
    pub long_description: String,

    /// Pricing classification
    pub price_type: PriceType,

    /// Display price ("$149", "Free / $299", ...)
    pub price: String,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Technologies the item is built with
    #[serde(default)]
    pub tech_stack: Vec<String>,

    /// Human-relative freshness string ("2 days ago"). Display-only; the
    /// Newest sort interprets it best-effort (see `engine::freshness`).
    pub last_updated: String,

    /// Average rating, 0.0 to 5.0
    pub rating: f32,

    /// Review counter shown on cards. Deliberately independent of
    /// `reviews.len()`; most entries ship a counter without review bodies.
    pub review_count: u32,

    /// Review bodies, owned by this entry
    #[serde(default)]
    pub reviews: Vec<Review>,

    /// Publisher name
    pub author: String,

    /// Cover image URL
    pub image_url: String,

    /// Ordered feature bullet list
    #[serde(default)]
    pub features: Vec<String>,

    /// Top-level category
    pub category: Category,

    /// Framework the kit targets (free-form, drawn from a known set)
    pub framework: String,

    /// Backing database, when meaningful
    #[serde(default)]
    pub database: Option<String>,

    /// Optimized for LLM / AI-assisted workflows
    pub ai_ready: bool,

    /// Live demo link
    pub demo_url: String,

    /// Source repository link
    pub repo_url: String,

    /// Present iff this entry is an automation workflow
    #[serde(default)]
    pub automation: Option<AutomationDetails>,
}

/// Automation-specific fields, composed into a `CatalogEntry`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationDetails {
    /// Workflow platform the automation runs on
    pub tool: Tool,

    /// Authoring difficulty
    pub difficulty: Difficulty,

    /// Ordered workflow steps, each tagged by convention with a
    /// "Trigger:" / "Condition:" / "Action:" prefix
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A single user review, owned by its parent entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user: String,
    pub avatar: String,
    /// Integer star rating, 1 to 5
    pub rating: u8,
    pub date: String,
    pub comment: String,
}

/// Which collection an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Boilerplate,
    Automation,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Boilerplate => write!(f, "boilerplate"),
            EntryKind::Automation => write!(f, "automation"),
        }
    }
}

/// Top-level catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "SaaS")]
    SaaS,
    #[serde(rename = "AI")]
    Ai,
    Dashboard,
    #[serde(rename = "E-commerce")]
    ECommerce,
    Mobile,
    Automation,
}

impl Category {
    /// Canonical display label, matching the dataset spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SaaS => "SaaS",
            Category::Ai => "AI",
            Category::Dashboard => "Dashboard",
            Category::ECommerce => "E-commerce",
            Category::Mobile => "Mobile",
            Category::Automation => "Automation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pricing classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceType {
    Free,
    Paid,
    Freemium,
}

impl PriceType {
    pub fn label(&self) -> &'static str {
        match self {
            PriceType::Free => "Free",
            PriceType::Paid => "Paid",
            PriceType::Freemium => "Freemium",
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Workflow platform an automation runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    #[serde(rename = "n8n")]
    N8n,
    Make,
    Zapier,
    Pipedream,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Tool::N8n => "n8n",
            Tool::Make => "Make",
            Tool::Zapier => "Zapier",
            Tool::Pipedream => "Pipedream",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Automation authoring difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role a workflow step plays, read off its prefix convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Trigger,
    Condition,
    Action,
}

impl StepKind {
    /// Classify a step string by its tag. Untagged steps count as actions.
    pub fn of(step: &str) -> StepKind {
        let lower = step.to_lowercase();
        if lower.contains("trigger") {
            StepKind::Trigger
        } else if lower.contains("condition") {
            StepKind::Condition
        } else {
            StepKind::Action
        }
    }

    /// Strip the tag prefix, leaving the step label ("Trigger: X" -> "X").
    pub fn strip_tag(step: &str) -> &str {
        match step.split_once(':') {
            Some((_, rest)) => rest.trim(),
            None => step.trim(),
        }
    }
}

impl CatalogEntry {
    /// Which collection this entry belongs to.
    pub fn kind(&self) -> EntryKind {
        if self.automation.is_some() {
            EntryKind::Automation
        } else {
            EntryKind::Boilerplate
        }
    }

    /// Label the framework/tool filter matches against: the hosting tool for
    /// automations, the framework for boilerplates.
    pub fn platform_label(&self) -> &str {
        match &self.automation {
            Some(details) => details.tool.label(),
            None => &self.framework,
        }
    }

    /// Label the price-type/difficulty filter matches against.
    pub fn tier_label(&self) -> &str {
        match &self.automation {
            Some(details) => details.difficulty.label(),
            None => self.price_type.label(),
        }
    }

    /// Tech-stack entries other than the hosting tool. Automations show these
    /// as "connected apps" on the detail view.
    pub fn connected_apps(&self) -> Vec<&str> {
        let tool = self.automation.as_ref().map(|d| d.tool.label());
        self.tech_stack
            .iter()
            .map(|t| t.as_str())
            .filter(|t| Some(*t) != tool)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_step_kind_classification() {
        assert_eq!(StepKind::of("Trigger: Typeform Submission"), StepKind::Trigger);
        assert_eq!(StepKind::of("Condition: Check Attempts"), StepKind::Condition);
        assert_eq!(StepKind::of("Action: HubSpot Create"), StepKind::Action);
        // Untagged steps fall back to Action
        assert_eq!(StepKind::of("Send Email"), StepKind::Action);
    }

    #[test]
    fn test_step_tag_stripping() {
        assert_eq!(StepKind::strip_tag("Trigger: Stripe Event"), "Stripe Event");
        assert_eq!(StepKind::strip_tag("Send Email"), "Send Email");
    }

    #[test]
    fn test_category_serde_labels() {
        let yaml: Category = serde_yaml_ng::from_str("E-commerce").unwrap();
        assert_eq!(yaml, Category::ECommerce);
        assert_eq!(yaml.label(), "E-commerce");

        let yaml: Category = serde_yaml_ng::from_str("AI").unwrap();
        assert_eq!(yaml, Category::Ai);
    }

    #[test]
    fn test_tool_serde_labels() {
        let tool: Tool = serde_yaml_ng::from_str("n8n").unwrap();
        assert_eq!(tool, Tool::N8n);
        assert_eq!(tool.label(), "n8n");
    }
}
