use std::path::PathBuf;

use super::{CommandHandler, StoreHandle};
use crate::blog::{self, BlogPost, BlogQuery};
use crate::Result;

/// Handler for the `blog` command: the curated front page by default, the
/// filtered article list when a search or category is given, or one post by
/// slug.
pub struct BlogCommand {
    pub slug: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub format: String,
    pub catalog: Option<PathBuf>,
}

impl CommandHandler for BlogCommand {
    fn execute(&self) -> Result<()> {
        let store = StoreHandle::resolve(self.catalog.as_deref())?;
        let posts = store.get().posts();

        if let Some(slug) = &self.slug {
            let Some(post) = blog::post_by_slug(posts, slug) else {
                println!("No blog post with slug '{slug}'.");
                println!("Run `atlas blog` to list all posts.");
                return Ok(());
            };
            return self.render_post(post);
        }

        let query = self.query();
        let filtered = blog::filter_posts(posts, &query);

        if self.is_front_page() {
            return self.render_front_page(&filtered);
        }

        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
            return Ok(());
        }

        if filtered.is_empty() {
            println!("No articles found matching your criteria.");
            println!("Categories: {}", blog::categories(posts).join(", "));
            return Ok(());
        }

        self.print_posts_table(&filtered);
        println!("\nTotal: {} articles", filtered.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "blog"
    }
}

impl BlogCommand {
    /// The curated front page is the default view; any search or category
    /// filter switches to the flat list.
    fn is_front_page(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }

    fn query(&self) -> BlogQuery {
        let mut query = BlogQuery::default();
        if let Some(search) = &self.search {
            query.search = search.clone();
        }
        if let Some(category) = &self.category {
            query.category = category.clone();
        }
        query
    }

    fn render_front_page(&self, filtered: &[&BlogPost]) -> Result<()> {
        let page = blog::front_page(filtered);

        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(&page)?);
            return Ok(());
        }

        self.print_row("Featured", &page.featured);
        self.print_row("Trending", &page.trending);
        self.print_row("Latest", &page.latest);
        println!("Read a post with `atlas blog <slug>`.");
        Ok(())
    }

    fn print_row(&self, heading: &str, posts: &[&BlogPost]) {
        if posts.is_empty() {
            return;
        }
        println!("{heading}");
        for post in posts {
            println!("  {}  {} ({}, {})", post.slug, post.title, post.category, post.read_time);
        }
        println!();
    }

    fn render_post(&self, post: &BlogPost) -> Result<()> {
        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(post)?);
            return Ok(());
        }

        println!("{}", post.title);
        println!("{} | {} | {} | {}", post.category, post.author, post.date, post.read_time);
        println!();
        println!("{}", post.excerpt);
        println!();
        println!("{}", post.content);
        Ok(())
    }

    fn print_posts_table(&self, posts: &[&BlogPost]) {
        let slug_width = posts
            .iter()
            .map(|p| p.slug.len())
            .max()
            .unwrap_or(4)
            .max("SLUG".len());
        let title_width = posts
            .iter()
            .map(|p| p.title.len())
            .max()
            .unwrap_or(5)
            .max("TITLE".len());
        let category_width = posts
            .iter()
            .map(|p| p.category.len())
            .max()
            .unwrap_or(8)
            .max("CATEGORY".len());

        println!(
            "{:<slug_width$}  {:<title_width$}  {:<category_width$}  AUTHOR",
            "SLUG", "TITLE", "CATEGORY",
        );
        println!(
            "{}  {}  {}  {}",
            "-".repeat(slug_width),
            "-".repeat(title_width),
            "-".repeat(category_width),
            "-".repeat(6),
        );
        for post in posts {
            println!(
                "{:<slug_width$}  {:<title_width$}  {:<category_width$}  {}",
                post.slug, post.title, post.category, post.author,
            );
        }
    }
}
