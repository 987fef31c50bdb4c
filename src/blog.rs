//! Blog posts and their curated front-page layout
//!
//! Posts live in the catalog dataset next to the entries. The blog page
//! filters by search text (title or excerpt) and a single category with an
//! "All" sentinel, then slices the filtered list into the curated front-page
//! rows. The slice windows overlap on purpose; the original layout reuses
//! posts across rows.

use serde::{Deserialize, Serialize};

use crate::engine::ALL_CATEGORIES;

/// One blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    /// URL-addressable identifier
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: String,
    /// Display date ("Oct 12, 2024")
    pub date: String,
    pub category: String,
    pub author: String,
    /// Display estimate ("8 min read")
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
}

/// Search + single-category filter for the blog page.
#[derive(Debug, Clone)]
pub struct BlogQuery {
    pub search: String,
    pub category: String,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl BlogQuery {
    fn matches(&self, post: &BlogPost) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || post.title.to_lowercase().contains(&needle)
            || post.excerpt.to_lowercase().contains(&needle);
        let matches_category = self.category == ALL_CATEGORIES || post.category == self.category;
        matches_search && matches_category
    }
}

/// The curated rows of the blog front page, derived from one filtered list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontPage<'a> {
    /// First three filtered posts
    pub featured: Vec<&'a BlogPost>,
    /// Filtered posts [2, 5)
    pub trending: Vec<&'a BlogPost>,
    /// Filtered posts [3, 6)
    pub latest: Vec<&'a BlogPost>,
}

/// Filter posts, preserving original order.
pub fn filter_posts<'a>(posts: &'a [BlogPost], query: &BlogQuery) -> Vec<&'a BlogPost> {
    posts.iter().filter(|p| query.matches(p)).collect()
}

/// Slice a filtered list into the front-page rows.
pub fn front_page<'a>(filtered: &[&'a BlogPost]) -> FrontPage<'a> {
    let window = |from: usize, to: usize| -> Vec<&'a BlogPost> {
        filtered
            .get(from.min(filtered.len())..to.min(filtered.len()))
            .unwrap_or(&[])
            .to_vec()
    };
    FrontPage {
        featured: window(0, 3),
        trending: window(2, 5),
        latest: window(3, 6),
    }
}

/// Look up a post by slug. Unknown slug is a normal `None` outcome.
pub fn post_by_slug<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|p| p.slug == slug)
}

/// "All" plus the distinct post categories, in order of first appearance.
pub fn categories(posts: &[BlogPost]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for post in posts {
        if !out.contains(&post.category) {
            out.push(post.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(slug: &str, title: &str, category: &str) -> BlogPost {
        BlogPost {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: format!("About {title}."),
            content: String::new(),
            cover_image: String::new(),
            date: "Oct 1, 2024".to_string(),
            category: category.to_string(),
            author: "Test".to_string(),
            read_time: "5 min read".to_string(),
            featured: false,
        }
    }

    fn sample() -> Vec<BlogPost> {
        vec![
            post("a", "Next.js Roundup", "Best-Of"),
            post("b", "RAG Guide", "Guides"),
            post("c", "Supabase vs Firebase", "Comparisons"),
            post("d", "LangChain Tutorial", "Tutorials"),
            post("e", "Stripe Guide", "Guides"),
        ]
    }

    #[test]
    fn test_filter_by_category() {
        let posts = sample();
        let query = BlogQuery {
            category: "Guides".to_string(),
            ..Default::default()
        };
        let slugs: Vec<&str> = filter_posts(&posts, &query).iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "e"]);
    }

    #[test]
    fn test_filter_by_search_hits_excerpt() {
        let posts = sample();
        let query = BlogQuery {
            search: "rag".to_string(),
            ..Default::default()
        };
        let slugs: Vec<&str> = filter_posts(&posts, &query).iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b"]);
    }

    #[test]
    fn test_front_page_windows_overlap() {
        let posts = sample();
        let filtered = filter_posts(&posts, &BlogQuery::default());
        let page = front_page(&filtered);

        let slugs = |v: &[&BlogPost]| v.iter().map(|p| p.slug.clone()).collect::<Vec<_>>();
        assert_eq!(slugs(&page.featured), vec!["a", "b", "c"]);
        assert_eq!(slugs(&page.trending), vec!["c", "d", "e"]);
        assert_eq!(slugs(&page.latest), vec!["d", "e"]);
    }

    #[test]
    fn test_front_page_short_list() {
        let posts = vec![post("only", "Single", "Guides")];
        let filtered = filter_posts(&posts, &BlogQuery::default());
        let page = front_page(&filtered);

        assert_eq!(page.featured.len(), 1);
        assert!(page.trending.is_empty());
        assert!(page.latest.is_empty());
    }

    #[test]
    fn test_post_by_slug() {
        let posts = sample();
        assert_eq!(post_by_slug(&posts, "c").unwrap().title, "Supabase vs Firebase");
        assert!(post_by_slug(&posts, "missing").is_none());
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let posts = sample();
        assert_eq!(
            categories(&posts),
            vec!["All", "Best-Of", "Guides", "Comparisons", "Tutorials"]
        );
    }
}
