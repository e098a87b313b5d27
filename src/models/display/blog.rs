//! Blog post display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::BlogPost;
use crate::output::formatters::{format_opt_date, or_dash, truncate_text};

/// Blog post display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BlogDisplay {
    /// URL slug
    #[tabled(rename = "SLUG")]
    pub slug: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "AUTHOR")]
    pub author: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    /// Marked with a star when featured
    #[tabled(rename = "★")]
    #[serde(skip)]
    pub featured_mark: String,

    #[tabled(skip)]
    pub featured: bool,

    #[tabled(rename = "PUBLISHED")]
    pub published: String,
}

impl From<BlogPost> for BlogDisplay {
    fn from(post: BlogPost) -> Self {
        let date = post.published_date.as_deref().or(post.created_at.as_deref());
        Self {
            published: format_opt_date(date),
            slug: post.slug,
            title: truncate_text(&post.title, 60),
            author: or_dash(post.author_display_name.as_deref().unwrap_or_default()),
            category: or_dash(post.category_name.as_deref().unwrap_or_default()),
            featured_mark: if post.featured { "★" } else { "" }.to_string(),
            featured: post.featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::BlogPostBuilder;

    #[test]
    fn test_blog_display_from_post() {
        let post = BlogPostBuilder::new("mediation-101")
            .title("Mediation 101")
            .featured(true)
            .category("Mediation")
            .created_at("2024-03-01T10:00:00Z")
            .build();

        let display = BlogDisplay::from(post);

        assert_eq!(display.slug, "mediation-101");
        assert_eq!(display.category, "Mediation");
        assert_eq!(display.author, "-");
        assert_eq!(display.featured_mark, "★");
        assert_eq!(display.published, "01 Mar 2024");
    }

    #[test]
    fn test_blog_display_serializes_featured_flag() {
        let display = BlogDisplay::from(BlogPostBuilder::new("a").build());
        let value = serde_json::to_value(&display).unwrap();

        assert_eq!(value["featured"], false);
        assert!(value.get("featured_mark").is_none());
    }
}
