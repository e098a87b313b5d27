//! Test fixtures and builders for content model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use serde::Serialize;
use serde_json::{Value, json};

use super::models::{BlogPost, Event, Id, TeamMember};

/// Serialize items as a paginated `{results, count}` page.
pub fn page<T: Serialize>(items: &[T]) -> Value {
    json!({ "results": items, "count": items.len() })
}

/// Serialize items as a bare JSON array.
pub fn bare<T: Serialize>(items: &[T]) -> Value {
    json!(items)
}

// ============================================================================
// BlogPostBuilder
// ============================================================================

/// Builder for creating test BlogPost instances.
///
/// # Example
/// ```ignore
/// let post = BlogPostBuilder::new("mediation-101")
///     .featured(true)
///     .category("Mediation")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct BlogPostBuilder {
    post: BlogPost,
}

impl BlogPostBuilder {
    /// Create a new builder for the given slug.
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            post: BlogPost {
                id: Id::Text(slug.clone()),
                title: format!("Post {}", &slug),
                slug,
                published: true,
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.post.title = title.into();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.post.featured = featured;
        self
    }

    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.post.category_name = Some(name.into());
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.post.author_display_name = Some(name.into());
        self
    }

    pub fn image(mut self, path: impl Into<String>) -> Self {
        self.post.featured_image = Some(path.into());
        self
    }

    pub fn created_at(mut self, timestamp: impl Into<String>) -> Self {
        self.post.created_at = Some(timestamp.into());
        self
    }

    pub fn build(self) -> BlogPost {
        self.post
    }
}

// ============================================================================
// EventBuilder
// ============================================================================

/// Builder for creating test Event instances.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// Create a new builder for the given slug.
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            event: Event {
                id: Id::Text(slug.clone()),
                title: format!("Event {}", &slug),
                slug,
                start_date: Some("2030-01-01T10:00:00Z".to_string()),
                event_type: Some("workshop".to_string()),
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.event.title = title.into();
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event.event_type = Some(event_type.into());
        self
    }

    pub fn starts(mut self, start: impl Into<String>) -> Self {
        self.event.start_date = Some(start.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.event.featured = featured;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.event.location = location.into();
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

// ============================================================================
// TeamMemberBuilder
// ============================================================================

/// Builder for creating test TeamMember instances.
#[derive(Debug, Clone)]
pub struct TeamMemberBuilder {
    member: TeamMember,
}

impl TeamMemberBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            member: TeamMember {
                id: Id::Text(name.to_ascii_lowercase().replace(' ', "-")),
                name,
                role: "student_member".to_string(),
                role_display: Some("Student Member".to_string()),
                batch: "2022-27".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn role(mut self, key: impl Into<String>, display: impl Into<String>) -> Self {
        self.member.role = key.into();
        self.member.role_display = Some(display.into());
        self
    }

    pub fn image(mut self, path: impl Into<String>) -> Self {
        self.member.image = Some(path.into());
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.member.order = order;
        self
    }

    pub fn build(self) -> TeamMember {
        self.member
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counts_items() {
        let posts = vec![BlogPostBuilder::new("a").build(), BlogPostBuilder::new("b").build()];
        let value = page(&posts);

        assert_eq!(value["count"], 2);
        assert_eq!(value["results"][1]["slug"], "b");
    }

    #[test]
    fn test_team_member_builder_defaults() {
        let member = TeamMemberBuilder::new("Asha Rao").build();
        assert_eq!(member.id, Id::Text("asha-rao".to_string()));
        assert_eq!(member.role_label(), "Student Member");
    }
}
