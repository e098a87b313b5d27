//! Blog, event, gallery, announcement and carousel models

use serde::{Deserialize, Serialize};

use super::Id;
use crate::content::normalize::{MediaRefs, MediaResolver};

/// Blog post tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Id,
    pub name: String,
}

/// Blog post (list and detail views share this shape; `content` is detail-only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Id,
    pub title: String,
    pub slug: String,

    #[serde(default)]
    pub excerpt: String,

    /// Full body, only present on detail responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default)]
    pub published: bool,

    #[serde(default)]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// Resolved, directly fetchable image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl MediaRefs for BlogPost {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.featured_image_url = resolver.resolve_first(&[
            self.featured_image_url.as_deref(),
            self.featured_image.as_deref(),
        ]);
    }
}

/// Event (conference, workshop, seminar, competition, course)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    pub id: Id,
    pub title: String,
    pub slug: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default)]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
}

impl MediaRefs for Event {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.featured_image = resolver.resolve_first(&[self.featured_image.as_deref()]);
    }
}

/// Image inside a gallery
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: Id,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub alt_text: String,

    #[serde(default)]
    pub caption: String,
}

/// Photo gallery; `images` is only populated on detail responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gallery {
    pub id: Id,
    pub title: String,
    pub slug: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_count: Option<u32>,

    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

impl MediaRefs for Gallery {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.cover_image = resolver.resolve_first(&[self.cover_image.as_deref()]);
        for image in &mut self.images {
            image.image = resolver.resolve_first(&[image.image.as_deref()]);
        }
    }
}

/// Announcement category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    News,
    Event,
    Deadline,
    #[default]
    #[serde(other)]
    General,
}

impl AnnouncementType {
    pub fn label(&self) -> &'static str {
        match self {
            AnnouncementType::News => "News",
            AnnouncementType::Event => "Event",
            AnnouncementType::Deadline => "Deadline",
            AnnouncementType::General => "General",
        }
    }
}

/// Homepage announcement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Id,
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub announcement_type: AnnouncementType,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl MediaRefs for Announcement {
    fn resolve_media(&mut self, _resolver: &MediaResolver) {}
}

fn default_true() -> bool {
    true
}

/// Homepage carousel slide
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarouselImage {
    pub id: Id,
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Resolved, directly fetchable image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,

    #[serde(default = "default_true")]
    pub show_title: bool,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub order: u32,
}

impl MediaRefs for CarouselImage {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.image_url =
            resolver.resolve_first(&[self.image_url.as_deref(), self.image.as_deref()]);
    }
}

/// Featured content for the homepage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Featured {
    #[serde(default)]
    pub featured_blogs: Vec<BlogPost>,

    #[serde(default)]
    pub featured_events: Vec<Event>,
}

impl MediaRefs for Featured {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.featured_blogs.resolve_media(resolver);
        self.featured_events.resolve_media(resolver);
    }
}

/// Site search hits, grouped by content type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub blogs: Vec<BlogPost>,

    #[serde(default)]
    pub events: Vec<Event>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty() && self.events.is_empty()
    }
}

impl MediaRefs for SearchResults {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.blogs.resolve_media(resolver);
        self.events.resolve_media(resolver);
    }
}
