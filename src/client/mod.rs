//! GCADR content API client

use async_trait::async_trait;

use crate::content::normalize::Listing;
use crate::error::Result;
use crate::source::SourceMode;

pub mod dispatch;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod request;
pub mod transport;

#[cfg(test)]
#[allow(unused_imports)]
pub use mock::{MockStaticSource, MockTransport};
pub use dispatch::Dispatcher;
pub use transport::HttpTransport;

use models::{
    Acknowledgement, Announcement, BlogPost, CarouselImage, ContactForm, Event, Featured, Gallery,
    InternshipApplication, JournalIssue, Leader, ManuscriptSubmission, NewsletterIssue,
    NewsletterSignup, SearchResults, TeamMember,
};

/// Site content operations.
///
/// Reads never fail: when neither source can answer they return an empty
/// listing, `None` or an empty value. Writes go to the primary API only and
/// report failures.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// List published blog posts
    async fn list_blogs(&self, filter: &BlogFilter) -> Listing<BlogPost>;

    /// Get one blog post by slug
    async fn get_blog(&self, slug: &str) -> Option<BlogPost>;

    /// List published events
    async fn list_events(&self, filter: &EventFilter) -> Listing<Event>;

    /// Get one event by slug
    async fn get_event(&self, slug: &str) -> Option<Event>;

    /// List photo galleries
    async fn list_galleries(&self) -> Listing<Gallery>;

    /// Get one gallery, with its images, by slug
    async fn get_gallery(&self, slug: &str) -> Option<Gallery>;

    /// List active student team members
    async fn list_team(&self) -> Listing<TeamMember>;

    /// List faculty leadership
    async fn list_leadership(&self) -> Listing<Leader>;

    /// List active announcements, newest first
    async fn list_announcements(&self, limit: Option<u32>) -> Listing<Announcement>;

    /// List homepage carousel slides
    async fn list_carousel(&self) -> Listing<CarouselImage>;

    /// List journal issues
    async fn list_journals(&self) -> Listing<JournalIssue>;

    /// List archived newsletter issues
    async fn list_newsletter_archive(&self) -> Listing<NewsletterIssue>;

    /// Featured blogs and events for the homepage
    async fn featured(&self) -> Featured;

    /// Title search across blogs and events
    async fn search(&self, query: &str) -> SearchResults;

    /// Send a contact form message
    async fn submit_contact(&self, form: &ContactForm) -> Result<Acknowledgement>;

    /// Subscribe to the newsletter
    async fn subscribe_newsletter(&self, signup: &NewsletterSignup) -> Result<Acknowledgement>;

    /// Apply for an internship (uploads CV and writing sample)
    async fn apply_internship(
        &self,
        application: &InternshipApplication,
    ) -> Result<Acknowledgement>;

    /// Submit a blog or journal manuscript
    async fn submit_manuscript(&self, submission: &ManuscriptSubmission)
    -> Result<Acknowledgement>;

    /// Which source reads are currently served from
    fn source_mode(&self) -> SourceMode;
}

/// Blog list filters
#[derive(Debug, Clone, Default)]
pub struct BlogFilter {
    /// Only featured posts
    pub featured: bool,
    /// Category slug
    pub category: Option<String>,
    /// Maximum number of posts
    pub limit: Option<u32>,
}

impl BlogFilter {
    /// Query parameters understood by the blogs endpoint.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![];
        if self.featured {
            params.push(("featured", "true".to_string()));
        }
        if let Some(ref category) = self.category {
            params.push(("category", category.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// Event list filters
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Only featured events
    pub featured: bool,
    /// Event type (conference, workshop, seminar, competition, course)
    pub event_type: Option<String>,
    /// Only events that have not started yet
    pub upcoming: bool,
}

impl EventFilter {
    /// Query parameters understood by the events endpoint.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![];
        if self.featured {
            params.push(("featured", "true".to_string()));
        }
        if let Some(ref event_type) = self.event_type {
            params.push(("type", event_type.clone()));
        }
        if self.upcoming {
            params.push(("upcoming", "true".to_string()));
        }
        params
    }
}
