//! Logical endpoint catalogue
//!
//! Maps each piece of site content to its primary API path and its static
//! bundle document.

use std::fmt;

use crate::client::request::RequestDescriptor;

/// One logical read: the primary request plus where the static copy lives.
#[derive(Debug, Clone)]
pub struct ReadTarget {
    /// Logical name, used for cache TTL lookup and logs
    pub name: &'static str,
    pub request: RequestDescriptor,
    /// Static bundle document, if the bundle carries one
    pub static_document: Option<String>,
}

/// List resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Blogs,
    Events,
    Galleries,
    Team,
    Leadership,
    Announcements,
    Carousel,
    Journals,
    Newsletters,
}

impl Collection {
    pub const ALL: [Collection; 9] = [
        Collection::Blogs,
        Collection::Events,
        Collection::Galleries,
        Collection::Team,
        Collection::Leadership,
        Collection::Announcements,
        Collection::Carousel,
        Collection::Journals,
        Collection::Newsletters,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Blogs => "blogs",
            Collection::Events => "events",
            Collection::Galleries => "galleries",
            Collection::Team => "team",
            Collection::Leadership => "leadership",
            Collection::Announcements => "announcements",
            Collection::Carousel => "carousel",
            Collection::Journals => "journals",
            Collection::Newsletters => "newsletters",
        }
    }

    /// Primary API path.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Blogs => "/api/blogs/",
            Collection::Events => "/api/events/",
            Collection::Galleries => "/api/galleries/",
            Collection::Team => "/api/team/",
            Collection::Leadership => "/api/leadership/",
            Collection::Announcements => "/api/announcements/",
            Collection::Carousel => "/api/carousel/",
            Collection::Journals => "/api/journals/",
            Collection::Newsletters => "/api/newsletter-archives/",
        }
    }

    pub fn static_document(&self) -> String {
        format!("api/{}.json", self.name())
    }

    /// Unfiltered read of the whole collection.
    pub fn target(&self) -> ReadTarget {
        ReadTarget {
            name: self.name(),
            request: RequestDescriptor::read(self.path()),
            static_document: Some(self.static_document()),
        }
    }

    /// Read with query parameters. The static document is the unfiltered
    /// collection; callers filter it locally.
    pub fn target_with(&self, params: &[(&str, String)]) -> ReadTarget {
        let mut target = self.target();
        for (name, value) in params {
            target.request = target.request.query(name, value.clone());
        }
        target
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Single-record resources addressed by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    Blog,
    Event,
    Gallery,
}

impl Detail {
    fn collection(&self) -> Collection {
        match self {
            Detail::Blog => Collection::Blogs,
            Detail::Event => Collection::Events,
            Detail::Gallery => Collection::Galleries,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Detail::Blog => "blog",
            Detail::Event => "event",
            Detail::Gallery => "gallery",
        }
    }

    /// Read of one record. `None` when the slug cannot name a record.
    pub fn target(&self, slug: &str) -> Option<ReadTarget> {
        if !is_valid_slug(slug) {
            return None;
        }

        let collection = self.collection().name();
        Some(ReadTarget {
            name: self.name(),
            request: RequestDescriptor::read(format!("/api/{}/{}/", collection, slug)),
            static_document: Some(format!("api/{}/{}.json", collection, slug)),
        })
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Homepage featured blogs and events.
pub fn featured() -> ReadTarget {
    ReadTarget {
        name: "featured",
        request: RequestDescriptor::read("/api/featured/"),
        static_document: Some("api/featured.json".to_string()),
    }
}

/// Title search across blogs and events. The static bundle has no search
/// index.
pub fn search(query: &str) -> ReadTarget {
    ReadTarget {
        name: "search",
        request: RequestDescriptor::read("/api/search/").query("q", query.trim()),
        static_document: None,
    }
}

/// Write endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Contact,
    NewsletterSignup,
    Internship,
    Submission,
}

impl Form {
    pub fn name(&self) -> &'static str {
        match self {
            Form::Contact => "contact",
            Form::NewsletterSignup => "newsletter signup",
            Form::Internship => "internship application",
            Form::Submission => "submission",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Form::Contact => "/api/contact/submit/",
            Form::NewsletterSignup => "/api/newsletter/signup/",
            Form::Internship => "/api/internship/apply/",
            Form::Submission => "/api/submissions/submit/",
        }
    }

    /// Message used when the server accepts without one.
    pub fn accepted_message(&self) -> &'static str {
        match self {
            Form::Contact => "Contact form submitted successfully",
            Form::NewsletterSignup => "Successfully subscribed to newsletter",
            Form::Internship => "Internship application submitted successfully",
            Form::Submission => "Submission submitted successfully",
        }
    }

    pub fn request(&self) -> RequestDescriptor {
        RequestDescriptor::write(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::request::Method;

    #[test]
    fn test_collection_paths_and_documents() {
        assert_eq!(Collection::Team.path(), "/api/team/");
        assert_eq!(Collection::Team.static_document(), "api/team.json");
        assert_eq!(
            Collection::Newsletters.path(),
            "/api/newsletter-archives/"
        );
        assert_eq!(
            Collection::Newsletters.static_document(),
            "api/newsletters.json"
        );
    }

    #[test]
    fn test_all_collections_have_distinct_names() {
        let mut names: Vec<&str> = Collection::ALL.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Collection::ALL.len());
    }

    #[test]
    fn test_target_with_params() {
        let target = Collection::Blogs.target_with(&[
            ("featured", "true".to_string()),
            ("limit", "3".to_string()),
        ]);

        assert_eq!(target.name, "blogs");
        assert_eq!(target.request.query.len(), 2);
        assert_eq!(target.static_document.as_deref(), Some("api/blogs.json"));
    }

    #[test]
    fn test_detail_target() {
        let target = Detail::Blog.target("mediation-101").unwrap();

        assert_eq!(target.request.endpoint, "/api/blogs/mediation-101/");
        assert_eq!(
            target.static_document.as_deref(),
            Some("api/blogs/mediation-101.json")
        );
    }

    #[test]
    fn test_detail_rejects_path_like_slugs() {
        assert!(Detail::Event.target("").is_none());
        assert!(Detail::Event.target("..").is_none());
        assert!(Detail::Event.target("a/b").is_none());
        assert!(Detail::Gallery.target("spring_2024").is_some());
    }

    #[test]
    fn test_search_has_no_static_document() {
        let target = search("  arbitration ");
        assert!(target.static_document.is_none());
        assert_eq!(
            target.request.query,
            vec![("q".to_string(), "arbitration".to_string())]
        );
    }

    #[test]
    fn test_form_requests_are_writes() {
        let req = Form::NewsletterSignup.request();
        assert_eq!(req.endpoint, "/api/newsletter/signup/");
        assert_eq!(req.method, Method::Write);
        assert!(req.cache_key().is_none());
    }
}
