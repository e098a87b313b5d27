//! [`ContentApi`] over a [`ContentLoader`]
//!
//! The static bundle only carries unfiltered collections, so list filters are
//! applied locally whenever a read was served from it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use super::endpoints::{self, Collection, Detail, Form, ReadTarget};
use super::loader::{ContentLoader, Origin, Served};
use super::normalize::{Listing, MediaRefs, decode_listing, decode_record};
use crate::client::models::{
    Acknowledgement, Announcement, BlogPost, CarouselImage, ContactForm, Event, Featured, Gallery,
    InternshipApplication, JournalIssue, Leader, ManuscriptSubmission, NewsletterIssue,
    NewsletterSignup, SearchResults, TeamMember,
};
use crate::client::transport::Transport;
use crate::client::{BlogFilter, ContentApi, EventFilter};
use crate::error::Result;
use crate::source::{SourceMode, StaticSource};

impl<T: Transport, S: StaticSource> ContentLoader<T, S> {
    async fn listing<M>(&self, target: ReadTarget) -> Served<Listing<M>>
    where
        M: DeserializeOwned + MediaRefs,
    {
        self.read(target, decode_listing::<M>)
            .await
            .unwrap_or(Served {
                value: Listing::empty(),
                origin: Origin::Static,
            })
    }

    async fn collection<M>(&self, collection: Collection) -> Listing<M>
    where
        M: DeserializeOwned + MediaRefs,
    {
        self.listing(collection.target()).await.value
    }

    async fn detail<M>(&self, detail: Detail, slug: &str) -> Option<M>
    where
        M: DeserializeOwned + MediaRefs,
    {
        let target = detail.target(slug)?;
        self.read(target, decode_record::<M>).await.map(|s| s.value)
    }
}

/// Lowercase, hyphen-separated form of a category name.
fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

fn blog_matches(post: &BlogPost, filter: &BlogFilter) -> bool {
    if filter.featured && !post.featured {
        return false;
    }
    match (&filter.category, &post.category_name) {
        (Some(wanted), Some(name)) => {
            slugify(name) == slugify(wanted) || name.eq_ignore_ascii_case(wanted)
        }
        (Some(_), None) => false,
        (None, _) => true,
    }
}

fn event_matches(event: &Event, filter: &EventFilter, now: DateTime<Utc>) -> bool {
    if filter.featured && !event.featured {
        return false;
    }
    if let Some(ref wanted) = filter.event_type
        && event.event_type.as_deref() != Some(wanted.as_str())
    {
        return false;
    }
    if filter.upcoming {
        let starts = event
            .start_date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok());
        return starts.is_some_and(|start| start.with_timezone(&Utc) >= now);
    }
    true
}

#[async_trait]
impl<T: Transport, S: StaticSource> ContentApi for ContentLoader<T, S> {
    async fn list_blogs(&self, filter: &BlogFilter) -> Listing<BlogPost> {
        let target = Collection::Blogs.target_with(&filter.to_params());
        let served = self.listing::<BlogPost>(target).await;

        let listing = match served.origin {
            Origin::Static => served.value.retain(|post| blog_matches(post, filter)),
            _ => served.value,
        };
        match filter.limit {
            Some(limit) => listing.truncate(limit as usize),
            None => listing,
        }
    }

    async fn get_blog(&self, slug: &str) -> Option<BlogPost> {
        self.detail(Detail::Blog, slug).await
    }

    async fn list_events(&self, filter: &EventFilter) -> Listing<Event> {
        let target = Collection::Events.target_with(&filter.to_params());
        let served = self.listing::<Event>(target).await;

        match served.origin {
            Origin::Static => {
                let now = Utc::now();
                served.value.retain(|event| event_matches(event, filter, now))
            }
            _ => served.value,
        }
    }

    async fn get_event(&self, slug: &str) -> Option<Event> {
        self.detail(Detail::Event, slug).await
    }

    async fn list_galleries(&self) -> Listing<Gallery> {
        self.collection(Collection::Galleries).await
    }

    async fn get_gallery(&self, slug: &str) -> Option<Gallery> {
        self.detail(Detail::Gallery, slug).await
    }

    async fn list_team(&self) -> Listing<TeamMember> {
        self.collection(Collection::Team).await
    }

    async fn list_leadership(&self) -> Listing<Leader> {
        self.collection(Collection::Leadership).await
    }

    async fn list_announcements(&self, limit: Option<u32>) -> Listing<Announcement> {
        let params: Vec<(&str, String)> = limit
            .map(|limit| vec![("limit", limit.to_string())])
            .unwrap_or_default();
        let listing = self
            .listing::<Announcement>(Collection::Announcements.target_with(&params))
            .await
            .value;

        match limit {
            Some(limit) => listing.truncate(limit as usize),
            None => listing,
        }
    }

    async fn list_carousel(&self) -> Listing<CarouselImage> {
        let served = self
            .listing::<CarouselImage>(Collection::Carousel.target())
            .await;

        match served.origin {
            Origin::Static => served.value.retain(|slide| slide.is_active),
            _ => served.value.retain_page(|slide| slide.is_active),
        }
    }

    async fn list_journals(&self) -> Listing<JournalIssue> {
        self.collection(Collection::Journals).await
    }

    async fn list_newsletter_archive(&self) -> Listing<NewsletterIssue> {
        self.collection(Collection::Newsletters).await
    }

    async fn featured(&self) -> Featured {
        self.read(endpoints::featured(), decode_record::<Featured>)
            .await
            .map(|s| s.value)
            .unwrap_or_default()
    }

    async fn search(&self, query: &str) -> SearchResults {
        if query.trim().is_empty() {
            return SearchResults::default();
        }
        self.read(endpoints::search(query), decode_record::<SearchResults>)
            .await
            .map(|s| s.value)
            .unwrap_or_default()
    }

    async fn submit_contact(&self, form: &ContactForm) -> Result<Acknowledgement> {
        form.validate()?;
        let request = Form::Contact.request().json(serde_json::to_value(form)?);
        Ok(self.write(Form::Contact, request).await?)
    }

    async fn subscribe_newsletter(&self, signup: &NewsletterSignup) -> Result<Acknowledgement> {
        signup.validate()?;
        let request = Form::NewsletterSignup
            .request()
            .json(serde_json::to_value(signup)?);
        Ok(self.write(Form::NewsletterSignup, request).await?)
    }

    async fn apply_internship(
        &self,
        application: &InternshipApplication,
    ) -> Result<Acknowledgement> {
        application.validate()?;
        let form = application.to_multipart().await?;
        let request = Form::Internship.request().multipart(form);
        Ok(self.write(Form::Internship, request).await?)
    }

    async fn submit_manuscript(
        &self,
        submission: &ManuscriptSubmission,
    ) -> Result<Acknowledgement> {
        submission.validate()?;
        let request = Form::Submission
            .request()
            .json(serde_json::to_value(submission)?);
        Ok(self.write(Form::Submission, request).await?)
    }

    fn source_mode(&self) -> SourceMode {
        self.mode()
    }
}
