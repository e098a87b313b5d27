//! GCADR content API data models
//!
//! This module contains the content types returned by the content API (and
//! mirrored by the static bundle) plus the form payloads it accepts.
//! Models are organized by resource type for easy discovery.

// Allow unused imports - we export all API types for completeness,
// even if not all are currently used by CLI commands.
#![allow(unused_imports)]

mod content;
mod forms;
mod people;
mod publication;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use content::{
    Announcement, AnnouncementType, BlogPost, CarouselImage, Event, Featured, Gallery,
    GalleryImage, SearchResults, Tag,
};
pub use forms::{
    Acknowledgement, ContactForm, InternshipApplication, ManuscriptSubmission, NewsletterSignup,
    SubmissionType,
};
pub use people::{Leader, TeamMember};
pub use publication::{JournalIssue, NewsletterIssue};

/// Record identifier.
///
/// The backend emits integer primary keys while hand-built static bundles
/// often use strings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Text(String),
}

impl Default for Id {
    fn default() -> Self {
        Id::Num(0)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Text(s) => write!(f, "{}", s),
        }
    }
}
