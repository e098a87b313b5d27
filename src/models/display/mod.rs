//! Display model implementations for table and JSON output
//!
//! Display models transform content types into CLI-friendly rows with
//! appropriate column names and serialization.

mod blog;
mod event;
mod gallery;
mod notice;
mod people;
mod publication;

// Re-export all display types used by CLI commands
pub use blog::BlogDisplay;
pub use event::EventDisplay;
pub use gallery::{GalleryDisplay, GalleryImageDisplay};
pub use notice::{AnnouncementDisplay, CarouselDisplay};
pub use people::{LeaderDisplay, TeamMemberDisplay};
pub use publication::{JournalDisplay, NewsletterDisplay};
