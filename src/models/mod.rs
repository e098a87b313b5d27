//! Display models for CLI output
//!
//! This module provides shared display model abstractions for converting
//! content types into CLI-friendly display formats.

pub mod display;

pub use display::{
    AnnouncementDisplay, BlogDisplay, CarouselDisplay, EventDisplay, GalleryDisplay,
    GalleryImageDisplay, JournalDisplay, LeaderDisplay, NewsletterDisplay, TeamMemberDisplay,
};
