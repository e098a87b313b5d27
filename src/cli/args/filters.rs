//! Filter argument types for content list commands

use clap::Args;

use crate::client::{BlogFilter, EventFilter};

/// Filter arguments for blog list command.
#[derive(Args, Debug, Default, Clone)]
pub struct BlogFilterArgs {
    /// Only featured posts
    #[arg(long, short = 'f')]
    pub featured: bool,

    /// Filter by category slug
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Maximum results to return
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,
}

impl BlogFilterArgs {
    pub fn to_filter(&self) -> BlogFilter {
        BlogFilter {
            featured: self.featured,
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            limit: self.limit.filter(|n| *n > 0),
        }
    }
}

/// Filter arguments for event list command.
#[derive(Args, Debug, Default, Clone)]
pub struct EventFilterArgs {
    /// Only featured events
    #[arg(long, short = 'f')]
    pub featured: bool,

    /// Filter by event type (conference, workshop, seminar, competition, course)
    #[arg(long = "type", short = 't')]
    pub event_type: Option<String>,

    /// Only events that have not started yet
    #[arg(long, short = 'u')]
    pub upcoming: bool,
}

impl EventFilterArgs {
    pub fn to_filter(&self) -> EventFilter {
        EventFilter {
            featured: self.featured,
            event_type: self
                .event_type
                .as_deref()
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty()),
            upcoming: self.upcoming,
        }
    }
}
