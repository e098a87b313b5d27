//! Event display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Event;
use crate::output::formatters::{format_date_range, or_dash, truncate_text};

/// Event display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EventDisplay {
    #[tabled(rename = "SLUG")]
    pub slug: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "TYPE")]
    pub event_type: String,

    #[tabled(rename = "WHEN")]
    pub when: String,

    #[tabled(rename = "WHERE")]
    pub location: String,
}

impl From<Event> for EventDisplay {
    fn from(event: Event) -> Self {
        Self {
            when: format_date_range(event.start_date.as_deref(), event.end_date.as_deref()),
            slug: event.slug,
            title: truncate_text(&event.title, 60),
            event_type: or_dash(event.event_type.as_deref().unwrap_or_default()),
            location: or_dash(&event.location),
        }
    }
}
