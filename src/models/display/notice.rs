//! Announcement and carousel display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Announcement, CarouselImage};
use crate::output::formatters::{format_opt_date, or_dash, strip_html, truncate_text};

/// Announcement display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AnnouncementDisplay {
    #[tabled(rename = "TYPE")]
    pub kind: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "DETAILS")]
    pub details: String,

    #[tabled(rename = "POSTED")]
    pub posted: String,
}

impl From<Announcement> for AnnouncementDisplay {
    fn from(announcement: Announcement) -> Self {
        Self {
            kind: announcement.announcement_type.label().to_string(),
            title: announcement.title,
            details: truncate_text(&strip_html(&announcement.content), 70),
            posted: format_opt_date(announcement.published_date.as_deref()),
        }
    }
}

/// Carousel slide display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CarouselDisplay {
    #[tabled(rename = "#")]
    pub order: u32,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "IMAGE")]
    pub image: String,

    #[tabled(rename = "LINK")]
    pub link: String,
}

impl From<CarouselImage> for CarouselDisplay {
    fn from(slide: CarouselImage) -> Self {
        Self {
            order: slide.order,
            title: slide.title,
            image: or_dash(slide.image_url.as_deref().unwrap_or_default()),
            link: or_dash(slide.link_url.as_deref().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::AnnouncementType;

    #[test]
    fn test_announcement_display_strips_markup() {
        let display = AnnouncementDisplay::from(Announcement {
            title: "Registrations open".to_string(),
            content: "<p>Apply by <b>Friday</b></p>".to_string(),
            announcement_type: AnnouncementType::Deadline,
            published_date: Some("2025-01-15T12:00:00Z".to_string()),
            ..Default::default()
        });

        assert_eq!(display.kind, "Deadline");
        assert_eq!(display.details, "Apply by Friday");
        assert_eq!(display.posted, "15 Jan 2025");
    }

    #[test]
    fn test_carousel_display() {
        let display = CarouselDisplay::from(CarouselImage {
            title: "Welcome".to_string(),
            order: 2,
            ..Default::default()
        });

        assert_eq!(display.order, 2);
        assert_eq!(display.image, "-");
    }
}
