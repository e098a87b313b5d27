//! Gallery display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Gallery, GalleryImage};
use crate::output::formatters::{or_dash, truncate_text};

/// Gallery display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct GalleryDisplay {
    #[tabled(rename = "SLUG")]
    pub slug: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "IMAGES")]
    pub image_count: String,

    #[tabled(rename = "COVER")]
    pub cover: String,
}

impl From<Gallery> for GalleryDisplay {
    fn from(gallery: Gallery) -> Self {
        let count = gallery
            .image_count
            .unwrap_or(gallery.images.len() as u32);
        Self {
            slug: gallery.slug,
            title: truncate_text(&gallery.title, 60),
            image_count: count.to_string(),
            cover: or_dash(gallery.cover_image.as_deref().unwrap_or_default()),
        }
    }
}

/// Image row within a gallery.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct GalleryImageDisplay {
    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "CAPTION")]
    pub caption: String,

    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<GalleryImage> for GalleryImageDisplay {
    fn from(image: GalleryImage) -> Self {
        Self {
            title: or_dash(&image.title),
            caption: or_dash(&truncate_text(&image.caption, 50)),
            url: or_dash(image.image.as_deref().unwrap_or_default()),
        }
    }
}
