//! Announcement and carousel commands

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::client::ContentApi;
use crate::client::models::{Announcement, CarouselImage};
use crate::error::Result;
use crate::models::{AnnouncementDisplay, CarouselDisplay};

/// Run the announcement list command
pub async fn announcements(opts: &GlobalOptions, limit: Option<u32>) -> Result<()> {
    run_list_command::<Announcement, AnnouncementDisplay, _, _>(
        opts,
        "announcements",
        |loader| async move { loader.list_announcements(limit).await },
    )
    .await
}

/// Run the carousel list command
pub async fn carousel(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<CarouselImage, CarouselDisplay, _, _>(
        opts,
        "carousel slides",
        |loader| async move { loader.list_carousel().await },
    )
    .await
}
