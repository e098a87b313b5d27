//! Gallery commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{not_found, print_detail, run_list_command};
use crate::cli::CommandContext;
use crate::client::ContentApi;
use crate::client::models::Gallery;
use crate::error::Result;
use crate::models::{GalleryDisplay, GalleryImageDisplay};
use crate::output::table::format_table;

/// Run the gallery list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Gallery, GalleryDisplay, _, _>(opts, "galleries", |loader| async move {
        loader.list_galleries().await
    })
    .await
}

/// Run the gallery get command
pub async fn get(opts: &GlobalOptions, slug: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let gallery = ctx
        .loader
        .get_gallery(slug)
        .await
        .ok_or_else(|| not_found("Gallery", slug))?;

    print_detail::<_, GalleryDisplay>(&ctx, gallery, print_gallery)
}

fn print_gallery(gallery: &Gallery) {
    println!("{}", gallery.title.bold());
    if let Some(ref author) = gallery.author_name {
        println!("{}", format!("by {}", author).dimmed());
    }
    if !gallery.description.is_empty() {
        println!("{}", gallery.description);
    }
    println!();

    let images: Vec<GalleryImageDisplay> = gallery
        .images
        .iter()
        .cloned()
        .map(GalleryImageDisplay::from)
        .collect();
    println!("{}", format_table(&images));
}
