//! Home page overview and site search

use colored::Colorize;
use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::ContentApi;
use crate::client::models::{Announcement, BlogPost, CarouselImage, Event};
use crate::error::Result;
use crate::models::{AnnouncementDisplay, BlogDisplay, CarouselDisplay, EventDisplay};
use crate::output::json::{JsonOutput, format_output};
use crate::output::table::format_table;

/// Announcements shown on the home page
const HOME_ANNOUNCEMENTS: u32 = 5;

#[derive(Debug, Serialize)]
struct Overview {
    announcements: Vec<Announcement>,
    carousel: Vec<CarouselImage>,
    featured_blogs: Vec<BlogPost>,
    featured_events: Vec<Event>,
}

/// Run the overview command: the home page's content, fetched concurrently.
pub async fn overview(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let loader = &ctx.loader;

    let (announcements, carousel, featured) = futures::join!(
        loader.list_announcements(Some(HOME_ANNOUNCEMENTS)),
        loader.list_carousel(),
        loader.featured(),
    );
    debug!(
        "Overview: {} announcements, {} slides, {} featured blogs, {} featured events",
        announcements.len(),
        carousel.len(),
        featured.featured_blogs.len(),
        featured.featured_events.len()
    );

    let overview = Overview {
        announcements: announcements.items,
        carousel: carousel.items,
        featured_blogs: featured.featured_blogs,
        featured_events: featured.featured_events,
    };

    match ctx.format {
        OutputFormat::Json => {
            let output = JsonOutput::new(&overview).source(loader.source_mode().to_string());
            println!("{}", format_output(&output)?);
        }
        _ => {
            section::<_, CarouselDisplay>("Carousel", overview.carousel);
            section::<_, AnnouncementDisplay>("Announcements", overview.announcements);
            section::<_, BlogDisplay>("Featured blogs", overview.featured_blogs);
            section::<_, EventDisplay>("Featured events", overview.featured_events);
        }
    }
    ctx.note_source();
    Ok(())
}

/// Run the search command
pub async fn search(opts: &GlobalOptions, query: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let results = ctx.loader.search(query).await;
    debug!(
        "Search '{}': {} blogs, {} events",
        query,
        results.blogs.len(),
        results.events.len()
    );

    match ctx.format {
        OutputFormat::Json => {
            let output = JsonOutput::new(&results).source(ctx.loader.source_mode().to_string());
            println!("{}", format_output(&output)?);
        }
        _ if results.is_empty() => println!("No results for \"{}\".", query.trim()),
        _ => {
            section::<_, BlogDisplay>("Blogs", results.blogs);
            section::<_, EventDisplay>("Events", results.events);
        }
    }
    ctx.note_source();
    Ok(())
}

fn section<T, D: From<T> + Tabled>(title: &str, items: Vec<T>) {
    let rows: Vec<D> = items.into_iter().map(D::from).collect();
    println!("{} {}", title.bold(), format!("({})", rows.len()).dimmed());
    println!("{}\n", format_table(&rows));
}
