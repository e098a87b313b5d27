//! Event commands

use colored::Colorize;

use crate::cli::args::{EventFilterArgs, GlobalOptions};
use crate::cli::handlers::{not_found, print_detail, run_list_command};
use crate::cli::CommandContext;
use crate::client::ContentApi;
use crate::client::models::Event;
use crate::error::Result;
use crate::models::EventDisplay;
use crate::output::formatters::{format_date_range, strip_html};

/// Run the event list command
pub async fn list(opts: &GlobalOptions, filters: &EventFilterArgs) -> Result<()> {
    let filter = filters.to_filter();
    run_list_command::<Event, EventDisplay, _, _>(opts, "events", |loader| async move {
        loader.list_events(&filter).await
    })
    .await
}

/// Run the event get command
pub async fn get(opts: &GlobalOptions, slug: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let event = ctx
        .loader
        .get_event(slug)
        .await
        .ok_or_else(|| not_found("Event", slug))?;

    print_detail::<_, EventDisplay>(&ctx, event, print_event)
}

fn print_event(event: &Event) {
    println!("{}", event.title.bold());
    if let Some(ref kind) = event.event_type {
        println!("{}", kind.to_uppercase().cyan());
    }
    println!(
        "When:  {}",
        format_date_range(event.start_date.as_deref(), event.end_date.as_deref())
    );
    if !event.location.is_empty() {
        println!("Where: {}", event.location);
    }
    if let Some(ref link) = event.registration_link {
        println!("Register: {}", link.green());
    }

    println!();
    let body = event.content.as_deref().unwrap_or(&event.description);
    println!("{}", strip_html(body));
}
