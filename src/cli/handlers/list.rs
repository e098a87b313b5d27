//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Create command context
//! 2. Fetch the listing through the content loader
//! 3. Convert to display type
//! 4. Print output, noting when static content was served

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::context::SiteLoader;
use crate::client::ContentApi;
use crate::content::Listing;
use crate::error::Result;
use crate::output::{Formattable, Page};

/// Run a standard list command with the common fetch → display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The content model returned by the fetcher (e.g., `TeamMember`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<TeamMember, TeamMemberDisplay, _, _>(
///     opts,
///     "team members",
///     |loader| async move { loader.list_team().await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Listing<T>>,
    F: FnOnce(Arc<SiteLoader>) -> Fut,
{
    let ctx = CommandContext::new(opts).await?;

    debug!("Fetching {}", resource_name);
    let listing = fetcher(ctx.loader.clone()).await;
    debug!(
        "Fetched {} of {} {}",
        listing.len(),
        listing.total_count,
        resource_name
    );

    let page = to_page::<T, D>(listing, &ctx.loader.source_mode().to_string());
    page.print(ctx.format)?;
    ctx.note_source();

    Ok(())
}

/// Convert a listing into display rows, keeping the source's total count.
pub fn to_page<T, D: From<T>>(listing: Listing<T>, source: &str) -> Page<D> {
    Page {
        total_count: listing.total_count,
        rows: listing.items.into_iter().map(D::from).collect(),
        source: source.to_string(),
    }
}
