//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::ContentApi;
use crate::config::Config;
use crate::content::endpoints::Collection;
use crate::error::Result;
use crate::source::{SourceMode, StaticSource};

/// Run the status command: show the effective configuration and probe the
/// primary content API.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "GCADR Content Status".bold());

    let config_path = match opts.config_ref() {
        Some(path) => path.to_string(),
        None => Config::default_path()?.display().to_string(),
    };
    println!("Config file: {}", config_path.cyan());

    let ctx = match CommandContext::new(opts).await {
        Ok(ctx) => ctx,
        Err(e) => {
            println!("{} Configuration invalid: {}", "✗".red(), e);
            println!();
            return Err(e);
        }
    };

    println!("API URL:     {}", ctx.loader.base_url().cyan());
    println!(
        "Static root: {}",
        ctx.loader.static_source().describe().cyan()
    );
    println!("Timeout:     {:?}", ctx.config.timeout());
    println!();

    let settings = ctx.config.cache.settings();
    if settings.enabled && !opts.no_cache {
        println!(
            "{} Response cache enabled (default TTL {}s)",
            "✓".green(),
            settings.default_ttl.as_secs()
        );
    } else {
        println!("{} Response cache disabled", "○".dimmed());
    }

    ctx.loader.list_announcements(Some(1)).await;
    match ctx.loader.source_mode() {
        SourceMode::Primary => println!("{} Content API reachable", "✓".green()),
        SourceMode::Degraded => {
            println!("{} Content API unreachable", "✗".red());
            if static_available(ctx.loader.static_source()).await {
                println!("{} Static content available", "✓".green());
            } else {
                println!("{} Static content unavailable", "✗".red());
                println!(
                    "  → Check {} or pass --static-root",
                    ctx.loader.static_source().describe()
                );
            }
        }
    }
    println!();

    Ok(())
}

/// Whether the static bundle serves the announcements document, even an
/// empty one.
async fn static_available<S: StaticSource>(source: &S) -> bool {
    source
        .fetch(&Collection::Announcements.static_document())
        .await
        .is_ok()
}
