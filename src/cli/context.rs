//! Command execution context
//!
//! Loads configuration, applies the global overrides and builds the content
//! loader every command reads and writes through.

use std::sync::Arc;

use colored::Colorize;
use log::debug;

use crate::cache::TtlCache;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{ContentApi, Dispatcher, HttpTransport};
use crate::config::Config;
use crate::content::ContentLoader;
use crate::error::Result;
use crate::source::{AssetSource, SourceMode, SourceModeController, StaticSource};

/// Loader type used by the CLI: HTTP primary, directory or HTTP static bundle.
pub type SiteLoader = ContentLoader<HttpTransport, AssetSource>;

/// Context for command execution containing config, loader and output format.
pub struct CommandContext {
    /// Loaded configuration with CLI/env overrides applied
    pub config: Config,
    /// Content loader (Arc-wrapped so concurrent reads can share it)
    pub loader: Arc<SiteLoader>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file cannot be loaded, an override is
    /// invalid or the HTTP client cannot be built.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;

        let mut settings = config.cache.settings();
        if opts.no_cache {
            settings.enabled = false;
        }

        let api_url = config.resolve_api_url();
        let static_root = config.resolve_static_root();
        debug!(
            "Primary API: {}, static root: {}, timeout: {:?}",
            api_url,
            static_root,
            config.timeout()
        );

        let cache = Arc::new(TtlCache::with_capacity_limit(settings.max_entries));
        let mode = Arc::new(SourceModeController::new());
        let dispatcher = Dispatcher::new(HttpTransport::new()?, &api_url);
        let static_source = AssetSource::from_root(&static_root)?;

        let loader = ContentLoader::new(dispatcher, static_source, cache, mode)
            .with_settings(settings)
            .with_timeout(config.timeout());

        Ok(Self {
            config,
            loader: Arc::new(loader),
            format: opts.format,
        })
    }

    /// Print a dimmed note on stderr when reads are served from the static
    /// bundle. Stdout stays clean for scripts.
    pub fn note_source(&self) {
        if self.loader.source_mode() == SourceMode::Degraded {
            eprintln!(
                "{}",
                format!(
                    "Note: content API unreachable, showing static content from {}",
                    self.loader.static_source().describe()
                )
                .dimmed()
            );
        }
    }
}

/// Load the config file and layer the CLI/env overrides on top.
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_at(opts.config_ref())?;

    if let Some(ref url) = opts.api_url {
        config.api_url = Some(url.clone());
    }
    if let Some(ref host) = opts.site_host {
        config.site_host = Some(host.clone());
    }
    if let Some(ref root) = opts.static_root {
        config.static_root = Some(root.clone());
    }
    if let Some(ms) = opts.timeout_ms {
        config.timeout_ms = Some(ms);
    }

    config.validate()?;
    Ok(config)
}
