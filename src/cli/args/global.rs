//! Global CLI options shared across all commands
//!
//! Collects the global flags once so handlers take a single `&GlobalOptions`
//! instead of a growing parameter list.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.gcadr/config.yaml)
    pub config: Option<String>,

    /// Primary content API base URL override
    pub api_url: Option<String>,

    /// Site host name used to pick the production API
    pub site_host: Option<String>,

    /// Static fallback root override (directory or URL)
    pub static_root: Option<String>,

    /// Request timeout override in milliseconds
    pub timeout_ms: Option<u64>,

    /// Disable the response cache for this run
    pub no_cache: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            site_host: cli.site_host.clone(),
            static_root: cli.static_root.clone(),
            timeout_ms: cli.timeout_ms,
            no_cache: cli.no_cache,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_copies_overrides() {
        let cli = Cli::parse_from([
            "gcadr",
            "--format",
            "json",
            "--api-url",
            "http://localhost:9000",
            "--timeout-ms",
            "2500",
            "--no-cache",
            "version",
        ]);

        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.api_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(opts.timeout_ms, Some(2500));
        assert!(opts.no_cache);
        assert_eq!(opts.config_ref(), None);
    }
}
