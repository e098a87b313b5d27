//! Configuration management for the GCADR content CLI

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::{CacheSettings, CacheTtl};
use crate::client::request::DEFAULT_TIMEOUT;
use crate::error::{ConfigError, Result};

/// Production API used when the site is served from a Vercel deployment.
pub const PRODUCTION_API_URL: &str = "https://gcadr-website.onrender.com";

/// Local development API.
pub const LOCAL_API_URL: &str = "http://localhost:8000";

/// Default static bundle root.
pub const DEFAULT_STATIC_ROOT: &str = "public";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Primary content API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Host name the site is served from (selects the production API on Vercel)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_host: Option<String>,

    /// Static fallback bundle root: a directory or an http(s) URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_root: Option<String>,

    /// Request timeout in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Response cache settings
    pub cache: CacheConfig,
}

/// Response cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether reads are cached at all
    pub enabled: bool,

    /// TTL for endpoints without a specific entry, in seconds
    pub default_ttl_secs: u64,

    /// Maximum number of cached responses (unbounded when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,

    /// Per-endpoint TTLs in seconds, keyed by logical name (`team`, `featured`, ...).
    /// Zero disables caching for that endpoint.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub endpoint_ttl_secs: HashMap<String, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_ttl_secs: CacheTtl::DEFAULT.as_secs(),
            max_entries: None,
            endpoint_ttl_secs: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// Resolve into loader cache settings.
    pub fn settings(&self) -> CacheSettings {
        CacheSettings {
            enabled: self.enabled,
            default_ttl: Duration::from_secs(self.default_ttl_secs),
            overrides: self
                .endpoint_ttl_secs
                .iter()
                .map(|(name, secs)| (name.clone(), Duration::from_secs(*secs)))
                .collect(),
            max_entries: self.max_entries,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".gcadr").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(PathBuf::from(path)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::Invalid("timeout_ms must be greater than zero".to_string()).into());
        }
        if let Some(ref url) = self.api_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::Invalid(format!(
                "api_url must be an http(s) URL, got '{}'",
                url
            ))
            .into());
        }
        Ok(())
    }

    /// Resolve the primary API base URL: explicit URL, then the production API
    /// for Vercel-hosted sites, then the local development server.
    pub fn resolve_api_url(&self) -> String {
        if let Some(ref url) = self.api_url
            && !url.trim().is_empty()
        {
            return url.trim_end_matches('/').to_string();
        }

        if self
            .site_host
            .as_deref()
            .is_some_and(|host| host.contains("vercel.app"))
        {
            return PRODUCTION_API_URL.to_string();
        }

        LOCAL_API_URL.to_string()
    }

    pub fn resolve_static_root(&self) -> String {
        self.static_root
            .clone()
            .filter(|root| !root.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_ROOT.to_string())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_url.is_none());
        assert!(config.cache.enabled);
        assert_eq!(config.cache.default_ttl_secs, 300);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.resolve_static_root(), "public");
    }

    #[test]
    fn test_api_url_resolution_order() {
        let mut config = Config {
            site_host: Some("gcadr-site.vercel.app".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_url(), PRODUCTION_API_URL);

        config.api_url = Some("https://staging.example/".to_string());
        assert_eq!(config.resolve_api_url(), "https://staging.example");

        let local = Config {
            site_host: Some("localhost".to_string()),
            ..Default::default()
        };
        assert_eq!(local.resolve_api_url(), LOCAL_API_URL);
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "api_url: http://api.test\ntimeout_ms: 2500\ncache:\n  default_ttl_secs: 60\n  endpoint_ttl_secs:\n    team: 0\n",
        )
        .unwrap();

        let config = Config::load_from(path).unwrap();

        assert_eq!(config.resolve_api_url(), "http://api.test");
        assert_eq!(config.timeout(), Duration::from_millis(2500));
        assert!(config.cache.enabled);

        let settings = config.cache.settings();
        assert_eq!(settings.ttl_for("blogs"), Some(Duration::from_secs(60)));
        assert_eq!(settings.ttl_for("team"), None);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.yaml");

        let err = Config::load_at(path.to_str()).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "\n").unwrap();

        let config = Config::load_from(path).unwrap();
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "cache: [not, a, map]").unwrap();

        let err = Config::load_from(path).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            timeout_ms: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_api_url_rejected() {
        let config = Config {
            api_url: Some("ftp://example".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
