//! Static fallback content sources
//!
//! The static bundle mirrors the site export: list documents at
//! `api/<name>.json`, detail documents at `api/<collection>/<slug>.json` and
//! media files under `media/`. It can live on disk or behind a plain HTTP
//! server.

pub mod mode;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::error::ApiError;

pub use mode::{SourceMode, SourceModeController};

/// Secondary read-only source used when the primary API is unavailable.
#[async_trait]
pub trait StaticSource: Send + Sync {
    /// Load one JSON document, e.g. `api/team.json`.
    async fn fetch(&self, document: &str) -> Result<Value, ApiError>;

    /// Base location media references are joined to.
    fn asset_base(&self) -> String;

    /// Human-readable location for status output.
    fn describe(&self) -> String;
}

/// Static bundle on the local filesystem.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Use `root` as the bundle root. Relative roots resolve against the
    /// current directory.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(Self {
            root: std::path::absolute(root)?,
        })
    }

    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl StaticSource for DirectorySource {
    async fn fetch(&self, document: &str) -> Result<Value, ApiError> {
        let path = self.root.join(document.trim_start_matches('/'));
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| ApiError::Transport(format!("{}: {}", path.display(), e)))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn asset_base(&self) -> String {
        format!("file://{}", self.root.display())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Static bundle served over HTTP (e.g. the deployed site's `public/`).
pub struct HttpStaticSource {
    http: HttpClient,
    base_url: String,
}

impl HttpStaticSource {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl StaticSource for HttpStaticSource {
    async fn fetch(&self, document: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.base_url, document.trim_start_matches('/'));
        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse {}: {}", url, e))
        })
    }

    fn asset_base(&self) -> String {
        self.base_url.clone()
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Static source selected from a configured root.
pub enum AssetSource {
    Directory(DirectorySource),
    Http(HttpStaticSource),
}

impl AssetSource {
    /// `http://` and `https://` roots are fetched over HTTP; anything else is
    /// a directory.
    pub fn from_root(root: &str) -> crate::error::Result<Self> {
        if root.starts_with("http://") || root.starts_with("https://") {
            Ok(AssetSource::Http(HttpStaticSource::new(root)?))
        } else {
            Ok(AssetSource::Directory(DirectorySource::new(root)?))
        }
    }
}

#[async_trait]
impl StaticSource for AssetSource {
    async fn fetch(&self, document: &str) -> Result<Value, ApiError> {
        match self {
            AssetSource::Directory(source) => source.fetch(document).await,
            AssetSource::Http(source) => source.fetch(document).await,
        }
    }

    fn asset_base(&self) -> String {
        match self {
            AssetSource::Directory(source) => source.asset_base(),
            AssetSource::Http(source) => source.asset_base(),
        }
    }

    fn describe(&self) -> String {
        match self {
            AssetSource::Directory(source) => source.describe(),
            AssetSource::Http(source) => source.describe(),
        }
    }
}
