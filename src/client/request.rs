//! Request descriptors for the content API
//!
//! A [`RequestDescriptor`] captures everything needed to perform one logical
//! read or write: endpoint, method, query, body, cache policy and timeout.

use std::path::Path;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheTtl, cache_key};
use crate::error::ApiError;

/// Default bound on a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Logical request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Content read (GET)
    Read,
    /// Form submission (POST)
    Write,
}

impl Method {
    /// Wire method for this request.
    pub fn as_http(&self) -> reqwest::Method {
        match self {
            Method::Read => reqwest::Method::GET,
            Method::Write => reqwest::Method::POST,
        }
    }
}

/// Caching policy for a read request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub enabled: bool,
    pub ttl: Duration,
}

impl CachePolicy {
    /// Cache for the given duration.
    pub fn ttl(ttl: Duration) -> Self {
        Self { enabled: true, ttl }
    }

    /// Never cache.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ttl: Duration::ZERO,
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::ttl(CacheTtl::DEFAULT)
    }
}

/// A file attached to a multipart submission.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Form field name (e.g. `cv`)
    pub field: String,
    /// File name reported to the server
    pub file_name: String,
    /// MIME type
    pub content_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Read a file from disk into an attachment for `field`.
    pub async fn from_path(field: &str, path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| field.to_string());

        Ok(Self {
            field: field.to_string(),
            content_type: guess_content_type(&file_name).to_string(),
            file_name,
            bytes,
        })
    }
}

/// MIME type for the document formats accepted by the application forms.
fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "rtf" => "application/rtf",
        _ => "application/octet-stream",
    }
}

/// Multipart form body: text fields plus file attachments.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<Attachment>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    /// Add a file attachment.
    pub fn file(mut self, attachment: Attachment) -> Self {
        self.files.push(attachment);
        self
    }
}

/// Request body.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

/// One logical request against the primary content source.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Endpoint path relative to the API base URL (e.g. `/api/team/`)
    pub endpoint: String,
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub cache: CachePolicy,
    pub timeout: Duration,
}

impl RequestDescriptor {
    fn new(endpoint: impl Into<String>, method: Method) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            query: Vec::new(),
            body: RequestBody::Empty,
            cache: match method {
                Method::Read => CachePolicy::default(),
                Method::Write => CachePolicy::disabled(),
            },
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// A cacheable read of `endpoint`.
    pub fn read(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, Method::Read)
    }

    /// A write to `endpoint`. Writes are never cached.
    pub fn write(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, Method::Write)
    }

    /// Append a query parameter.
    pub fn query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.push((name.to_string(), value.into()));
        self
    }

    /// Set a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Set a multipart body.
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Set the cache policy. Ignored for writes.
    pub fn cache(mut self, policy: CachePolicy) -> Self {
        if self.method == Method::Read {
            self.cache = policy;
        }
        self
    }

    /// Disable caching for this request.
    #[allow(dead_code)]
    pub fn no_cache(self) -> Self {
        self.cache(CachePolicy::disabled())
    }

    /// Set the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the descriptor's preconditions before dispatch.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.endpoint.trim().is_empty() {
            return Err(ApiError::InvalidRequest("endpoint must not be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(ApiError::InvalidRequest(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Cache key for this request, or `None` when it must not be cached.
    pub fn cache_key(&self) -> Option<String> {
        if self.method == Method::Write || !self.cache.enabled || self.cache.ttl.is_zero() {
            return None;
        }

        let params: Vec<(&str, &str)> = self
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        Some(cache_key(&self.endpoint, &params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_defaults() {
        let req = RequestDescriptor::read("/api/blogs/");
        assert_eq!(req.method, Method::Read);
        assert_eq!(req.timeout, DEFAULT_TIMEOUT);
        assert!(req.cache.enabled);
        assert_eq!(req.method.as_http(), reqwest::Method::GET);
    }

    #[test]
    fn test_write_is_never_cacheable() {
        let req = RequestDescriptor::write("/api/contact/submit/")
            .cache(CachePolicy::ttl(Duration::from_secs(60)))
            .json(json!({"name": "A"}));

        assert!(!req.cache.enabled);
        assert!(req.cache_key().is_none());
        assert_eq!(req.method.as_http(), reqwest::Method::POST);
    }

    #[test]
    fn test_cache_key_ignores_param_order() {
        let a = RequestDescriptor::read("/api/blogs/")
            .query("a", "1")
            .query("b", "2");
        let b = RequestDescriptor::read("/api/blogs/")
            .query("b", "2")
            .query("a", "1");

        assert_eq!(a.cache_key(), b.cache_key());
        assert!(a.cache_key().is_some());
    }

    #[test]
    fn test_no_cache_has_no_key() {
        let req = RequestDescriptor::read("/api/search/").no_cache();
        assert!(req.cache_key().is_none());
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let err = RequestDescriptor::read("  ").validate().unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let err = RequestDescriptor::read("/api/team/")
            .timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("cv.PDF"), "application/pdf");
        assert!(guess_content_type("sample.docx").contains("wordprocessingml"));
        assert_eq!(guess_content_type("noext"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_attachment_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let attachment = Attachment::from_path("cv", &path).await.unwrap();

        assert_eq!(attachment.field, "cv");
        assert_eq!(attachment.file_name, "resume.pdf");
        assert_eq!(attachment.content_type, "application/pdf");
        assert_eq!(attachment.bytes, b"%PDF-1.4");
    }
}
