//! Network transport for the primary content API

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::multipart::{Form, Part};

use super::request::{RequestBody, RequestDescriptor};
use crate::error::ApiError;

/// Raw HTTP response as seen by the dispatcher.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single network exchange.
///
/// Implementations must not retry and must not apply their own caching; the
/// dispatcher owns timeout and status classification.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, request: &RequestDescriptor) -> Result<RawResponse, ApiError>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Create a transport with JSON defaults.
    pub fn new() -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gcadr-content/", env!("CARGO_PKG_VERSION"))),
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self { http })
    }
}

fn multipart_form(body: &super::request::MultipartForm) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in &body.fields {
        form = form.text(name.clone(), value.clone());
    }
    for file in &body.files {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| ApiError::InvalidRequest(format!("bad content type: {}", e)))?;
        form = form.part(file.field.clone(), part);
    }
    Ok(form)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, request: &RequestDescriptor) -> Result<RawResponse, ApiError> {
        let mut builder = self.http.request(request.method.as_http(), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(form) => builder.multipart(multipart_form(form)?),
        };

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::from)?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}
