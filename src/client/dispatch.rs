//! Request dispatch with bounded latency
//!
//! One dispatch is exactly one transport attempt. The in-flight exchange is
//! dropped (and so cancelled) when the request's timeout elapses.

use log::debug;
use serde_json::Value;

use super::request::RequestDescriptor;
use super::transport::{RawResponse, Transport};
use crate::error::{ApiError, FieldErrors};

/// Dispatches requests to the primary content source.
pub struct Dispatcher<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL of the primary source, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access the underlying transport.
    #[allow(dead_code)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Perform one request and classify the outcome.
    pub async fn dispatch(&self, request: &RequestDescriptor) -> Result<Value, ApiError> {
        request.validate()?;

        let url = self.url_for(&request.endpoint);
        debug!("{} {}", request.method.as_http(), url);

        let response =
            match tokio::time::timeout(request.timeout, self.transport.send(&url, request)).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(ApiError::Timeout {
                        endpoint: request.endpoint.clone(),
                        timeout: request.timeout,
                    });
                }
            };

        classify(response)
    }
}

/// Map a raw response onto a JSON payload or a typed error.
fn classify(response: RawResponse) -> Result<Value, ApiError> {
    if response.is_success() {
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(&response.body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        });
    }

    if matches!(response.status, 400 | 422)
        && let Some(errors) = FieldErrors::from_body(&response.body)
    {
        return Err(ApiError::Rejected(errors));
    }

    Err(ApiError::Http {
        status: response.status,
        status_text: response.status_text,
    })
}
