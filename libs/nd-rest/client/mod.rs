//! HTTP backend abstraction for the ND REST core
//!
//! The executor in [`crate::rest`] is written against [`HttpBackend`] so the
//! controller transport can be swapped for a scripted backend in tests. The
//! production implementation is the reqwest-based [`NdClient`].

mod escape;
mod nd;

pub use escape::escape_html_json;
pub use nd::NdClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::container::Container;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// HTTP methods accepted by the controller API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }

    /// Lowercase form used in diagnostic summaries.
    pub fn lowercase(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Patch => "patch",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// A fully built outbound request, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Vec<u8>>,
}

/// Result of dispatching a request. Status, parsed body and transport error
/// are carried independently: the classifier needs all three to decide the
/// outcome, and any subset may be absent.
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    pub body: Option<Container>,
    pub status: Option<u16>,
    pub error: Option<String>,
}

/// Transport abstraction the executor dispatches through.
///
/// The request builders have default implementations; backends normally only
/// provide [`HttpBackend::do_request`].
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Build a request from a structured payload. In escaped mode the
    /// serialized body has `<`, `>` and `&` encoded as unicode escapes,
    /// matching the encoding the controller expects from framework clients.
    fn make_rest_request(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Container>,
        escape_html: bool,
    ) -> Result<RestRequest, BackendError> {
        if path.is_empty() {
            return Err(BackendError::InvalidRequest("path is empty".to_string()));
        }
        let body = payload.map(|p| {
            let raw = p.encode_json();
            if escape_html {
                escape_html_json(&raw)
            } else {
                raw
            }
        });
        Ok(RestRequest {
            method,
            path: path.to_string(),
            body,
        })
    }

    /// Build a request from pre-serialized bytes. No escaping is applied.
    fn make_rest_request_raw(
        &self,
        method: Method,
        path: &str,
        raw: Vec<u8>,
        _escape_html: bool,
    ) -> Result<RestRequest, BackendError> {
        if path.is_empty() {
            return Err(BackendError::InvalidRequest("path is empty".to_string()));
        }
        Ok(RestRequest {
            method,
            path: path.to_string(),
            body: Some(raw),
        })
    }

    /// Dispatch a built request. Never panics: transport failures come back
    /// in [`Exchange::error`].
    async fn do_request(&self, request: RestRequest) -> Exchange;
}
