//! The HTTP transport seam.
//!
//! [`HideClient`](crate::HideClient) speaks to the service only through
//! [`Transport`]. [`ReqwestTransport`] is the production implementation; tests
//! substitute in-memory fakes.

use hide_config::ClientConfig;
pub use reqwest::Method;
use std::sync::Arc;

use crate::error::HideError;

/// A single request to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json` when present.
    pub body: Option<serde_json::Value>,
}

/// Status and unparsed body of a completed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs one blocking HTTP round trip.
///
/// Implementations return `Ok` for every response that carries a status,
/// including 4xx and 5xx. Status policy belongs to the client.
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the full response body.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::Transport`] if no response could be obtained.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HideError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HideError> {
        (**self).send(request)
    }
}

/// [`Transport`] backed by `reqwest::blocking::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport with the timeouts and user agent from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::Transport`] if the underlying client fails to
    /// build (e.g. the TLS backend cannot be initialized).
    pub fn new(config: &ClientConfig) -> Result<Self, HideError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HideError> {
        let mut builder = self.http.request(request.method.clone(), &request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpResponse { status, body })
    }
}
