//! # hide-client
//!
//! Blocking HTTP client for the Hide project service.
//!
//! Wraps the service's REST endpoints:
//! - projects: create from a repository URL
//! - tasks: list predefined tasks, run a task or an ad-hoc command
//! - files: create, read, update, delete and list project files
//!
//! Every operation performs exactly one round trip and returns a fully
//! populated record or a [`HideError`]. There are no retries and no caching.
//!
//! ```no_run
//! use hide_client::HideClient;
//!
//! let client = HideClient::new("http://localhost:8080")?;
//! let project = client.create_project("https://github.com/hide-org/hide.git")?;
//! let result = client.run_task(&project.id, Some("ls"), None)?;
//! println!("{}", result.std_out);
//! # Ok::<(), hide_client::HideError>(())
//! ```

pub mod files;
pub mod projects;
pub mod tasks;
pub mod transport;

mod error;
mod http;
#[cfg(test)]
mod test_support;

pub use error::HideError;
pub use hide_config::ClientConfig;
pub use hide_core::{entities, requests};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};

use serde::Serialize;

// ── Client ─────────────────────────────────────────────────────────

/// Client for one Hide service instance.
///
/// Holds only the base URL and the transport. Both are fixed at
/// construction, so a client can be shared freely between threads. Writes to
/// the same project from several callers are not ordered client-side.
pub struct HideClient {
    base_url: String,
    transport: Box<dyn Transport>,
}

impl HideClient {
    /// Create a client for `base_url` using [`ReqwestTransport`] with default
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::Transport`] if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, HideError> {
        Self::from_config(&ClientConfig::with_base_url(base_url))
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::Config`] if the settings are invalid and
    /// [`HideError::Transport`] if the HTTP client fails to build.
    pub fn from_config(config: &ClientConfig) -> Result<Self, HideError> {
        config.validate()?;
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(config.base_url.clone(), transport))
    }

    /// Create a client that sends every request through `transport`.
    pub fn with_transport(base_url: impl Into<String>, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: base_url.into(),
            transport: Box::new(transport),
        }
    }

    /// Root of every request URL, exactly as given at construction.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/projects/{project_id}{suffix}` with the id percent-encoded.
    fn project_url(&self, project_id: &str, suffix: &str) -> String {
        format!(
            "{}/projects/{}{suffix}",
            self.base_url,
            urlencoding::encode(project_id)
        )
    }

    /// URL of a single project file. Each `/`-separated segment of `path` is
    /// percent-encoded; the separators are kept.
    fn file_url(&self, project_id: &str, path: &str) -> String {
        let encoded: Vec<_> = path.split('/').map(urlencoding::encode).collect();
        self.project_url(project_id, &format!("/files/{}", encoded.join("/")))
    }

    /// Send a request with `body` serialized as JSON.
    fn send_json<B: Serialize>(
        &self,
        method: Method,
        url: String,
        body: &B,
    ) -> Result<HttpResponse, HideError> {
        let body = serde_json::to_value(body)?;
        self.execute(&HttpRequest {
            method,
            url,
            body: Some(body),
        })
    }

    /// Send a request without a body.
    fn send_empty(&self, method: Method, url: String) -> Result<HttpResponse, HideError> {
        self.execute(&HttpRequest {
            method,
            url,
            body: None,
        })
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HideError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let resp = self.transport.send(request)?;
        tracing::debug!(status = resp.status, url = %request.url, "received response");
        Ok(resp)
    }
}
