//! Client error types.

use hide_config::ConfigError;
use hide_core::errors::TaskRequestError;
use thiserror::Error;

/// Errors returned by [`crate::HideClient`].
///
/// Remote failures come in two shapes. Project creation and task listing
/// report only the status ([`HideError::Http`]). Task runs and every file
/// operation keep the raw response body ([`HideError::Api`]).
#[derive(Debug, Error)]
pub enum HideError {
    /// Caller arguments were rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] TaskRequestError),

    /// The service returned a non-success status. The body is not kept.
    #[error("HTTP error ({status}) for url: {url}")]
    Http {
        /// HTTP status code returned by the service.
        status: u16,
        /// Request URL that produced the status.
        url: String,
    },

    /// The service returned a non-success status with an error body.
    #[error("Hide API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Raw, unparsed response body.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request could not be completed (connect, timeout, IO).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Client settings were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl HideError {
    /// Raw server body for [`HideError::Api`], `None` for every other kind.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Status code for the two remote kinds.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
