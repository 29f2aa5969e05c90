//! Client connection settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_user_agent() -> String {
    concat!("hide-client/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of every request URL. Used verbatim, a trailing slash is kept.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds. `0` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: u64,

    /// Connect timeout in seconds. `0` keeps the transport default.
    #[serde(default)]
    pub connect_timeout_secs: u64,

    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
            connect_timeout_secs: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Settings for `base_url` with every other field at its default.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Option<Duration> {
        if self.connect_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.connect_timeout_secs))
        }
    }

    /// Check that the settings can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_url` is empty, has
    /// surrounding whitespace, or is not an `http://` or `https://` URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.as_str();
        if base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "client.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if base_url.trim() != base_url {
            return Err(ConfigError::InvalidValue {
                field: "client.base_url".into(),
                reason: format!("'{base_url}' has leading or trailing whitespace"),
            });
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "client.base_url".into(),
                reason: format!("'{base_url}' is not an http(s) URL"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout(), None);
        assert_eq!(config.connect_timeout(), None);
        assert!(config.user_agent.starts_with("hide-client/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nonzero_timeouts_become_durations() {
        let config = ClientConfig {
            timeout_secs: 30,
            connect_timeout_secs: 5,
            ..ClientConfig::default()
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.connect_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn trailing_slash_is_kept() {
        let config = ClientConfig::with_base_url("http://hide.local/");
        assert_eq!(config.base_url, "http://hide.local/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_base_url_is_invalid() {
        let err = ClientConfig::with_base_url("  ").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "client.base_url"));
    }

    #[test]
    fn surrounding_whitespace_is_invalid() {
        for base_url in ["http://h ", " http://h", "http://h\n"] {
            let err = ClientConfig::with_base_url(base_url).validate().unwrap_err();
            assert!(err.to_string().contains("whitespace"), "{base_url:?}");
        }
    }

    #[test]
    fn non_http_base_url_is_invalid() {
        let err = ClientConfig::with_base_url("ftp://hide.local")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("not an http(s) URL"));
    }
}
