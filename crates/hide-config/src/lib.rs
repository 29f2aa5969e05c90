//! # hide-config
//!
//! Layered configuration loading for the Hide client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HIDE_*` prefix, `__` as separator)
//! 2. Project-level `.hide/config.toml`
//! 3. User-level `~/.config/hide/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HIDE_CLIENT__BASE_URL` -> `client.base_url`,
//! `HIDE_CLIENT__TIMEOUT_SECS` -> `client.timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hide_config::HideConfig;
//!
//! let config = HideConfig::load_with_dotenv().expect("config");
//! println!("Hide service: {}", config.client.base_url);
//! ```

mod client;
mod error;

pub use client::ClientConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HideConfig {
    #[serde(default)]
    pub client: ClientConfig,
}

impl HideConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers and tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".hide/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HIDE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hide").join("config.toml"))
    }
}
