//! Engine configuration.
//!
//! Settings come from a RON file (optional) and are then overridden by
//! environment variables, so a deployment can point the engine at a mirror
//! without editing files:
//!
//! ```ron
//! (
//!     base_url: "https://pokeapi.co/api/v2",
//!     language: "en",
//!     window_size: 20,
//! )
//! ```

use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Path of a RON configuration file
pub const CONFIG_PATH_ENV: &str = "POKEDEX_CONFIG";
/// Catalog base url override
pub const API_URL_ENV: &str = "POKEDEX_API_URL";
/// Target language override
pub const LANGUAGE_ENV: &str = "POKEDEX_LANGUAGE";

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_WINDOW_SIZE: u32 = 30;
pub const DEFAULT_START_IDENTIFIER: u32 = 1;
pub const DEFAULT_PRIMARY_VERSION: &str = "national";
pub const DESCRIPTION_UNAVAILABLE: &str = "description unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Catalog root, without a trailing slash
    pub base_url: String,
    /// Language tag every localized field is resolved against
    pub language: String,
    /// Species description used when no flavor text exists in `language`
    pub description_fallback: String,
    /// Ability description used when no flavor text exists or the fetch failed
    pub ability_fallback: String,
    pub window_size: u32,
    pub start_identifier: u32,
    /// Ceiling on in-flight catalog requests, shared by every fan-out of one aggregator
    pub max_concurrency: usize,
    pub request_timeout_secs: u64,
    /// Version whose ordinal orders paginated windows
    pub primary_version: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "ja".to_string(),
            description_fallback: DESCRIPTION_UNAVAILABLE.to_string(),
            ability_fallback: DESCRIPTION_UNAVAILABLE.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
            start_identifier: DEFAULT_START_IDENTIFIER,
            max_concurrency: 16,
            request_timeout_secs: 30,
            primary_version: DEFAULT_PRIMARY_VERSION.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_ron_str(text: &str) -> EngineResult<Self> {
        let config: EngineConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a RON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loaded engine configuration");
        Self::from_ron_str(&text)
    }

    /// Build a configuration from `POKEDEX_CONFIG` (if set) plus the
    /// `POKEDEX_API_URL` / `POKEDEX_LANGUAGE` overrides.
    pub fn from_env() -> EngineResult<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.base_url = url;
        }
        if let Ok(language) = std::env::var(LANGUAGE_ENV) {
            config.language = language;
        }

        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(EngineError::config(format!(
                "base_url must be an http(s) url, got '{}'",
                self.base_url
            )));
        }
        if self.language.trim().is_empty() {
            return Err(EngineError::config("language must not be empty"));
        }
        if self.window_size == 0 {
            return Err(EngineError::config("window_size must be at least 1"));
        }
        if self.start_identifier == 0 {
            return Err(EngineError::config("start_identifier must be at least 1"));
        }
        if self.max_concurrency == 0 {
            return Err(EngineError::config("max_concurrency must be at least 1"));
        }
        Ok(())
    }
}
