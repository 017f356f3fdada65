//! Configuration loader for search limits.
//!
//! Uses Figment to merge `qasearch.toml` + `qasearch.<env>.toml` + `QASEARCH_*`
//! env vars. The `search` table deserializes into [`SearchLimits`]; absent keys
//! keep their defaults.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "qasearch.toml";
pub const ENV_PREFIX: &str = "QASEARCH_";

/// Hard ceilings on request bounds; configuration may only tighten them.
pub const MAX_QUERY_CHARS: usize = 60;
pub const MAX_PAGE_SIZE: u32 = 50;

/// Bounds enforced on inbound search requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    pub max_query_chars: usize,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { max_query_chars: MAX_QUERY_CHARS, default_page_size: 30, max_page_size: MAX_PAGE_SIZE }
    }
}

impl SearchLimits {
    pub fn validate(&self) -> Result<()> {
        if self.max_query_chars == 0 || self.max_query_chars > MAX_QUERY_CHARS {
            return Err(Error::InvalidConfig(format!(
                "search.max_query_chars must be between 1 and {}, got {}",
                MAX_QUERY_CHARS, self.max_query_chars
            )));
        }
        if self.max_page_size == 0 || self.max_page_size > MAX_PAGE_SIZE {
            return Err(Error::InvalidConfig(format!(
                "search.max_page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.max_page_size
            )));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(Error::InvalidConfig(format!(
                "search.default_page_size must be between 1 and {}, got {}",
                self.max_page_size, self.default_page_size
            )));
        }
        Ok(())
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Self::base().merge(Toml::file(CONFIG_FILE));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("qasearch.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("qasearch.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("qasearch.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        tracing::debug!(env = %env_name, "loaded search configuration");
        Self::from_figment(figment)
    }

    /// Loads a single explicit file; env vars still override it.
    pub fn load_from(path: &Path) -> Result<Self> {
        let figment = Self::base()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config = Self { figment };
        config.limits()?.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn limits(&self) -> Result<SearchLimits> {
        self.get("search")
    }

    fn base() -> Figment {
        Figment::from(Serialized::default("search", SearchLimits::default()))
    }
}
