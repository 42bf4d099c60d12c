//! Build and page configuration.

use serde::{Deserialize, Serialize};

use crate::model::{GridSize, InitMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvName {
    Test,
    Dev,
    Prod,
}

impl EnvName {
    /// Accepts the short names plus `development`/`production`. Anything else
    /// is treated as dev.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "test" => EnvName::Test,
            "prod" | "production" => EnvName::Prod,
            _ => EnvName::Dev,
        }
    }

    /// Environment baked in at compile time through `APP_ENV`.
    pub fn current() -> Self {
        option_env!("APP_ENV").map_or(EnvName::Dev, EnvName::parse)
    }

    pub fn logging_enabled(self) -> bool {
        self != EnvName::Prod
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: EnvName,
    pub default_size: GridSize,
    /// Board seed from the page URL; `None` means `Math.random()`.
    pub seed: Option<u64>,
    pub init: InitMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: EnvName::current(),
            default_size: GridSize::default(),
            seed: None,
            init: InitMode::Random,
        }
    }
}

impl AppConfig {
    /// Reads the page URL for overrides. Falls back to defaults outside a
    /// browser.
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|win| win.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn from_query(search: &str) -> Self {
        Self {
            seed: parse_seed(search),
            init: parse_init(search),
            ..Self::default()
        }
    }
}

fn query_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Extracts `seed=N` from a `?a=b&c=d` query string.
pub fn parse_seed(search: &str) -> Option<u64> {
    query_param(search, "seed").and_then(|v| v.parse().ok())
}

/// `init=zeroed` starts every cell empty; anything else is random.
pub fn parse_init(search: &str) -> InitMode {
    match query_param(search, "init") {
        Some("zeroed") => InitMode::Zeroed,
        _ => InitMode::Random,
    }
}
