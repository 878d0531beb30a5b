//! Service settings.
//!
//! Layered lowest to highest: built-in defaults, an optional TOML file, then
//! `CATALOG__`-prefixed environment variables (`CATALOG__LOG__LEVEL=debug`,
//! `CATALOG__PAGINATION__MAX_PER_PAGE=50`).

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use catalog_core::{SearchQuery, SortDirection};
use catalog_observability::LogSettings;

pub const ENV_PREFIX: &str = "CATALOG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub pagination: PaginationSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_per_page: catalog_core::query::DEFAULT_PER_PAGE,
            max_per_page: 100,
        }
    }
}

impl PaginationSettings {
    /// Build a listing query, filling the page size from these settings.
    pub fn query(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
        terms: Option<String>,
        sort: Option<String>,
        direction: Option<SortDirection>,
    ) -> SearchQuery {
        let per_page = Some(per_page.unwrap_or(self.default_per_page));
        self.apply(SearchQuery::new(page, per_page, terms, sort, direction))
    }

    /// Enforce the configured page-size bounds on an incoming query.
    pub fn apply(&self, mut query: SearchQuery) -> SearchQuery {
        if query.per_page == 0 {
            query.per_page = self.default_per_page;
        }
        query.clamped(self.max_per_page)
    }
}

impl Settings {
    /// Load settings from `path` (if given and present) and the process
    /// environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with(path, environment())
    }

    fn load_with(path: Option<&Path>, env: config::Environment) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(env)
            .build()
            .context("failed to read settings")?;

        let settings: Settings = settings
            .try_deserialize()
            .context("failed to deserialise Settings")?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
