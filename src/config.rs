use std::{env, fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::subgraph_client::{
    PageSize, SubgraphClient, SubgraphClientOptions, DEFAULT_ENDPOINT, DEFAULT_MAX_PAGES,
    DEFAULT_REQUEST_TIMEOUT, FACTORY_ADDRESS, MAX_PAGE_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubgraphConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_factory_address")]
    pub factory_address: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_factory_address() -> String {
    FACTORY_ADDRESS.to_string()
}

fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_secs()
}

impl Default for SubgraphConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            factory_address: default_factory_address(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SubgraphConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&data)
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        let mut cfg = Self::parse(data)?;
        cfg.apply_env_overrides();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults with `SUBGRAPH_*` overrides, for setups without a config file.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_env_overrides();
        cfg.validate()?;
        Ok(cfg)
    }

    fn parse(data: &str) -> Result<Self> {
        let raw: toml::Value =
            toml::from_str(data).with_context(|| "Failed to parse TOML config")?;
        // Support nested [subgraph] tables or top-level entries.
        let table = match raw.get("subgraph").filter(|v| v.is_table()).cloned() {
            Some(nested) => nested,
            None => raw,
        };
        table
            .try_into()
            .with_context(|| "Invalid subgraph config structure")
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Each field can be overridden by `SUBGRAPH_*` env vars.
        override_string(&lookup, "SUBGRAPH_ENDPOINT", &mut self.endpoint);
        override_string(
            &lookup,
            "SUBGRAPH_FACTORY_ADDRESS",
            &mut self.factory_address,
        );
        override_parsed(&lookup, "SUBGRAPH_PAGE_SIZE", &mut self.page_size);
        override_parsed(&lookup, "SUBGRAPH_MAX_PAGES", &mut self.max_pages);
        override_parsed(
            &lookup,
            "SUBGRAPH_REQUEST_TIMEOUT_SECS",
            &mut self.request_timeout_secs,
        );
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            url::Url::parse(&self.endpoint).is_ok(),
            "endpoint must be an absolute URL"
        );
        anyhow::ensure!(
            !self.factory_address.trim().is_empty(),
            "factory_address cannot be empty"
        );
        anyhow::ensure!(
            (1..=MAX_PAGE_SIZE).contains(&self.page_size),
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        );
        anyhow::ensure!(self.max_pages > 0, "max_pages must be at least 1");
        anyhow::ensure!(
            self.request_timeout_secs > 0,
            "request_timeout_secs must be greater than zero"
        );
        Ok(())
    }

    pub fn client_options(&self) -> Result<SubgraphClientOptions> {
        Ok(SubgraphClientOptions::default()
            .with_factory_address(self.factory_address.clone())
            .with_page_size(PageSize::new(self.page_size)?)
            .with_max_pages(self.max_pages)
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs)))
    }

    pub fn build_client(&self) -> Result<SubgraphClient> {
        let client = SubgraphClient::new_with_options(&self.endpoint, self.client_options()?)?;
        Ok(client)
    }
}

fn override_string(lookup: &impl Fn(&str) -> Option<String>, key: &str, field: &mut String) {
    if let Some(value) = lookup(key) {
        if !value.trim().is_empty() {
            *field = value;
        }
    }
}

fn override_parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    field: &mut T,
) {
    if let Some(value) = lookup(key) {
        if let Ok(parsed) = value.trim().parse::<T>() {
            *field = parsed;
        }
    }
}
