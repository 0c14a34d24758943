//! Configuration model loaded from external sources.

use std::env;

use config::Config;
use serde::Deserialize;

use crate::DEFAULT_ITEMS_PER_PAGE;

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the console front-end.
pub struct DirectoryConfig {
    /// JSON or CSV file with the initial employee records.
    pub seed_path: String,
    /// Glob passed to Tera for the output templates.
    pub templates_dir: String,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Artificial pause before a save or delete is applied.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl DirectoryConfig {
    /// Reads `config/default.yaml`, the optional `config/{APP_ENV}.yaml`
    /// profile (defaults to `local`) and `APP_*` environment overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
