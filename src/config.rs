use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Client configuration for the recipe search service
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Base URL of the search service; `/search` is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SEARCH__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SEARCH__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_SEARCH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
