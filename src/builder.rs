use std::time::Duration;

use reqwest::Client;

use crate::client::SearchClient;
use crate::config::SearchConfig;
use crate::SearchError;

const DEFAULT_USER_AGENT: &str = concat!("recipe-search/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a [`SearchClient`]
#[derive(Debug, Default)]
pub struct SearchClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SearchClientBuilder {
    /// Start from loaded configuration
    ///
    /// # Example
    /// ```
    /// use recipe_search::{SearchClientBuilder, SearchConfig};
    ///
    /// let builder = SearchClientBuilder::from_config(&SearchConfig::default());
    /// ```
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::default()
            .base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout))
    }

    /// Set the base URL of the search service
    ///
    /// # Example
    /// ```
    /// use recipe_search::SearchClient;
    ///
    /// let builder = SearchClient::builder()
    ///     .base_url("http://localhost:5000");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `SearchError::Builder` if no base URL was given or it is not
    /// an http(s) URL, and `SearchError::Request` if the HTTP client cannot
    /// be created.
    pub fn build(self) -> Result<SearchClient, SearchError> {
        let base_url = self.base_url.ok_or_else(|| {
            SearchError::Builder("No base URL specified. Use .base_url()".to_string())
        })?;

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SearchError::Builder(format!(
                "Base URL must start with http:// or https://, got {:?}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            )
            .build()?;

        Ok(SearchClient::from_parts(client, &base_url))
    }
}
