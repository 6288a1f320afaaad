use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::model::{SearchQuery, SearchResult};
use crate::SearchError;

/// Path of the search endpoint, relative to the service base URL
pub const SEARCH_PATH: &str = "/search";

/// Anything that can answer an ingredient query with recipe matches
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError>;
}

/// HTTP client for the remote recipe search service
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub(crate) fn from_parts(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client with default settings for the given service URL
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> crate::builder::SearchClientBuilder {
        crate::builder::SearchClientBuilder::default()
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

#[async_trait]
impl SearchService for SearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        debug!("POST {} ingredients={:?}", self.endpoint(), query.ingredients);

        let response = self.client.post(self.endpoint()).json(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }
        let body = response.text().await?;

        let result = SearchResult::from_json(&body)?;
        debug!("received {} match(es)", result.len());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_search() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Exact(r#"{"ingredients":"egg, flour"}"#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"recipe_name":"Pancakes","ingredients":"egg, flour, milk","similarity":0.92}]"#,
            )
            .create_async()
            .await;

        let client = SearchClient::new(&server.url()).unwrap();
        let result = client.search(&SearchQuery::new("egg, flour")).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.0[0].recipe_name, "Pancakes");
        assert_eq!(result.0[0].similarity.to_string(), "0.92");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = SearchClient::new(&server.url()).unwrap();
        let result = client.search(&SearchQuery::new("egg")).await;

        match result {
            Err(SearchError::Status { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_error_status_without_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/search")
            .with_status(404)
            .create_async()
            .await;

        let client = SearchClient::new(&server.url()).unwrap();
        let result = client.search(&SearchQuery::new("egg")).await;

        match result {
            Err(SearchError::Status { status, body }) => {
                assert_eq!(status.as_u16(), 404);
                assert!(body.is_empty());
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = SearchClient::new(&server.url()).unwrap();
        let result = client.search(&SearchQuery::new("egg")).await;
        assert!(matches!(result, Err(SearchError::Parse(_))));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = SearchClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:5000/search");
    }
}
