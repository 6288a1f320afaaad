//! Find recipes by the ingredients you have.
//!
//! A [`SearchController`] reads the ingredient text from an input surface,
//! posts it to a recipe search service and renders the returned matches into
//! a results view.

pub mod builder;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;

pub use builder::SearchClientBuilder;
pub use client::{SearchClient, SearchService, SEARCH_PATH};
pub use config::SearchConfig;
pub use controller::{Outcome, SearchController};
pub use error::SearchError;
pub use model::{RecipeMatch, SearchQuery, SearchResult, Similarity};
pub use render::{
    HtmlResultsView, InputField, RenderedBlock, ResultsView, TerminalResultsView, TextInput,
};

/// Search a service for recipes matching `ingredients`, without rendering.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_search::SearchError> {
/// let result = recipe_search::search("http://localhost:5000", "egg, flour").await?;
/// for recipe in result.iter() {
///     println!("{} ({})", recipe.recipe_name, recipe.similarity);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(base_url: &str, ingredients: &str) -> Result<SearchResult, SearchError> {
    let client = SearchClient::new(base_url)?;
    client.search(&SearchQuery::new(ingredients)).await
}
