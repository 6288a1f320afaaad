//! Rendering surfaces for search results.
//!
//! The controller never looks surfaces up by identifier; it is handed a
//! [`TextInput`] to read the query from and a [`ResultsView`] to render into.
//! Views receive [`RenderedBlock`]s, already laid out, and decide how to
//! present them.

mod html;
mod terminal;

pub use html::HtmlResultsView;
pub use terminal::TerminalResultsView;

use std::io;
use std::sync::{Arc, Mutex};

use crate::model::{RecipeMatch, SearchResult};

/// Shown in place of results when the service found nothing
pub const NO_MATCHES_MESSAGE: &str = "No matching recipes found.";

/// Shown in place of results when the search could not be completed
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Element id of the results container
pub const RESULTS_ID: &str = "results";

/// One visual block in the results area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    /// A recipe match: heading plus two labelled lines
    Recipe {
        title: String,
        ingredients: String,
        similarity: String,
    },
    /// A single paragraph of text
    Notice(String),
}

impl RenderedBlock {
    pub fn notice(text: impl Into<String>) -> Self {
        RenderedBlock::Notice(text.into())
    }
}

impl From<&RecipeMatch> for RenderedBlock {
    fn from(recipe: &RecipeMatch) -> Self {
        RenderedBlock::Recipe {
            title: recipe.recipe_name.clone(),
            ingredients: format!("Ingredients: {}", recipe.ingredients),
            similarity: format!("Similarity: {}", recipe.similarity),
        }
    }
}

/// Lay out a search result as blocks, in response order.
///
/// An empty result becomes the single "no matches" notice.
pub fn layout(result: &SearchResult) -> Vec<RenderedBlock> {
    if result.is_empty() {
        return vec![RenderedBlock::notice(NO_MATCHES_MESSAGE)];
    }
    result.iter().map(RenderedBlock::from).collect()
}

/// Source of the ingredient text typed by the user
pub trait TextInput: Send + Sync {
    fn value(&self) -> String;
}

impl TextInput for String {
    fn value(&self) -> String {
        self.clone()
    }
}

impl TextInput for &'static str {
    fn value(&self) -> String {
        (*self).to_string()
    }
}

/// Text field whose content can be changed between searches.
///
/// Clones share the same content, so one handle can be given to the
/// controller while another is used to type into it.
#[derive(Debug, Clone, Default)]
pub struct InputField(Arc<Mutex<String>>);

impl InputField {
    pub fn new(text: impl Into<String>) -> Self {
        InputField(Arc::new(Mutex::new(text.into())))
    }

    pub fn set(&self, text: impl Into<String>) {
        let mut content = self.0.lock().unwrap_or_else(|e| e.into_inner());
        *content = text.into();
    }
}

impl TextInput for InputField {
    fn value(&self) -> String {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// The output container results are rendered into
pub trait ResultsView: Send {
    /// Remove everything previously rendered
    fn clear(&mut self) -> io::Result<()>;

    fn append(&mut self, block: RenderedBlock) -> io::Result<()>;

    /// Called once after the blocks of a render pass have been appended
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Replace the content of `view` with `blocks` in a single pass
pub fn replace_content<V>(view: &mut V, blocks: Vec<RenderedBlock>) -> io::Result<()>
where
    V: ResultsView + ?Sized,
{
    view.clear()?;
    for block in blocks {
        view.append(block)?;
    }
    view.present()
}
