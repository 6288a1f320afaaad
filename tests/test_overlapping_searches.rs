use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use recipe_search::{
    HtmlResultsView, Outcome, RecipeMatch, RenderedBlock, SearchController, SearchError,
    SearchQuery, SearchResult, SearchService, Similarity,
};

/// Answers the n-th call after `delays[n]`, with a recipe named "call n"
struct ScriptedService {
    delays: Vec<Duration>,
    calls: AtomicUsize,
}

impl ScriptedService {
    fn new(delays_ms: &[u64]) -> Self {
        Self {
            delays: delays_ms.iter().copied().map(Duration::from_millis).collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SearchService for ScriptedService {
    async fn search(&self, _query: &SearchQuery) -> Result<SearchResult, SearchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delays[call]).await;
        Ok(SearchResult(vec![RecipeMatch {
            recipe_name: format!("call {}", call),
            ingredients: "egg".to_string(),
            similarity: Similarity::from(0.5),
        }]))
    }
}

fn rendered_titles(view: &HtmlResultsView) -> Vec<String> {
    view.blocks()
        .iter()
        .filter_map(|block| match block {
            RenderedBlock::Recipe { title, .. } => Some(title.clone()),
            RenderedBlock::Notice(_) => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_older_response_resolving_last_is_discarded() {
    let controller =
        SearchController::new(ScriptedService::new(&[100, 10]), "egg", HtmlResultsView::new());

    let (first, second) = tokio::join!(controller.activate(), controller.activate());

    assert_eq!(first.unwrap(), Outcome::Superseded);
    assert_eq!(second.unwrap(), Outcome::Rendered { matches: 1 });
    assert_eq!(rendered_titles(&*controller.view().await), vec!["call 1"]);
}

#[tokio::test(start_paused = true)]
async fn test_older_response_resolving_first_is_discarded() {
    let controller =
        SearchController::new(ScriptedService::new(&[10, 100]), "egg", HtmlResultsView::new());

    let (first, second) = tokio::join!(controller.activate(), controller.activate());

    assert_eq!(first.unwrap(), Outcome::Superseded);
    assert_eq!(second.unwrap(), Outcome::Rendered { matches: 1 });
    assert_eq!(rendered_titles(&*controller.view().await), vec!["call 1"]);
}

#[tokio::test(start_paused = true)]
async fn test_sequential_searches_all_render() {
    let controller =
        SearchController::new(ScriptedService::new(&[5, 5, 5]), "egg", HtmlResultsView::new());

    for expected in ["call 0", "call 1", "call 2"] {
        let outcome = controller.activate().await.unwrap();
        assert_eq!(outcome, Outcome::Rendered { matches: 1 });
        assert_eq!(rendered_titles(&*controller.view().await), vec![expected]);
    }
}
