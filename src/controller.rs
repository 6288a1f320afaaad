use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, error, info};
use tokio::sync::{Mutex, MutexGuard};

use crate::client::SearchService;
use crate::model::SearchQuery;
use crate::render::{
    layout, replace_content, RenderedBlock, ResultsView, TextInput, SEARCH_FAILED_MESSAGE,
};
use crate::SearchError;

/// What one activation did to the results view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was rendered; `matches` is 0 when the fallback notice was shown
    Rendered { matches: usize },
    /// A newer search was started before this one resolved; nothing was rendered
    Superseded,
}

/// Binds a search activation to one request and one render pass.
///
/// The input and results surfaces are injected at construction time. Every
/// call to [`activate`](Self::activate) takes a ticket; only the newest
/// ticket may render, so overlapping searches never leave an older response
/// on screen.
pub struct SearchController<S, I, V> {
    service: S,
    input: I,
    view: Mutex<V>,
    latest: AtomicU64,
}

impl<S, I, V> SearchController<S, I, V>
where
    S: SearchService,
    I: TextInput,
    V: ResultsView,
{
    pub fn new(service: S, input: I, view: V) -> Self {
        Self {
            service,
            input,
            view: Mutex::new(view),
            latest: AtomicU64::new(0),
        }
    }

    /// Lock the results view, e.g. to read what was rendered
    pub async fn view(&self) -> MutexGuard<'_, V> {
        self.view.lock().await
    }

    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    /// Run one search with the current input and render its response.
    ///
    /// On failure the results area shows a single error notice and the error
    /// is returned to the caller.
    pub async fn activate(&self) -> Result<Outcome, SearchError> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let query = SearchQuery::new(self.input.value());
        info!("Searching recipes for {:?}", query.ingredients);

        let response = self.service.search(&query).await;

        let mut view = self.view.lock().await;
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!("Discarding response for search #{}, a newer search is pending", ticket);
            return Ok(Outcome::Superseded);
        }

        match response {
            Ok(result) => {
                let matches = result.len();
                replace_content(&mut *view, layout(&result))?;
                debug!("Rendered {} match(es) for search #{}", matches, ticket);
                Ok(Outcome::Rendered { matches })
            }
            Err(e) => {
                error!("Search #{} failed: {}", ticket, e);
                let notice = vec![RenderedBlock::notice(SEARCH_FAILED_MESSAGE)];
                if let Err(write_err) = replace_content(&mut *view, notice) {
                    error!("Failed to show error notice: {}", write_err);
                }
                Err(e)
            }
        }
    }
}
