use crate::corpus::cache::CorpusCache;
use crate::corpus::store::CorpusStore;
use crate::corpus::types::CorpusView;
use crate::search::strategy::SearchStrategy;

use std::sync::Arc;

/// Answers queries against one corpus under one re-read policy.
///
/// Cheap to clone: the store is a path and the cache is shared through an `Arc`,
/// so every connection task can hold its own handle.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    store: CorpusStore,
    reread_on_query: bool,
    cache: Arc<CorpusCache>,
}

impl QueryResolver {
    pub fn new(store: CorpusStore, reread_on_query: bool) -> Self {
        Self::with_cache(store, reread_on_query, CorpusCache::new())
    }

    /// Builds a resolver around an existing cache holder, e.g. one shared with
    /// another resolver or inspected by a test.
    pub fn with_cache(store: CorpusStore, reread_on_query: bool, cache: Arc<CorpusCache>) -> Self {
        Self {
            store,
            reread_on_query,
            cache,
        }
    }

    pub fn reread_on_query(&self) -> bool {
        self.reread_on_query
    }

    pub fn cache(&self) -> &Arc<CorpusCache> {
        &self.cache
    }

    /// Resolves `query` with the strategy named `strategy`.
    ///
    /// Unknown strategy names fail closed: the error is logged and the answer is
    /// "not found".
    pub async fn resolve(&self, query: &str, strategy: &str) -> bool {
        match strategy.parse::<SearchStrategy>() {
            Ok(strategy) => self.resolve_with(query, strategy).await,
            Err(e) => {
                tracing::error!("{}, answering not found", e);
                false
            }
        }
    }

    /// Resolves `query` with an already-selected strategy.
    pub async fn resolve_with(&self, query: &str, strategy: SearchStrategy) -> bool {
        let view = self.view().await;
        tracing::debug!(
            "Searching {} view of {} lines with {}",
            view.kind(),
            view.len(),
            strategy
        );

        let query = query.to_string();
        // Scans over large corpora are CPU-bound; keep them off the async workers.
        let verdict = tokio::task::spawn_blocking(move || {
            strategy.search(Some(&view), Some(query.as_str()))
        })
        .await;

        match verdict {
            Ok(found) => found,
            Err(e) => {
                tracing::error!("{} search task failed, answering not found: {}", strategy, e);
                false
            }
        }
    }

    /// The corpus view this query should see.
    ///
    /// Re-read mode never touches the cache; cached mode never touches storage
    /// after the first build.
    async fn view(&self) -> CorpusView {
        if self.reread_on_query {
            CorpusView::Ordered(self.store.load().await)
        } else {
            CorpusView::Deduplicated(self.cache.get_or_build(&self.store).await)
        }
    }
}
