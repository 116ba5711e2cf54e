//! Cached Corpus Holder
//!
//! Owns the deduplicated corpus used when re-read-on-query is disabled. The first
//! query to arrive performs the load; queries racing it wait on the same
//! initialisation and then observe the finished set. Once populated the set is
//! never mutated, so reads take no lock.

use super::store::CorpusStore;

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;

#[derive(Debug, Default)]
pub struct CorpusCache {
    lines: OnceCell<Arc<HashSet<String>>>,
    builds: AtomicUsize,
}

impl CorpusCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns the cached set, loading it from `store` if this is the first call.
    ///
    /// At most one caller ever runs the load, regardless of how many arrive at once.
    pub async fn get_or_build(&self, store: &CorpusStore) -> Arc<HashSet<String>> {
        self.lines
            .get_or_init(|| async {
                let set = store.load_deduplicated().await;
                self.builds.fetch_add(1, Ordering::SeqCst);
                tracing::info!(
                    "Cached {} unique lines from {}",
                    set.len(),
                    store.path().display()
                );
                Arc::new(set)
            })
            .await
            .clone()
    }

    pub fn is_populated(&self) -> bool {
        self.lines.initialized()
    }

    /// Number of times the cache has been populated. Stays at 0 or 1.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}
