use std::collections::HashSet;
use std::sync::Arc;

/// The collection a search strategy runs over.
///
/// `Ordered` keeps the lines exactly as stored (untrimmed, duplicates included),
/// while `Deduplicated` holds already-trimmed lines and is shared between
/// connections, hence the `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub enum CorpusView {
    Ordered(Vec<String>),
    Deduplicated(Arc<HashSet<String>>),
}

impl CorpusView {
    pub fn len(&self) -> usize {
        match self {
            CorpusView::Ordered(lines) => lines.len(),
            CorpusView::Deduplicated(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short label used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            CorpusView::Ordered(_) => "ordered",
            CorpusView::Deduplicated(_) => "deduplicated",
        }
    }
}
