//! Corpus File Access
//!
//! Reads the corpus from disk. Every failure mode (missing file, permissions,
//! invalid UTF-8, I/O error mid-read) degrades to an empty corpus so that a bad
//! path turns into "not found" answers rather than a crashed connection.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every line of the corpus in file order.
    ///
    /// Line terminators (`\n`, `\r\n`) are removed; no other whitespace is touched
    /// and duplicates are preserved. Returns an empty vector on any failure.
    pub async fn load(&self) -> Vec<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => {
                let lines: Vec<String> = text.lines().map(str::to_string).collect();
                tracing::trace!("Loaded {} lines from {}", lines.len(), self.path.display());
                lines
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read corpus {}, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Reads the corpus and collapses it into a set of trimmed lines.
    pub async fn load_deduplicated(&self) -> HashSet<String> {
        self.load()
            .await
            .into_iter()
            .map(|line| line.trim().to_string())
            .collect()
    }
}
