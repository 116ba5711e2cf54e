//! Strategy Selection
//!
//! Maps configured strategy names (e.g. "linear", "hash") onto the closed set of
//! implementations. Unrecognised names are an explicit error rather than a
//! lookup failure at query time.

use super::algorithms::*;
use crate::corpus::types::CorpusView;
use crate::error::LineSearchError;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchStrategy {
    #[default]
    Linear,
    Binary,
    BreadthFirst,
    DepthFirst,
    Hash,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 5] = [
        SearchStrategy::Linear,
        SearchStrategy::Binary,
        SearchStrategy::BreadthFirst,
        SearchStrategy::DepthFirst,
        SearchStrategy::Hash,
    ];

    /// Canonical configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Linear => "linear",
            SearchStrategy::Binary => "binary",
            SearchStrategy::BreadthFirst => "breadth",
            SearchStrategy::DepthFirst => "depth",
            SearchStrategy::Hash => "hash",
        }
    }

    /// Runs the strategy.
    ///
    /// A missing view or query is an expected boundary condition, not a bug: it is
    /// logged and answered with `false`.
    pub fn search(&self, view: Option<&CorpusView>, query: Option<&str>) -> bool {
        let Some(view) = view else {
            tracing::warn!("{} search called without corpus data", self);
            return false;
        };
        let Some(query) = query else {
            tracing::warn!("{} search called without a query string", self);
            return false;
        };

        match self {
            SearchStrategy::Linear => linear_search(view, query),
            SearchStrategy::Binary => binary_search(view, query),
            SearchStrategy::BreadthFirst => breadth_first_search(view, query),
            SearchStrategy::DepthFirst => depth_first_search(view, query),
            SearchStrategy::Hash => hash_search(view, query),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = LineSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(SearchStrategy::Linear),
            "binary" => Ok(SearchStrategy::Binary),
            "breadth" | "bfs" | "breadth-first" => Ok(SearchStrategy::BreadthFirst),
            "depth" | "dfs" | "depth-first" => Ok(SearchStrategy::DepthFirst),
            "hash" => Ok(SearchStrategy::Hash),
            _ => Err(LineSearchError::UnknownStrategy(s.to_string())),
        }
    }
}
