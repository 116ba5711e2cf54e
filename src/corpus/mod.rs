//! Line Corpus Module
//!
//! Loads the line-oriented text corpus the server answers queries against.
//!
//! ## Views
//! - **Ordered**: every line in file order, duplicates kept. Rebuilt from storage on
//!   every query when the server runs with re-read-on-query enabled.
//! - **Deduplicated**: a set of trimmed lines, built once and shared read-only by
//!   every connection when re-read-on-query is disabled.
//!
//! ## Submodules
//! - **`store`**: File access. Never fails; unreadable corpora come back empty.
//! - **`cache`**: The guarded, build-once holder for the deduplicated view.
//! - **`types`**: The `CorpusView` tagged union consumed by the search strategies.

pub mod cache;
pub mod store;
pub mod types;
