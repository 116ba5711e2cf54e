//! Search Strategy Module
//!
//! Exact whole-line membership tests over a `CorpusView`.
//!
//! ## Overview
//! Five interchangeable strategies answer the same question ("is this exact string a
//! line of the corpus?") with different cost profiles. They must agree on every
//! input; the choice only affects how long the answer takes.
//!
//! | Strategy      | Ordered view                   | Deduplicated view          |
//! |---------------|--------------------------------|----------------------------|
//! | `linear`      | O(n) scan                      | O(1) membership            |
//! | `binary`      | O(log n), O(n log n) if unsorted | O(n log n) sort + O(log n) |
//! | `breadth`     | O(n) FIFO drain                | O(n) FIFO drain            |
//! | `depth`       | O(n) LIFO drain                | O(n) LIFO drain            |
//! | `hash`        | O(n) set build + O(1)          | O(1) membership            |
//!
//! ## Submodules
//! - **`algorithms`**: The five predicates, one function each.
//! - **`strategy`**: The `SearchStrategy` enum, name parsing, and dispatch.

pub mod algorithms;
pub mod strategy;

#[cfg(test)]
mod tests;
