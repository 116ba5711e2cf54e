//! Membership Predicates
//!
//! Each function answers whether `query` equals some line of `view`. Lines of an
//! `Ordered` view are compared after trimming surrounding whitespace; lines of a
//! `Deduplicated` view were trimmed when the set was built.
//!
//! None of these consume or mutate the view. The queue- and stack-based
//! strategies drain a private collection of borrowed lines instead.

use crate::corpus::types::CorpusView;

use std::collections::{HashSet, VecDeque};

/// Sequential scan in storage order.
pub fn linear_search(view: &CorpusView, query: &str) -> bool {
    match view {
        CorpusView::Ordered(lines) => lines.iter().any(|line| line.trim() == query),
        CorpusView::Deduplicated(set) => set.contains(query),
    }
}

/// Halving search over lexicographically sorted lines.
///
/// Ordered views are expected to be sorted already; an unsorted one is sorted
/// into a private buffer first so the verdict never depends on file order.
/// Deduplicated views have no order and are always sorted first.
pub fn binary_search(view: &CorpusView, query: &str) -> bool {
    let mut keys: Vec<&str> = match view {
        CorpusView::Ordered(lines) => lines.iter().map(|line| line.trim()).collect(),
        CorpusView::Deduplicated(set) => set.iter().map(String::as_str).collect(),
    };

    let sorted = keys.windows(2).all(|pair| pair[0] <= pair[1]);
    if !sorted {
        tracing::trace!("Binary search input unsorted, sorting {} lines", keys.len());
        keys.sort_unstable();
    }

    bisect(&keys, query)
}

/// `keys` must be sorted.
fn bisect(keys: &[&str], query: &str) -> bool {
    let mut left = 0usize;
    let mut right = keys.len();

    // Half-open [left, right) so an empty slice and the last index need no special case.
    while left < right {
        let mid = left + (right - left) / 2;
        match keys[mid].cmp(query) {
            std::cmp::Ordering::Equal => return true,
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => right = mid,
        }
    }

    false
}

/// Drains the lines as a FIFO queue, front first.
pub fn breadth_first_search(view: &CorpusView, query: &str) -> bool {
    let mut queue: VecDeque<&str> = match view {
        CorpusView::Ordered(lines) => lines.iter().map(String::as_str).collect(),
        CorpusView::Deduplicated(set) => set.iter().map(String::as_str).collect(),
    };

    while let Some(line) = queue.pop_front() {
        if line.trim() == query {
            return true;
        }
    }

    false
}

/// Drains the lines as a LIFO stack, back first.
pub fn depth_first_search(view: &CorpusView, query: &str) -> bool {
    let mut stack: Vec<&str> = match view {
        CorpusView::Ordered(lines) => lines.iter().map(String::as_str).collect(),
        CorpusView::Deduplicated(set) => set.iter().map(String::as_str).collect(),
    };

    while let Some(line) = stack.pop() {
        if line.trim() == query {
            return true;
        }
    }

    false
}

/// Hash-set membership. Ordered views pay a one-off O(n) set build.
pub fn hash_search(view: &CorpusView, query: &str) -> bool {
    match view {
        CorpusView::Ordered(lines) => {
            let table: HashSet<&str> = lines.iter().map(|line| line.trim()).collect();
            table.contains(query)
        }
        CorpusView::Deduplicated(set) => set.contains(query),
    }
}
