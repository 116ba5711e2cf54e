//! Search Module Tests
//!
//! Validates the five membership strategies and their selection by name.
//!
//! ## Test Scopes
//! - **Agreement**: Every strategy returns the same verdict for the same input.
//! - **Boundaries**: Empty corpora, absent inputs, first/last lines for bisection.
//! - **Selection**: Name parsing, aliases, and rejection of unknown names.

#[cfg(test)]
mod tests {
    use crate::corpus::types::CorpusView;
    use crate::error::LineSearchError;
    use crate::search::algorithms::*;
    use crate::search::strategy::SearchStrategy;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;

    fn ordered(lines: &[&str]) -> CorpusView {
        CorpusView::Ordered(lines.iter().map(|l| l.to_string()).collect())
    }

    fn set<S: AsRef<str>>(lines: &[S]) -> CorpusView {
        CorpusView::Deduplicated(Arc::new(
            lines.iter().map(|l| l.as_ref().to_string()).collect(),
        ))
    }

    /// Lines shaped like the benchmark corpora: `n;n;n;...;`
    fn random_line(rng: &mut StdRng) -> String {
        let fields = rng.gen_range(3..8);
        (0..fields)
            .map(|_| format!("{};", rng.gen_range(0..25)))
            .collect()
    }

    // ============================================================
    // SCENARIO TESTS
    // ============================================================

    #[test]
    fn test_every_strategy_finds_existing_line() {
        let view = ordered(&["7;3;9;", "2;5;1;"]);

        for strategy in SearchStrategy::ALL {
            assert!(
                strategy.search(Some(&view), Some("2;5;1;")),
                "{} should find an existing line",
                strategy
            );
        }
    }

    #[test]
    fn test_every_strategy_misses_absent_line() {
        let view = ordered(&["a", "b", "c"]);
        let cached = set(&["a", "b", "c"]);

        for strategy in SearchStrategy::ALL {
            assert!(!strategy.search(Some(&view), Some("z")), "{}", strategy);
            assert!(!strategy.search(Some(&cached), Some("z")), "{}", strategy);
        }
    }

    #[test]
    fn test_ordered_lines_are_trimmed_before_comparison() {
        let view = ordered(&["  padded\t", "other"]);

        for strategy in SearchStrategy::ALL {
            assert!(strategy.search(Some(&view), Some("padded")), "{}", strategy);
        }
    }

    #[test]
    fn test_partial_match_is_not_a_match() {
        let view = ordered(&["13;0;23;11;0;16;5;"]);

        for strategy in SearchStrategy::ALL {
            assert!(!strategy.search(Some(&view), Some("13;0;23;")), "{}", strategy);
            assert!(
                !strategy.search(Some(&view), Some("13;0;23;11;0;16;5;0;")),
                "{}",
                strategy
            );
        }
    }

    // ============================================================
    // BOUNDARY TESTS
    // ============================================================

    #[test]
    fn test_empty_corpus_never_matches() {
        let empty_ordered = CorpusView::Ordered(vec![]);
        let empty_set = set::<&str>(&[]);

        for strategy in SearchStrategy::ALL {
            assert!(!strategy.search(Some(&empty_ordered), Some("x")), "{}", strategy);
            assert!(!strategy.search(Some(&empty_set), Some("x")), "{}", strategy);
        }
    }

    #[test]
    fn test_absent_inputs_return_false() {
        let view = ordered(&["a"]);

        for strategy in SearchStrategy::ALL {
            assert!(!strategy.search(None, Some("a")), "{}", strategy);
            assert!(!strategy.search(Some(&view), None), "{}", strategy);
            assert!(!strategy.search(None, None), "{}", strategy);
        }
    }

    #[test]
    fn test_binary_search_finds_first_and_last_lines() {
        let view = ordered(&["a", "b", "c", "d", "e", "f", "g"]);

        assert!(binary_search(&view, "a"));
        assert!(binary_search(&view, "g"));
        assert!(binary_search(&view, "d"));
        assert!(!binary_search(&view, "0"));
        assert!(!binary_search(&view, "h"));
    }

    #[test]
    fn test_binary_search_single_and_two_element_views() {
        assert!(binary_search(&ordered(&["only"]), "only"));
        assert!(!binary_search(&ordered(&["only"]), "other"));
        assert!(binary_search(&ordered(&["x", "y"]), "x"));
        assert!(binary_search(&ordered(&["x", "y"]), "y"));
    }

    #[test]
    fn test_binary_search_tolerates_unsorted_input() {
        let view = ordered(&["zeta", "alpha", "mu", "beta"]);

        assert!(binary_search(&view, "zeta"));
        assert!(binary_search(&view, "alpha"));
        assert!(!binary_search(&view, "omega"));
    }

    #[test]
    fn test_binary_search_over_set() {
        let view = set(&["q", "w", "e", "r", "t", "y"]);

        for line in ["q", "w", "e", "r", "t", "y"] {
            assert!(binary_search(&view, line), "missed {}", line);
        }
        assert!(!binary_search(&view, "u"));
    }

    #[test]
    fn test_depth_first_does_not_consume_view() {
        let view = ordered(&["a", "b"]);

        assert!(!depth_first_search(&view, "missing"));

        // A miss drains the private stack only; the view is reusable.
        assert_eq!(view.len(), 2);
        assert!(depth_first_search(&view, "a"));
    }

    #[test]
    fn test_duplicates_in_ordered_view() {
        let view = ordered(&["dup", "dup", "dup"]);

        for strategy in SearchStrategy::ALL {
            assert!(strategy.search(Some(&view), Some("dup")), "{}", strategy);
        }
    }

    #[test]
    fn test_empty_query_matches_blank_line_only() {
        let with_blank = ordered(&["a", "   ", "b"]);
        let without_blank = ordered(&["a", "b"]);

        for strategy in SearchStrategy::ALL {
            assert!(strategy.search(Some(&with_blank), Some("")), "{}", strategy);
            assert!(!strategy.search(Some(&without_blank), Some("")), "{}", strategy);
        }
    }

    // ============================================================
    // DIFFERENTIAL TESTS
    // ============================================================

    #[test]
    fn test_strategies_agree_on_random_corpora() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for round in 0..40 {
            let size = rng.gen_range(0..200);
            let lines: Vec<String> = (0..size).map(|_| random_line(&mut rng)).collect();
            let ordered_view = CorpusView::Ordered(lines.clone());
            let cached_view = set(&lines);

            let mut queries: Vec<String> = (0..10).map(|_| random_line(&mut rng)).collect();
            if let Some(line) = lines.first() {
                queries.push(line.clone());
            }
            if let Some(line) = lines.last() {
                queries.push(line.clone());
            }

            for query in &queries {
                let expected = lines.iter().any(|l| l.trim() == query);
                for strategy in SearchStrategy::ALL {
                    assert_eq!(
                        strategy.search(Some(&ordered_view), Some(query.as_str())),
                        expected,
                        "round {}: {} disagreed on ordered view for {:?}",
                        round,
                        strategy,
                        query
                    );
                    assert_eq!(
                        strategy.search(Some(&cached_view), Some(query.as_str())),
                        expected,
                        "round {}: {} disagreed on cached view for {:?}",
                        round,
                        strategy,
                        query
                    );
                }
            }
        }
    }

    #[test]
    fn test_strategies_agree_on_sorted_corpus() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut lines: Vec<String> = (0..500).map(|_| random_line(&mut rng)).collect();
        lines.sort();
        let view = CorpusView::Ordered(lines.clone());

        for line in &lines {
            for strategy in SearchStrategy::ALL {
                assert!(strategy.search(Some(&view), Some(line.as_str())), "{}", strategy);
            }
        }
    }

    // ============================================================
    // SELECTION TESTS
    // ============================================================

    #[test]
    fn test_parse_canonical_names() {
        for strategy in SearchStrategy::ALL {
            let parsed: SearchStrategy = strategy.name().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!("BFS".parse::<SearchStrategy>().unwrap(), SearchStrategy::BreadthFirst);
        assert_eq!(
            "depth-first".parse::<SearchStrategy>().unwrap(),
            SearchStrategy::DepthFirst
        );
        assert_eq!(" Hash ".parse::<SearchStrategy>().unwrap(), SearchStrategy::Hash);
    }

    #[test]
    fn test_parse_unknown_name_is_error() {
        let result = "exponential".parse::<SearchStrategy>();

        match result {
            Err(LineSearchError::UnknownStrategy(name)) => assert_eq!(name, "exponential"),
            other => panic!("Expected UnknownStrategy, got {:?}", other),
        }
    }

    #[test]
    fn test_default_strategy_is_linear() {
        assert_eq!(SearchStrategy::default(), SearchStrategy::Linear);
        assert_eq!(SearchStrategy::default().to_string(), "linear");
    }
}
