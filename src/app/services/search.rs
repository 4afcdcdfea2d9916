//! Search engine
//!
//! Case-insensitive substring search over catalog titles, with an
//! approximate-match fallback when no title contains the query. The
//! fallback ranks titles by a similarity score in [0, 1] produced by a
//! pluggable [`SimilarityScorer`].

use crate::app::models::SearchOutcome;
use crate::app::services::catalog::Catalog;
use crate::constants::{SIMILARITY_CUTOFF, SUGGESTION_LIMIT};
use tracing::debug;

/// Capability for scoring the similarity of two strings
///
/// Scores must lie in [0, 1], with 1.0 meaning identical. Any
/// longest-common-subsequence or block-ratio style algorithm satisfies
/// the contract; the 0.4 suggestion cutoff is applied by the caller.
pub trait SimilarityScorer {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Sequence-ratio similarity scorer
///
/// Computes 2·M / (|a| + |b|) where M is the total length of matching
/// blocks found by recursively extracting the longest common substring,
/// measured in characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceRatioScorer;

impl SimilarityScorer for SequenceRatioScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }
        let matched = matching_total(&a, &b);
        2.0 * matched as f64 / total as f64
    }
}

/// Total length of matching blocks between two character slices
///
/// Finds the longest common substring, then recurses into the unmatched
/// regions on either side of it.
fn matching_total(a: &[char], b: &[char]) -> usize {
    let (ai, bi, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_total(&a[..ai], &b[..bi])
        + matching_total(&a[ai + len..], &b[bi + len..])
}

/// Locate the longest common substring of `a` and `b`
///
/// Returns (start in a, start in b, length); earliest occurrence in `a`
/// wins ties. Length 0 means no common character.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    if a.is_empty() || b.is_empty() {
        return best;
    }

    // lengths[j] = length of the common suffix ending at a[i], b[j]
    let mut lengths = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        // Sweep right-to-left so lengths[j] still holds the previous row
        for j in (0..b.len()).rev() {
            if b[j] == ca {
                lengths[j + 1] = lengths[j] + 1;
                if lengths[j + 1] > best.2 {
                    best = (i + 1 - lengths[j + 1], j + 1 - lengths[j + 1], lengths[j + 1]);
                }
            } else {
                lengths[j + 1] = 0;
            }
        }
    }
    best
}

/// Search the catalog for a query string
///
/// The primary pass collects every title whose lowercased form contains
/// the lowercased query, in catalog order. With zero hits, the raw query
/// is scored against every title; titles scoring at least the cutoff are
/// returned as suggestions (best first, ties in catalog order, capped at
/// the suggestion limit). If nothing clears the cutoff the outcome is
/// `NoMatch`.
pub fn search(catalog: &Catalog, query: &str, scorer: &dyn SimilarityScorer) -> SearchOutcome {
    let needle = query.to_lowercase();
    let hits: Vec<_> = catalog
        .entries()
        .iter()
        .filter(|e| e.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if !hits.is_empty() {
        debug!(query, hits = hits.len(), "substring search matched");
        return SearchOutcome::ExactHits(hits);
    }

    // Fallback: approximate matching against the raw query
    let mut scored: Vec<(String, f64)> = catalog
        .entries()
        .iter()
        .map(|e| (e.title.clone(), scorer.score(query, &e.title)))
        .filter(|(_, score)| *score >= SIMILARITY_CUTOFF)
        .collect();

    // Stable sort keeps catalog order for equal scores
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("scores are never NaN"));
    scored.truncate(SUGGESTION_LIMIT);

    if scored.is_empty() {
        debug!(query, "search found no similar titles");
        SearchOutcome::NoMatch
    } else {
        debug!(query, suggestions = scored.len(), "search fell back to suggestions");
        SearchOutcome::Suggestions(scored.into_iter().map(|(title, _)| title).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORER: SequenceRatioScorer = SequenceRatioScorer;

    #[test]
    fn test_scorer_identical_strings() {
        assert_eq!(SCORER.score("The Godfather", "The Godfather"), 1.0);
    }

    #[test]
    fn test_scorer_empty_strings() {
        assert_eq!(SCORER.score("", ""), 1.0);
        assert_eq!(SCORER.score("abc", ""), 0.0);
    }

    #[test]
    fn test_scorer_disjoint_strings() {
        assert_eq!(SCORER.score("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_scorer_known_ratio() {
        // "abcd" vs "bcde": blocks "bcd" match, 2*3/8 = 0.75
        assert!((SCORER.score("abcd", "bcde") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_scorer_single_deletion() {
        // "Gdfather" vs "Godfather": all 8 query chars match, 2*8/17
        let score = SCORER.score("Gdfather", "Godfather");
        assert!((score - 16.0 / 17.0).abs() < 1e-12);
    }

    #[test]
    fn test_longest_common_block_positions() {
        let a: Vec<char> = "xxabcyy".chars().collect();
        let b: Vec<char> = "zzabcz".chars().collect();
        assert_eq!(longest_common_block(&a, &b), (2, 2, 3));
    }

    #[test]
    fn test_substring_search_case_insensitive() {
        let catalog = Catalog::seeded();
        let outcome = search(&catalog, "shawshank", &SCORER);

        match outcome {
            SearchOutcome::ExactHits(hits) => {
                assert_eq!(hits.len(), 1);
                assert_eq!(hits[0].title, "The Shawshank Redemption");
            }
            other => panic!("expected exact hits, got {:?}", other),
        }
    }

    #[test]
    fn test_substring_search_multiple_hits_in_catalog_order() {
        let catalog = Catalog::seeded();
        let outcome = search(&catalog, "godfather", &SCORER);

        match outcome {
            SearchOutcome::ExactHits(hits) => {
                let titles: Vec<_> = hits.iter().map(|e| e.title.as_str()).collect();
                assert_eq!(titles, vec!["The Godfather", "The Godfather: Part II"]);
            }
            other => panic!("expected exact hits, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_suggests_similar_title() {
        let catalog = Catalog::seeded();
        let outcome = search(&catalog, "Gdfather", &SCORER);

        match outcome {
            SearchOutcome::Suggestions(titles) => {
                assert!(titles.contains(&"The Godfather".to_string()));
                assert!(titles.len() <= 5);
                // Best score first
                assert_eq!(titles[0], "The Godfather");
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_no_match_below_cutoff() {
        let catalog = Catalog::seeded();
        let outcome = search(&catalog, "qqqqqqqqqqqqqqqqqqqq", &SCORER);
        assert_eq!(outcome, SearchOutcome::NoMatch);
    }

    #[test]
    fn test_fallback_caps_suggestions() {
        let mut catalog = Catalog::new();
        for i in 0..8 {
            catalog.add(&format!("Moviemark {}", i), 5.0).unwrap();
        }

        // No substring hit, but every title is similar to the query
        let outcome = search(&catalog, "Moviemarq", &SCORER);
        match outcome {
            SearchOutcome::Suggestions(titles) => assert_eq!(titles.len(), 5),
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_tie_order_is_catalog_order() {
        let mut catalog = Catalog::new();
        catalog.add("Abba One", 5.0).unwrap();
        catalog.add("Abba Two", 6.0).unwrap();

        // Same score against both titles; catalog order must hold
        let outcome = search(&catalog, "Abba Xxx", &SCORER);
        match outcome {
            SearchOutcome::Suggestions(titles) => {
                assert_eq!(titles, vec!["Abba One", "Abba Two"]);
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_catalog_is_no_match() {
        let catalog = Catalog::new();
        assert_eq!(search(&catalog, "anything", &SCORER), SearchOutcome::NoMatch);
    }
}
