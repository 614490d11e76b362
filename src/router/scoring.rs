//! Confidence scoring policy
//!
//! Reduces a ranked match list to one scalar in [0,1] and gates it against
//! the routing threshold. All constants are extracted here so a deployment
//! can calibrate them at router construction.

use hc_semantic_index::MatchResult;

// ---------------------------------------------------------------------------
// Policy Constants
// ---------------------------------------------------------------------------

/// Decision threshold — rank-1 similarity must reach this to route.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Nearest neighbors requested per query.
pub const DEFAULT_TOP_K: usize = 5;

/// Maximum accepted query length in characters.
pub const MAX_QUERY_LENGTH: usize = 1000;

/// The gate is binary: route or clarify. No medium tier.
pub const ROUTING_DECISION_LEVELS: u8 = 2;

// ---------------------------------------------------------------------------
// Scoring Functions
// ---------------------------------------------------------------------------

/// Clamp a raw similarity into [0,1].
///
/// External similarity functions can drift slightly outside the range from
/// floating-point or metric quirks; anything below 0 becomes 0, anything
/// above 1 becomes 1.
pub fn clamp_similarity(score: f32) -> f32 {
    score.clamp(0.0, 1.0)
}

/// Confidence that the single best domain can be identified.
///
/// This is the rank-1 similarity, not an average over top-k: averaging
/// would reward a domain with many weak matches over a domain with one
/// strong, precise match. Empty match list means zero confidence.
pub fn confidence_from_matches(matches: &[MatchResult]) -> f32 {
    matches
        .first()
        .map(|m| clamp_similarity(m.similarity_score))
        .unwrap_or(0.0)
}

/// Round a confidence for display (3 decimals).
pub fn round_confidence(confidence: f32) -> f32 {
    (confidence * 1000.0).round() / 1000.0
}

/// The threshold gate. Inclusive: a confidence exactly at the threshold
/// routes, it does not clarify.
pub fn meets_threshold(confidence: f32, threshold: f32) -> bool {
    confidence >= threshold
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_match(domain: &str, score: f32) -> MatchResult {
        MatchResult {
            source_domain: domain.to_string(),
            similarity_score: score,
            matched_text: format!("capability of {domain}"),
        }
    }

    #[test]
    fn test_empty_matches_zero_confidence() {
        assert_eq!(confidence_from_matches(&[]), 0.0);
    }

    #[test]
    fn test_confidence_is_rank_one_score() {
        let matches = vec![
            make_match("claims", 0.646),
            make_match("providers", 0.9), // rank order is the matcher's contract
        ];
        assert!((confidence_from_matches(&matches) - 0.646).abs() < 1e-6);
    }

    #[test]
    fn test_lower_ranked_scores_do_not_affect_confidence() {
        let base = vec![make_match("claims", 0.7), make_match("providers", 0.2)];
        let raised = vec![make_match("claims", 0.7), make_match("providers", 0.69)];
        assert_eq!(
            confidence_from_matches(&base),
            confidence_from_matches(&raised)
        );
    }

    #[test]
    fn test_clamp_out_of_range() {
        assert_eq!(clamp_similarity(-0.2), 0.0);
        assert_eq!(clamp_similarity(1.07), 1.0);
        assert_eq!(clamp_similarity(0.5), 0.5);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(meets_threshold(0.5, 0.5));
        assert!(!meets_threshold(0.49999, 0.5));
    }

    #[test]
    fn test_round_confidence() {
        assert!((round_confidence(0.646_423) - 0.646).abs() < 1e-6);
        assert!((round_confidence(0.999_6) - 1.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_confidence_always_in_unit_interval(score in -10.0f32..10.0) {
            let c = confidence_from_matches(&[make_match("claims", score)]);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn prop_confidence_monotonic_in_rank_one_score(
            a in 0.0f32..=1.0,
            b in 0.0f32..=1.0,
        ) {
            let low = a.min(b);
            let high = a.max(b);
            let c_low = confidence_from_matches(&[make_match("claims", low)]);
            let c_high = confidence_from_matches(&[make_match("claims", high)]);
            prop_assert!(c_high >= c_low);
        }
    }
}
