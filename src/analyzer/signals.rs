//! Lexical signal detection
//!
//! Fixed keyword and pattern tables for the three complexity signals. The
//! matching is deterministic, embedding-free, and case-insensitive over the
//! raw query text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Curated domain vocabulary, used alongside whatever terms the catalog
/// itself contributes.
pub const DOMAIN_TERMS: &[&str] = &[
    "claims",
    "claim",
    "provider",
    "providers",
    "member",
    "members",
    "procedure",
    "procedures",
    "fraud",
    "financial",
    "payment",
    "network",
    "billing",
    "enrollment",
];

// Timeframe: named periods, quarter tags, 4-digit years, month names.
// "may" is deliberately absent: it collides with the modal verb.
static TIMEFRAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)\b(
            quarter(ly)? | month(ly)? | year(ly)? | annual(ly)? | week(ly)? | daily |
            today | yesterday | ytd |
            q[1-4] |
            (19|20)\d{2} |
            january | february | march | april | june |
            july | august | september | october | november | december
        )\b",
    )
    .expect("timeframe pattern is valid")
});

// Analysis intent: report/analysis verbs and nouns.
static ANALYSIS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)\b(
            reports? | analysis | analyze | analytics | metrics |
            performance | reconciliation | list | show | summary |
            summarize | breakdown | trends? | dashboard
        )\b",
    )
    .expect("analysis pattern is valid")
});

/// Does the query name a time period?
pub fn has_timeframe(lower: &str) -> bool {
    TIMEFRAME_PATTERN.is_match(lower)
}

/// Does the query name an analysis or report type?
pub fn has_analysis_type(lower: &str) -> bool {
    ANALYSIS_PATTERN.is_match(lower)
}

/// Does the query mention domain vocabulary? `extra_terms` is the
/// lowercased vocabulary contributed by the domain catalog.
pub fn has_domain_term(lower: &str, extra_terms: &[String]) -> bool {
    DOMAIN_TERMS.iter().any(|term| lower.contains(term))
        || extra_terms.iter().any(|term| lower.contains(term.as_str()))
}
