//! Query complexity analysis
//!
//! A cheap lexical pre-check that scores how specific a query is and turns
//! the missing signals into improvement suggestions. Independent of the
//! semantic router: it reads only the raw text and the static catalog
//! vocabulary, never a routing result.

pub mod signals;

use serde::{Deserialize, Serialize};

use crate::catalog::DomainCatalog;

/// Suggestion emitted when the timeframe signal is missing.
pub const SUGGEST_TIMEFRAME: &str = "Add a time period (quarter, month, year, date range)";

/// Suggestion emitted when the domain signal is missing.
pub const SUGGEST_DOMAIN: &str =
    "Specify the healthcare domain (claims, providers, members, procedures)";

/// Suggestion emitted when the analysis-type signal is missing.
pub const SUGGEST_ANALYSIS_TYPE: &str = "Specify the type of analysis or report needed";

/// Complexity bands derived from the signal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    /// Three signals true → HIGH, two → MEDIUM, fewer → LOW.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 3 => ComplexityLevel::High,
            2 => ComplexityLevel::Medium,
            _ => ComplexityLevel::Low,
        }
    }
}

/// Lexical assessment of one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    /// Whitespace-delimited token count.
    pub word_count: usize,

    pub has_timeframe: bool,
    pub has_domain_term: bool,
    pub has_analysis_type: bool,

    /// Number of true signals, 0–3.
    pub complexity_score: u8,

    pub complexity_level: ComplexityLevel,
}

/// Assessment plus the fixed suggestions for whatever was missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecommendation {
    pub complexity: ComplexityAssessment,

    /// One entry per false signal, in the order timeframe, domain,
    /// analysis-type.
    pub suggestions: Vec<String>,
}

/// Scores query specificity from surface features.
///
/// Pure and side-effect free; an empty query is a valid input that scores
/// zero everywhere.
pub struct QueryAnalyzer {
    catalog_terms: Vec<String>,
}

impl QueryAnalyzer {
    /// Build an analyzer over the catalog's vocabulary.
    pub fn new(catalog: &DomainCatalog) -> Self {
        Self {
            catalog_terms: catalog.vocabulary_terms(),
        }
    }

    /// Assess one query.
    pub fn analyze(&self, query: &str) -> ComplexityAssessment {
        let lower = query.to_lowercase();

        let word_count = query.split_whitespace().count();
        let has_timeframe = signals::has_timeframe(&lower);
        let has_domain_term = signals::has_domain_term(&lower, &self.catalog_terms);
        let has_analysis_type = signals::has_analysis_type(&lower);

        let complexity_score =
            u8::from(has_timeframe) + u8::from(has_domain_term) + u8::from(has_analysis_type);

        ComplexityAssessment {
            word_count,
            has_timeframe,
            has_domain_term,
            has_analysis_type,
            complexity_score,
            complexity_level: ComplexityLevel::from_score(complexity_score),
        }
    }

    /// Assess one query and suggest how to sharpen it.
    pub fn recommend(&self, query: &str) -> QueryRecommendation {
        let complexity = self.analyze(query);

        let mut suggestions = Vec::new();
        if !complexity.has_timeframe {
            suggestions.push(SUGGEST_TIMEFRAME.to_string());
        }
        if !complexity.has_domain_term {
            suggestions.push(SUGGEST_DOMAIN.to_string());
        }
        if !complexity.has_analysis_type {
            suggestions.push(SUGGEST_ANALYSIS_TYPE.to_string());
        }

        QueryRecommendation {
            complexity,
            suggestions,
        }
    }
}
