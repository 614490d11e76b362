//! Query router — the confidence-gated decision core
//!
//! ```text
//! RECEIVED ──► SCORED ──┬──► ROUTED                   (c ≥ threshold)
//!                       └──► CLARIFICATION_REQUESTED  (c < threshold)
//! ```
//!
//! Each query is processed exactly once, synchronously from the caller's
//! perspective; the only suspension point is the vector matcher call. A
//! matcher failure is surfaced, never retried here.

pub mod response;
pub mod scoring;
pub mod stats;

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument, warn};

use hc_semantic_index::{MatchResult, VectorMatcher};

use crate::catalog::DomainCatalog;
use crate::error::{ConfigError, InputError, RouterError, UpstreamError};
use response::{
    ClarificationAnalysis, ClarificationDecision, ClarificationRequest,
    HighConfidenceAnalysis, HighConfidenceDecision, RoutingDecision, RoutingStatus,
};
use scoring::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_TOP_K, MAX_QUERY_LENGTH, ROUTING_DECISION_LEVELS,
};
use stats::{IndexStatistics, RoutingStatistics, RoutingStats, RoutingSystemInfo, StatsSnapshot};

/// Router construction parameters. Immutable per instance.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Inclusive routing threshold in [0,1].
    pub confidence_threshold: f32,

    /// Nearest neighbors requested per query.
    pub top_k: usize,

    /// Maximum accepted query length in characters.
    pub max_query_length: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            max_query_length: MAX_QUERY_LENGTH,
        }
    }
}

/// Routes healthcare queries to the domain index best supported by the
/// semantic evidence, or asks for clarification when no domain is.
///
/// Stateless per call apart from the shared read-only catalog and the
/// atomic statistics counters, so one instance serves concurrent queries
/// without locking.
pub struct QueryRouter {
    matcher: Arc<dyn VectorMatcher>,
    catalog: Arc<DomainCatalog>,
    config: RouterConfig,
    stats: RoutingStats,
}

impl QueryRouter {
    /// Construct with default configuration.
    pub fn new(
        matcher: Arc<dyn VectorMatcher>,
        catalog: Arc<DomainCatalog>,
    ) -> Result<Self, ConfigError> {
        Self::with_config(matcher, catalog, RouterConfig::default())
    }

    /// Construct with explicit configuration.
    ///
    /// Refuses to start on an out-of-range threshold or a zero top-k —
    /// operating with an undefined gate is worse than failing fast.
    pub fn with_config(
        matcher: Arc<dyn VectorMatcher>,
        catalog: Arc<DomainCatalog>,
        config: RouterConfig,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&config.confidence_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(config.confidence_threshold));
        }
        if config.top_k == 0 {
            return Err(ConfigError::InvalidTopK);
        }
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        Ok(Self {
            matcher,
            catalog,
            config,
            stats: RoutingStats::new(),
        })
    }

    /// Route one query: validate, match, score, gate, build.
    ///
    /// Returns exactly one of the two decision shapes on success. Counters
    /// are touched only after a decision is fully built, so a caller that
    /// cancels mid-match leaves the statistics unchanged.
    #[instrument(skip(self), fields(query_len = query.len()))]
    pub async fn route(&self, query: &str) -> Result<RoutingDecision, RouterError> {
        let started = Instant::now();

        if let Err(err) = self.validate_query(query) {
            self.stats.record_error();
            return Err(RouterError::Input(err));
        }

        let matches = match self.matcher.top_matches(query, self.config.top_k).await {
            Ok(matches) => matches,
            Err(err) => {
                warn!(error = %err, "vector matcher failed");
                self.stats.record_error();
                return Err(err.into());
            }
        };

        let confidence = scoring::confidence_from_matches(&matches);

        let decision = if scoring::meets_threshold(confidence, self.config.confidence_threshold)
        {
            debug!(confidence, "routing with high confidence");
            match self.build_high_confidence(query, confidence, &matches) {
                Ok(decision) => decision,
                Err(err) => {
                    self.stats.record_error();
                    return Err(RouterError::Upstream(err));
                }
            }
        } else {
            debug!(
                confidence,
                threshold = self.config.confidence_threshold,
                "requesting clarification"
            );
            self.build_clarification(query, confidence)
        };

        self.stats
            .record_decision(decision.routing_status(), started.elapsed());
        Ok(decision)
    }

    /// Read-only snapshot of configuration, catalog shape, and counters.
    pub fn get_routing_statistics(&self) -> RoutingStatistics {
        RoutingStatistics {
            routing_system_info: RoutingSystemInfo {
                confidence_threshold: self.config.confidence_threshold,
                available_domains_count: self.catalog.len(),
                routing_decision_levels: ROUTING_DECISION_LEVELS,
            },
            index_statistics: IndexStatistics {
                total_capabilities: self.catalog.total_capabilities(),
                capabilities_per_domain: self.catalog.capability_counts(),
            },
            counters: self.stats.snapshot(),
        }
    }

    /// Counter snapshot alone, for lightweight analytics polling.
    pub fn analytics_summary(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Zero the statistics counters.
    pub fn reset_statistics(&self) {
        self.stats.reset();
    }

    /// The catalog this router decides over.
    pub fn catalog(&self) -> &DomainCatalog {
        &self.catalog
    }

    /// The configured routing threshold.
    pub fn confidence_threshold(&self) -> f32 {
        self.config.confidence_threshold
    }

    fn validate_query(&self, query: &str) -> Result<(), InputError> {
        if query.trim().is_empty() {
            return Err(InputError::EmptyQuery);
        }
        if query.len() > self.config.max_query_length {
            return Err(InputError::QueryTooLong {
                length: query.len(),
                max: self.config.max_query_length,
            });
        }
        Ok(())
    }

    fn build_high_confidence(
        &self,
        query: &str,
        confidence: f32,
        matches: &[MatchResult],
    ) -> Result<RoutingDecision, UpstreamError> {
        // Gate passed, so matches is non-empty
        let best = &matches[0];
        let domain = self
            .catalog
            .get(&best.source_domain)
            .ok_or_else(|| UpstreamError::UnknownDomain(best.source_domain.clone()))?;

        // All supporting evidence for the winner, never a foreign snippet
        let matching_capabilities: Vec<String> = matches
            .iter()
            .filter(|m| m.source_domain == best.source_domain)
            .map(|m| m.matched_text.clone())
            .collect();

        Ok(RoutingDecision::HighConfidence(HighConfidenceDecision {
            user_query: query.to_string(),
            routing_analysis: HighConfidenceAnalysis {
                confidence_score: scoring::round_confidence(confidence),
                routing_status: RoutingStatus::HighConfidence,
                primary_data_source: domain.domain_id.clone(),
                index_file_path: domain.index_file_path.clone(),
                matching_capabilities,
            },
            routing_recommendation: format!(
                "Proceed with {} for your analysis",
                domain.domain_id
            ),
        }))
    }

    fn build_clarification(&self, query: &str, confidence: f32) -> RoutingDecision {
        RoutingDecision::RequiresClarification(ClarificationDecision {
            user_query: query.to_string(),
            routing_analysis: ClarificationAnalysis {
                confidence_score: scoring::round_confidence(confidence),
                routing_status: RoutingStatus::RequiresClarification,
                reason: format!(
                    "Query too generic - confidence below {} threshold",
                    self.config.confidence_threshold
                ),
            },
            clarification_request: ClarificationRequest::from_catalog(&self.catalog),
        })
    }
}
