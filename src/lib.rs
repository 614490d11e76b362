//! Confidence-gated semantic routing for healthcare data queries
//!
//! Routes free-text queries to one of several domain data indexes (claims,
//! providers, members, procedures) by scoring them against a small catalog
//! of capability descriptions, then either names a single primary data
//! source or asks the user for clarification.
//!
//! ## Control flow
//!
//! ```text
//! query text ──► VectorMatcher ──► ranked matches ──► confidence (rank-1)
//!                                                          │
//!                                         threshold gate ──┤
//!                                                          │
//!                              ┌───────────────────────────┴────┐
//!                              ▼                                ▼
//!                      HIGH_CONFIDENCE               REQUIRES_CLARIFICATION
//!                  (primary data source +            (domains, prompts,
//!                   supporting capabilities)          sample queries)
//! ```
//!
//! The complexity analyzer runs independently of routing, on the raw text
//! plus the static catalog vocabulary only.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use hc_router::{catalog, QueryRouter, VectorMatcher};
//! # async fn demo(matcher: Arc<dyn VectorMatcher>) -> anyhow::Result<()> {
//! let catalog = Arc::new(catalog::load_catalog("config/domain_catalog.json")?);
//! let router = QueryRouter::new(matcher, catalog)?;
//! let decision = router.route("Show me fraud detection reports for Q3 2024").await?;
//! println!("{}", serde_json::to_string_pretty(&decision)?);
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Static domain catalog
pub mod catalog;

// Routing core: scoring policy, decision shapes, statistics
pub mod router;

// Lexical complexity analysis
pub mod analyzer;

// Public re-exports
pub use analyzer::{ComplexityAssessment, ComplexityLevel, QueryAnalyzer, QueryRecommendation};
pub use catalog::{load_catalog, DomainCapability, DomainCatalog};
pub use error::{ConfigError, InputError, RouterError, UpstreamError};
pub use router::response::{RoutingDecision, RoutingStatus};
pub use router::stats::{RoutingStatistics, StatsSnapshot};
pub use router::{QueryRouter, RouterConfig};

// Vector-side contracts, re-exported for wiring convenience
pub use hc_semantic_index::{
    CapabilityIndex, Embedder, EmbeddingVectorMatcher, IndexError, MatchResult, VectorMatcher,
};
