//! Core types for capability matching

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single nearest-neighbor match against the capability catalog.
///
/// Matches are produced sorted descending by `similarity_score`; ties keep
/// catalog insertion order (the index uses a stable sort).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Domain the matched capability snippet belongs to.
    pub source_domain: String,

    /// Similarity in [0,1], higher = more similar.
    pub similarity_score: f32,

    /// The capability snippet text that matched.
    pub matched_text: String,
}

/// Errors from the embedding/index layer.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("embedding failed: {0}")]
    Embedding(String),

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("top_k must be at least 1")]
    ZeroTopK,

    #[error("index unavailable: {0}")]
    Unavailable(String),
}
