//! Vector matcher seam
//!
//! The router consumes nearest-neighbor search through this trait only, so
//! it can be tested with a stub and deployed against anything that returns
//! ranked matches.

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    embedder::Embedder,
    index::CapabilityIndex,
    types::{IndexError, MatchResult},
};

/// Pure matching service: query text → ranked matches.
///
/// Implementations must return matches sorted descending by
/// `similarity_score` and must not mutate any shared state. Timeouts or
/// transport failures surface as [`IndexError::Unavailable`]; the caller
/// decides on retry policy.
#[async_trait]
pub trait VectorMatcher: Send + Sync {
    /// Return up to `top_k` nearest capability snippets for the query.
    async fn top_matches(&self, query: &str, top_k: usize)
        -> Result<Vec<MatchResult>, IndexError>;
}

/// Default matcher: an [`Embedder`] in front of a [`CapabilityIndex`].
pub struct EmbeddingVectorMatcher<E: Embedder> {
    embedder: E,
    index: CapabilityIndex,
}

impl<E: Embedder> EmbeddingVectorMatcher<E> {
    /// Pair an embedder with a built index.
    ///
    /// Fails if the embedder and index disagree on vector dimension, so a
    /// misconfigured deployment refuses to start instead of erroring on the
    /// first query.
    pub fn new(embedder: E, index: CapabilityIndex) -> Result<Self, IndexError> {
        if embedder.dimension() != index.dimension() {
            return Err(IndexError::DimensionMismatch {
                expected: index.dimension(),
                actual: embedder.dimension(),
            });
        }
        Ok(Self { embedder, index })
    }

    /// Number of indexed capability snippets.
    pub fn indexed_snippets(&self) -> usize {
        self.index.len()
    }
}

#[async_trait]
impl<E: Embedder> VectorMatcher for EmbeddingVectorMatcher<E> {
    #[instrument(skip(self), fields(query_len = query.len()))]
    async fn top_matches(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<MatchResult>, IndexError> {
        let embedding = self.embedder.embed(query)?;
        self.index.search(&embedding, top_k)
    }
}
