//! In-memory capability index
//!
//! Holds one unit-normalized vector per capability snippet and scores
//! queries by cosine similarity. The catalog is small (a handful of domains,
//! a few snippets each), so a linear scan beats any ANN structure here.

use tracing::debug;

use crate::types::{IndexError, MatchResult};

/// L2 norm of a vector
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Normalize vector to unit length
pub fn normalize(v: Vec<f32>) -> Vec<f32> {
    let n = l2_norm(&v);
    if n > 0.0 {
        v.into_iter().map(|x| x / n).collect()
    } else {
        v
    }
}

struct IndexEntry {
    domain_id: String,
    text: String,
    // Unit-normalized on insert
    vector: Vec<f32>,
}

/// In-memory cosine index over domain capability snippets.
///
/// Built once at startup from the domain catalog, then shared read-only
/// across concurrent queries.
pub struct CapabilityIndex {
    dimension: usize,
    entries: Vec<IndexEntry>,
}

impl CapabilityIndex {
    /// Create an empty index for vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Insert one capability snippet with its embedding.
    ///
    /// Insertion order is significant: it is the tie-break order for
    /// equal-similarity matches.
    pub fn insert(
        &mut self,
        domain_id: impl Into<String>,
        text: impl Into<String>,
        vector: Vec<f32>,
    ) -> Result<(), IndexError> {
        if vector.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        self.entries.push(IndexEntry {
            domain_id: domain_id.into(),
            text: text.into(),
            vector: normalize(vector),
        });
        Ok(())
    }

    /// Score every snippet against the query vector and return the top-k
    /// matches, descending by similarity, ties in insertion order.
    pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<MatchResult>, IndexError> {
        if top_k == 0 {
            return Err(IndexError::ZeroTopK);
        }
        if query.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let query = normalize(query.to_vec());

        let mut results: Vec<MatchResult> = self
            .entries
            .iter()
            .map(|entry| MatchResult {
                source_domain: entry.domain_id.clone(),
                similarity_score: dot(&query, &entry.vector),
                matched_text: entry.text.clone(),
            })
            .collect();

        // Stable sort keeps insertion order for equal scores
        results.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        debug!(candidates = results.len(), "capability index searched");
        Ok(results)
    }

    /// Vector dimension this index accepts.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of indexed snippets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
