//! Text embedding contract
//!
//! The embedding model is an external collaborator: a deployment wires in
//! whatever produces fixed-length sentence vectors (an in-process model, a
//! sidecar service). The index only needs the seam.

use crate::types::IndexError;

/// Opaque text → fixed-dimension vector function.
///
/// The dimension is a property of the model and must be constant for the
/// lifetime of the embedder; [`crate::CapabilityIndex`] rejects vectors of
/// any other length.
pub trait Embedder: Send + Sync {
    /// Vector length this embedder produces.
    fn dimension(&self) -> usize;

    /// Embed a single text. Vectors need not be normalized; the index
    /// normalizes on insert and on query.
    fn embed(&self, text: &str) -> Result<Vec<f32>, IndexError>;
}
