//! Capability Embedding Index
//!
//! Vector-side contracts for healthcare query routing: an opaque text
//! embedder, an in-memory cosine index over domain capability snippets, and
//! the `VectorMatcher` seam the router consumes.
//!
//! # Architecture
//!
//! ```text
//! Query Text
//!       │
//!       ▼
//! ┌─────────────────────────────────────────┐
//! │  Embedder (external model)              │
//! │  "fraud reports for Q3" → [D dims]      │
//! └─────────────────────────────────────────┘
//!       │
//!       ▼
//! ┌─────────────────────────────────────────┐
//! │  CapabilityIndex                        │
//! │  unit-norm vectors, cosine scoring      │
//! │  → top-k matches, descending, stable    │
//! └─────────────────────────────────────────┘
//!       │
//!       ▼
//!   Vec<MatchResult>  (domain, score, snippet)
//! ```
//!
//! The embedding model itself is an external collaborator — only the
//! [`Embedder`] trait lives here. Callers that search a remote index
//! implement [`VectorMatcher`] directly.

pub mod embedder;
pub mod index;
pub mod matcher;
pub mod types;

pub use embedder::Embedder;
pub use index::CapabilityIndex;
pub use matcher::{EmbeddingVectorMatcher, VectorMatcher};
pub use types::{IndexError, MatchResult};
