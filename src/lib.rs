//! # Vecrank
//!
//! A small, exact top-k similarity ranking library for Rust.
//!
//! Given a query vector and a collection of labeled candidate vectors,
//! [`SimilarityRanker`](ranker::SimilarityRanker) returns the k candidates
//! most similar to the query under a chosen metric.
//!
//! ## Features
//!
//! - Pure Rust, pure computation: no I/O, no hidden state
//! - Four metrics: cosine, euclidean, dot product, manhattan
//! - Stable tie-break: candidates with equal scores keep insertion order
//! - SIMD-accelerated scoring kernels
//! - Parallel batch ranking over many queries
//!
//! ## Example
//!
//! ```
//! use vecrank::prelude::*;
//!
//! let ranker = SimilarityRanker::default(); // cosine
//! let query = Vector::new(vec![1.0, 0.0]);
//! let candidates = vec![
//!     Candidate::new("a", vec![1.0, 0.0]),
//!     Candidate::new("b", vec![0.0, 1.0]),
//! ];
//!
//! let results = ranker.rank(&query, &candidates, 1)?;
//! assert_eq!(results[0].id, "a");
//! # Ok::<(), VecrankError>(())
//! ```

pub mod error;
pub mod metric;
pub mod ranker;
pub mod simd;
pub mod vector;

pub mod prelude {
    pub use crate::error::{Result, VecrankError};
    pub use crate::metric::{MetricKind, SortOrder};
    pub use crate::ranker::{Candidate, RankedResult, SimilarityRanker};
    pub use crate::vector::Vector;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
