//! Scoring metrics for vector similarity ranking.
//!
//! [`MetricKind`] is a closed enum: every metric the library understands is a
//! variant, dispatched by `match`, so an unknown metric is a type error (or a
//! typed parse error) rather than a silent fallback.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VecrankError};
use crate::simd;

/// Scoring metrics for vector similarity ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MetricKind {
    /// Cosine similarity (higher is more similar, zero-norm vectors score 0)
    #[default]
    Cosine,
    /// Euclidean (L2) distance (lower is more similar)
    Euclidean,
    /// Dot product similarity (higher is more similar)
    DotProduct,
    /// Manhattan (L1) distance (lower is more similar)
    Manhattan,
}

/// The ordering under which a metric ranks candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Higher scores rank first (similarity metrics).
    Descending,
    /// Lower scores rank first (distance metrics).
    Ascending,
}

impl MetricKind {
    /// Score two vectors under this metric.
    ///
    /// Both slices must have the same length; the ranker validates
    /// dimensionality (with the candidate id in hand) before scoring.
    ///
    /// Cosine similarity of a zero-norm vector against anything is defined
    /// as 0: there is no meaningful direction to compare, and 0 avoids a
    /// division by zero. This is a documented scoring policy, not an error.
    pub fn score(&self, a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len());

        match self {
            MetricKind::Cosine => {
                let norm_a = simd::norm(a);
                let norm_b = simd::norm(b);

                if norm_a == 0.0 || norm_b == 0.0 {
                    0.0
                } else {
                    simd::dot(a, b) / (norm_a * norm_b)
                }
            }
            MetricKind::Euclidean => simd::squared_l2(a, b).sqrt(),
            MetricKind::DotProduct => simd::dot(a, b),
            MetricKind::Manhattan => simd::l1(a, b),
        }
    }

    /// Get the sort order under which this metric ranks candidates.
    pub fn sort_order(&self) -> SortOrder {
        match self {
            MetricKind::Cosine | MetricKind::DotProduct => SortOrder::Descending,
            MetricKind::Euclidean | MetricKind::Manhattan => SortOrder::Ascending,
        }
    }

    /// Get the name of this metric.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Cosine => "cosine",
            MetricKind::Euclidean => "euclidean",
            MetricKind::DotProduct => "dot_product",
            MetricKind::Manhattan => "manhattan",
        }
    }
}

impl FromStr for MetricKind {
    type Err = VecrankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(MetricKind::Cosine),
            "euclidean" | "l2" => Ok(MetricKind::Euclidean),
            "dot_product" | "dot" => Ok(MetricKind::DotProduct),
            "manhattan" | "l1" => Ok(MetricKind::Manhattan),
            _ => Err(VecrankError::invalid_argument(format!(
                "Unknown metric: {s}"
            ))),
        }
    }
}
