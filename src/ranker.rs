//! Exact top-k ranking over labeled candidate vectors.

use std::collections::hash_map::Entry;

use ahash::AHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VecrankError};
use crate::metric::{MetricKind, SortOrder};
use crate::vector::Vector;

/// Batches of queries below this size are ranked sequentially.
const PARALLEL_THRESHOLD: usize = 100;

/// A labeled vector eligible for ranking.
///
/// Identifiers are expected to be unique within one ranking call. If
/// duplicates are supplied anyway, the last vector written for an identifier
/// wins, keeping the position of the first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque identifier, unique within a ranking call.
    pub id: String,
    /// The candidate's vector.
    pub vector: Vector,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new<S: Into<String>, V: Into<Vector>>(id: S, vector: V) -> Self {
        Self {
            id: id.into(),
            vector: vector.into(),
        }
    }
}

/// A scored candidate produced by a ranking call. Output only, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Identifier of the candidate.
    pub id: String,
    /// Score under the ranker's metric.
    pub score: f32,
    /// The candidate's vector.
    pub vector: Vector,
}

/// Exact (brute force) top-k ranker parameterized by metric.
///
/// Ranking is a pure function over its inputs: no mutation, no I/O, no shared
/// state. A ranker is `Copy` and safe to use from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRanker {
    metric: MetricKind,
}

impl SimilarityRanker {
    /// Create a ranker using the given metric.
    pub fn new(metric: MetricKind) -> Self {
        Self { metric }
    }

    /// Get the metric this ranker scores with.
    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Return the `k` candidates most similar to `query`, best first.
    ///
    /// Cosine and dot product rank descending by score, euclidean and
    /// manhattan ascending. Candidates with equal scores keep their input
    /// order. If `k` exceeds the number of candidates, all candidates are
    /// returned; an empty candidate slice yields an empty result.
    ///
    /// # Errors
    ///
    /// - [`VecrankError::InvalidArgument`] if `k` is 0 or `query` is empty.
    /// - [`VecrankError::DimensionMismatch`] if any candidate's
    ///   dimensionality differs from the query's. No partial results are
    ///   returned.
    pub fn rank(
        &self,
        query: &Vector,
        candidates: &[Candidate],
        k: usize,
    ) -> Result<Vec<RankedResult>> {
        if k == 0 {
            return Err(VecrankError::invalid_argument("k must be at least 1"));
        }

        let mut results = self.score_all(query, candidates)?;
        sort_results(&mut results, self.metric.sort_order());
        results.truncate(k);

        Ok(results)
    }

    /// Return every candidate within `threshold` of `query`, best first.
    ///
    /// For distance metrics (euclidean, manhattan) a candidate qualifies when
    /// its distance is at most `threshold`; for similarity metrics (cosine,
    /// dot product) when its score is at least `threshold`. The result count
    /// is not capped, and an empty result is not an error.
    pub fn rank_within(
        &self,
        query: &Vector,
        candidates: &[Candidate],
        threshold: f32,
    ) -> Result<Vec<RankedResult>> {
        let mut results = self.score_all(query, candidates)?;

        match self.metric.sort_order() {
            SortOrder::Descending => results.retain(|r| r.score >= threshold),
            SortOrder::Ascending => results.retain(|r| r.score <= threshold),
        }

        sort_results(&mut results, self.metric.sort_order());
        Ok(results)
    }

    /// Rank many independent queries against the same candidates.
    ///
    /// Output order matches `queries`. Large batches are scored in parallel;
    /// each query still sees the exact same results it would get from
    /// [`rank`](Self::rank).
    pub fn rank_batch(
        &self,
        queries: &[Vector],
        candidates: &[Candidate],
        k: usize,
    ) -> Result<Vec<Vec<RankedResult>>> {
        if queries.len() < PARALLEL_THRESHOLD {
            return queries
                .iter()
                .map(|query| self.rank(query, candidates, k))
                .collect();
        }

        queries
            .par_iter()
            .map(|query| self.rank(query, candidates, k))
            .collect()
    }

    /// Score every candidate against the query, in input order.
    fn score_all(&self, query: &Vector, candidates: &[Candidate]) -> Result<Vec<RankedResult>> {
        if query.is_empty() {
            return Err(VecrankError::invalid_argument(
                "query vector must not be empty",
            ));
        }

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        // Deduplicate ids up front: the last vector written for an id wins,
        // in the slot of the first occurrence (insertion-ordered map
        // semantics, which the stable tie-break depends on).
        let mut slots: Vec<(&str, &Vector)> = Vec::with_capacity(candidates.len());
        let mut seen: AHashMap<&str, usize> = AHashMap::with_capacity(candidates.len());
        for candidate in candidates {
            match seen.entry(candidate.id.as_str()) {
                Entry::Occupied(slot) => slots[*slot.get()].1 = &candidate.vector,
                Entry::Vacant(slot) => {
                    slot.insert(slots.len());
                    slots.push((candidate.id.as_str(), &candidate.vector));
                }
            }
        }

        let expected = query.dimension();
        let mut results = Vec::with_capacity(slots.len());
        for (id, vector) in slots {
            if vector.dimension() != expected {
                return Err(VecrankError::dimension_mismatch(
                    id,
                    expected,
                    vector.dimension(),
                ));
            }

            results.push(RankedResult {
                id: id.to_string(),
                score: self.metric.score(&query.data, &vector.data),
                vector: vector.clone(),
            });
        }

        Ok(results)
    }
}

/// Stable sort so that equal scores keep their input order.
fn sort_results(results: &mut [RankedResult], order: SortOrder) {
    match order {
        SortOrder::Descending => results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortOrder::Ascending => results.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
}
