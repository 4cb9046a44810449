//! Dense vector type used for similarity ranking.

use serde::{Deserialize, Serialize};

use crate::simd;

/// A dense vector of floating point values.
///
/// Vectors are plain data: the library never mutates a caller's vector, and
/// all comparisons between vectors require equal dimensionality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    /// The vector components.
    pub data: Vec<f32>,
}

impl Vector {
    /// Create a new vector with the given components.
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Get the dimensionality of this vector.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Check whether this vector has no components.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Calculate the L2 norm (magnitude) of this vector.
    pub fn norm(&self) -> f32 {
        simd::norm(&self.data)
    }

    /// Dot product with another vector of the same dimensionality.
    pub fn dot(&self, other: &Vector) -> f32 {
        debug_assert_eq!(self.dimension(), other.dimension());
        simd::dot(&self.data, &other.data)
    }

    /// Normalize this vector to unit length. Zero vectors are left unchanged.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for value in &mut self.data {
                *value /= norm;
            }
        }
    }

    /// Get a normalized copy of this vector.
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.normalize();
        normalized
    }

    /// Check if this vector contains any NaN or infinite values.
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Vector::new(data)
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}
