//! SIMD kernels for the metric hot loops, built on the `wide` crate.
//!
//! Each kernel processes 8 lanes at a time with `f32x8` and falls back to a
//! scalar loop for short vectors and for the tail that does not fill a full
//! chunk. Callers guarantee equal slice lengths.

use wide::f32x8;

const LANES: usize = 8;

/// Dot product of two equal-length slices.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    if a.len() < LANES {
        return a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    }

    let mut acc = f32x8::splat(0.0);

    let chunks_a = a.chunks_exact(LANES);
    let chunks_b = b.chunks_exact(LANES);
    let remainder_a = chunks_a.remainder();
    let remainder_b = chunks_b.remainder();

    for (chunk_a, chunk_b) in chunks_a.zip(chunks_b) {
        let vec_a = f32x8::new(*<&[f32; LANES]>::try_from(chunk_a).unwrap());
        let vec_b = f32x8::new(*<&[f32; LANES]>::try_from(chunk_b).unwrap());
        acc = acc + vec_a * vec_b;
    }

    let mut total = acc.to_array().iter().sum::<f32>();
    total += remainder_a
        .iter()
        .zip(remainder_b.iter())
        .map(|(x, y)| x * y)
        .sum::<f32>();

    total
}

/// Squared L2 distance between two equal-length slices.
pub fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    if a.len() < LANES {
        return a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum();
    }

    let mut acc = f32x8::splat(0.0);

    let chunks_a = a.chunks_exact(LANES);
    let chunks_b = b.chunks_exact(LANES);
    let remainder_a = chunks_a.remainder();
    let remainder_b = chunks_b.remainder();

    for (chunk_a, chunk_b) in chunks_a.zip(chunks_b) {
        let vec_a = f32x8::new(*<&[f32; LANES]>::try_from(chunk_a).unwrap());
        let vec_b = f32x8::new(*<&[f32; LANES]>::try_from(chunk_b).unwrap());
        let diff = vec_a - vec_b;
        acc = acc + diff * diff;
    }

    let mut total = acc.to_array().iter().sum::<f32>();
    total += remainder_a
        .iter()
        .zip(remainder_b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>();

    total
}

/// L1 (manhattan) distance between two equal-length slices.
pub fn l1(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    if a.len() < LANES {
        return a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum();
    }

    let mut acc = f32x8::splat(0.0);

    let chunks_a = a.chunks_exact(LANES);
    let chunks_b = b.chunks_exact(LANES);
    let remainder_a = chunks_a.remainder();
    let remainder_b = chunks_b.remainder();

    for (chunk_a, chunk_b) in chunks_a.zip(chunks_b) {
        let vec_a = f32x8::new(*<&[f32; LANES]>::try_from(chunk_a).unwrap());
        let vec_b = f32x8::new(*<&[f32; LANES]>::try_from(chunk_b).unwrap());
        acc = acc + (vec_a - vec_b).abs();
    }

    let mut total = acc.to_array().iter().sum::<f32>();
    total += remainder_a
        .iter()
        .zip(remainder_b.iter())
        .map(|(x, y)| (x - y).abs())
        .sum::<f32>();

    total
}

/// L2 norm of a slice.
pub fn norm(a: &[f32]) -> f32 {
    dot(a, a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
    }

    fn test_vectors(len: usize) -> (Vec<f32>, Vec<f32>) {
        let a: Vec<f32> = (0..len).map(|i| (i as f32 * 0.3).sin()).collect();
        let b: Vec<f32> = (0..len).map(|i| (i as f32 * 0.7).cos()).collect();
        (a, b)
    }

    #[test]
    fn test_dot_matches_scalar_across_lengths() {
        // Cover the scalar path, a full chunk, and a ragged tail.
        for len in [0, 3, 8, 16, 19, 128, 131] {
            let (a, b) = test_vectors(len);
            let expected = reference_dot(&a, &b);
            assert!(
                (dot(&a, &b) - expected).abs() < 1e-4,
                "dot mismatch at len {len}"
            );
        }
    }

    #[test]
    fn test_squared_l2_matches_scalar() {
        for len in [2, 8, 19, 131] {
            let (a, b) = test_vectors(len);
            let expected: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum();
            assert!((squared_l2(&a, &b) - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_l1_matches_scalar() {
        for len in [2, 8, 19, 131] {
            let (a, b) = test_vectors(len);
            let expected: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum();
            assert!((l1(&a, &b) - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_norm() {
        assert!((norm(&[3.0, 4.0]) - 5.0).abs() < 1e-6);
        assert_eq!(norm(&[0.0, 0.0, 0.0]), 0.0);
    }
}
