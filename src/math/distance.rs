//! Squared Euclidean distance kernels.
//!
//! ## Purpose
//!
//! This module provides the one distance the tree uses. All internal
//! comparisons and pruning bounds are monotone in the squared value, so
//! the square root is paid once per returned kNN distance and nowhere
//! else.
//!
//! ## Design notes
//!
//! * **Trait bridge**: [`KdFloat`] connects generic `Float` code to
//!   concrete SIMD kernels; it is implemented for `f32` and `f64`.
//! * **SIMD**: Coordinate slices are walked a register at a time via the
//!   `wide` crate; whatever misses a full register is folded in by a
//!   scalar tail.
//!
//! ## Invariants
//!
//! * Distances are non-negative for finite inputs.
//! * `squared_distance(a, a) == 0` for finite `a`.
//!
//! ## Non-goals
//!
//! * This module does not provide non-Euclidean metrics.
//! * This module does not handle non-finite coordinates.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x4};

// ============================================================================
// KdFloat Trait
// ============================================================================

/// Floating-point element types the tree can index.
///
/// Bridges generic `Float` code to the optimized kernels below; the
/// caller supplies `f32` or `f64`.
pub trait KdFloat: Float + 'static {
    /// Compute squared Euclidean distance between two points.
    fn squared_distance(a: &[Self], b: &[Self]) -> Self;
}

impl KdFloat for f64 {
    #[inline]
    fn squared_distance(a: &[Self], b: &[Self]) -> Self {
        simd_distance::squared_euclidean_f64(a, b)
    }
}

impl KdFloat for f32 {
    #[inline]
    fn squared_distance(a: &[Self], b: &[Self]) -> Self {
        simd_distance::squared_euclidean_f32(a, b)
    }
}

// ============================================================================
// SIMD Distance Implementation
// ============================================================================

/// Vectorized squared-distance kernels built on `wide`.
pub mod simd_distance {
    use super::*;

    /// Squared Euclidean distance for `f64` slices, four lanes at a
    /// time.
    #[inline]
    pub fn squared_euclidean_f64(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "coordinate slices must match");

        // Trees this crate targets live in a handful of dimensions;
        // registers only pay off once a point spans one.
        if a.len() < 4 {
            return squared_sum_scalar(a, b);
        }

        let mut lanes_a = a.chunks_exact(4);
        let mut lanes_b = b.chunks_exact(4);
        let mut acc = f64x4::ZERO;

        for (la, lb) in lanes_a.by_ref().zip(lanes_b.by_ref()) {
            let mut xs = [0.0f64; 4];
            let mut ys = [0.0f64; 4];
            xs.copy_from_slice(la);
            ys.copy_from_slice(lb);
            let d = f64x4::from(xs) - f64x4::from(ys);
            acc += d * d;
        }

        acc.reduce_add() + squared_sum_scalar(lanes_a.remainder(), lanes_b.remainder())
    }

    /// Squared Euclidean distance for `f32` slices, eight lanes at a
    /// time.
    #[inline]
    pub fn squared_euclidean_f32(a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len(), "coordinate slices must match");

        if a.len() < 8 {
            return squared_sum_scalar(a, b);
        }

        let mut lanes_a = a.chunks_exact(8);
        let mut lanes_b = b.chunks_exact(8);
        let mut acc = f32x8::ZERO;

        for (la, lb) in lanes_a.by_ref().zip(lanes_b.by_ref()) {
            let mut xs = [0.0f32; 8];
            let mut ys = [0.0f32; 8];
            xs.copy_from_slice(la);
            ys.copy_from_slice(lb);
            let d = f32x8::from(xs) - f32x8::from(ys);
            acc += d * d;
        }

        acc.reduce_add() + squared_sum_scalar(lanes_a.remainder(), lanes_b.remainder())
    }

    // ========================================================================
    // Scalar Tail
    // ========================================================================

    /// Plain accumulation for short slices and register remainders.
    #[inline]
    fn squared_sum_scalar<T: Float>(a: &[T], b: &[T]) -> T {
        let mut sum = T::zero();
        for (&x, &y) in a.iter().zip(b) {
            let d = x - y;
            sum = sum + d * d;
        }
        sum
    }
}
