//! Axis-aligned bounding boxes and their query algebra.
//!
//! ## Purpose
//!
//! This module implements the hyper-rectangle geometry behind subtree
//! pruning: splitting a box along a hyperplane during construction, and
//! bounding the squared distance from a query point to anywhere inside a
//! box during ball queries.
//!
//! ## Key concepts
//!
//! * **Split sharing**: Splitting along dimension `j` at value `v`
//!   yields children that share every other bound; the left child's
//!   `maxes[j]` and the right child's `mins[j]` both become `v`.
//! * **Distance bounds**: `min_max_sq_dist` returns `(lo, hi)` such that
//!   every point inside the box lies at squared distance within
//!   `[lo, hi]` of the query. `lo > r²` excludes the whole box from a
//!   ball; `hi < r²` includes it entirely.
//!
//! ## Invariants
//!
//! * `mins[i] <= maxes[i]` for every dimension of a constructed box.
//!
//! ## Non-goals
//!
//! * This module does not store or traverse the tree; it is pure
//!   geometry.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// HyperRect
// ============================================================================

/// An axis-aligned bounding box in `d`-dimensional space.
#[derive(Debug, Clone, PartialEq)]
pub struct HyperRect<T> {
    /// Lower bound per dimension.
    pub mins: Vec<T>,
    /// Upper bound per dimension.
    pub maxes: Vec<T>,
}

impl<T: Float> HyperRect<T> {
    /// A degenerate box at the origin, used to pre-size node arrays.
    pub fn zeroed(dims: usize) -> Self {
        Self {
            mins: vec![T::zero(); dims],
            maxes: vec![T::zero(); dims],
        }
    }

    /// The tightest box enclosing every point in the coordinate buffer.
    ///
    /// `coords` is point-contiguous with `dims` coordinates per point
    /// and must hold at least one point.
    pub fn enclosing(coords: &[T], dims: usize) -> Self {
        debug_assert!(!coords.is_empty() && coords.len() % dims == 0);

        let mut mins = coords[..dims].to_vec();
        let mut maxes = coords[..dims].to_vec();

        for point in coords.chunks_exact(dims).skip(1) {
            for (i, &c) in point.iter().enumerate() {
                if c < mins[i] {
                    mins[i] = c;
                }
                if c > maxes[i] {
                    maxes[i] = c;
                }
            }
        }

        Self { mins, maxes }
    }

    /// Number of dimensions.
    #[inline]
    pub fn dims(&self) -> usize {
        self.mins.len()
    }

    /// Split along dimension `dim` at `value`, yielding the child boxes.
    ///
    /// Both children share all other bounds with `self`; the hyperplane
    /// itself belongs to both.
    pub fn split(&self, dim: usize, value: T) -> (Self, Self) {
        let mut left = self.clone();
        let mut right = self.clone();
        left.maxes[dim] = value;
        right.mins[dim] = value;
        (left, right)
    }

    /// Squared-distance bounds from `query` to anywhere inside the box.
    ///
    /// The lower bound is zero when the query lies inside on every
    /// dimension; the upper bound always accumulates the farther face.
    pub fn min_max_sq_dist(&self, query: &[T]) -> (T, T) {
        debug_assert_eq!(query.len(), self.dims());

        let mut lo = T::zero();
        let mut hi = T::zero();

        for i in 0..self.dims() {
            let q = query[i];
            let to_max = self.maxes[i] - q;
            let to_min = self.mins[i] - q;
            let a = to_max * to_max;
            let b = to_min * to_min;

            if q < self.mins[i] || q > self.maxes[i] {
                lo = lo + a.min(b);
            }
            hi = hi + a.max(b);
        }

        (lo, hi)
    }

    /// Whether `point` lies inside the box (boundary inclusive).
    pub fn contains(&self, point: &[T]) -> bool {
        debug_assert_eq!(point.len(), self.dims());

        point
            .iter()
            .enumerate()
            .all(|(i, &c)| self.mins[i] <= c && c <= self.maxes[i])
    }
}
