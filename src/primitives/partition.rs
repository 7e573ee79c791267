//! In-place quickselect over the index permutation.
//!
//! ## Purpose
//!
//! This module provides the rank-selection primitive used during tree
//! construction. Given a slice of the index permutation and a coordinate
//! dimension, it rearranges the indices so that the element at a chosen
//! rank addresses the coordinate that would sit there in sorted order,
//! with smaller coordinates before it and larger ones after.
//!
//! ## Design notes
//!
//! * **Hoare partition**: Mid-range pivot (`idx[(lo + hi) / 2]`) with
//!   strict `<` / `>` scans, so runs of duplicate coordinates split
//!   across both sides instead of stalling the scan pointers.
//! * **In place**: Only the permutation moves; coordinates are never
//!   touched and no allocation occurs.
//! * **Complexity**: Expected `O(hi - lo)`; the quadratic worst case is
//!   accepted because construction requests bulk-balanced ranks.
//!
//! ## Invariants
//!
//! * On return, the coordinate of `idx[rank]` is its sorted value within
//!   the slice: every earlier index addresses a coordinate `<=` it, every
//!   later index a coordinate `>=` it.
//! * The slice remains a permutation of its input indices.
//!
//! ## Non-goals
//!
//! * This module does not pick ranks or dimensions (handled by the
//!   construction engine).
//! * This module does not defend against NaN coordinates; comparisons
//!   assume totally ordered values.

// External dependencies
use num_traits::Float;

// ============================================================================
// Rank Selection
// ============================================================================

/// Partition `idx[lo..=hi]` so the index at `rank` is in sorted position
/// along dimension `dim`.
///
/// `coords` is the point-contiguous coordinate buffer; the coordinate of
/// point `p` along `dim` is `coords[p * dims + dim]`.
pub fn select_rank<T: Float>(
    idx: &mut [usize],
    coords: &[T],
    dims: usize,
    dim: usize,
    rank: usize,
    mut lo: usize,
    mut hi: usize,
) {
    debug_assert!(lo <= rank && rank <= hi);
    debug_assert!(hi < idx.len());

    while lo < hi {
        let pivot = coords[idx[(lo + hi) / 2] * dims + dim];

        // Hoare scan: pointers start one step outside the slice and
        // advance past coordinates strictly on their own side.
        let mut i = lo.wrapping_sub(1);
        let mut j = hi + 1;
        let split = loop {
            i = i.wrapping_add(1);
            while coords[idx[i] * dims + dim] < pivot {
                i += 1;
            }
            j -= 1;
            while coords[idx[j] * dims + dim] > pivot {
                j -= 1;
            }
            if i >= j {
                break j;
            }
            idx.swap(i, j);
        };

        // Narrow to the half that still contains the rank.
        if rank <= split {
            hi = split;
        } else {
            lo = split + 1;
        }
    }
}
