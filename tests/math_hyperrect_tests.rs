#![cfg(feature = "dev")]
//! Tests for the hyper-rectangle algebra.
//!
//! ## Test Organization
//!
//! 1. **Construction** - enclosing boxes over coordinate buffers
//! 2. **Splitting** - shared bounds and the hyperplane ownership rule
//! 3. **Distance Bounds** - min/max squared distance in and around a box

use approx::assert_relative_eq;
use kdtree_rs::internals::math::hyperrect::HyperRect;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_enclosing_2d() {
    let coords = [0.0, 5.0, -2.0, 1.0, 3.0, 4.0];
    let rect = HyperRect::enclosing(&coords, 2);

    assert_eq!(rect.mins, vec![-2.0, 1.0]);
    assert_eq!(rect.maxes, vec![3.0, 5.0]);
}

#[test]
fn test_enclosing_single_point_is_degenerate() {
    let coords = [1.5, -0.5, 2.0];
    let rect = HyperRect::enclosing(&coords, 3);

    assert_eq!(rect.mins, rect.maxes);
    assert!(rect.contains(&[1.5, -0.5, 2.0]));
}

// ============================================================================
// Splitting Tests
// ============================================================================

#[test]
fn test_split_shares_other_bounds() {
    let rect = HyperRect {
        mins: vec![0.0, 0.0],
        maxes: vec![4.0, 2.0],
    };
    let (left, right) = rect.split(0, 1.5);

    assert_eq!(left.mins, vec![0.0, 0.0]);
    assert_eq!(left.maxes, vec![1.5, 2.0]);
    assert_eq!(right.mins, vec![1.5, 0.0]);
    assert_eq!(right.maxes, vec![4.0, 2.0]);
}

#[test]
fn test_split_hyperplane_belongs_to_both() {
    let rect = HyperRect {
        mins: vec![0.0],
        maxes: vec![2.0],
    };
    let (left, right) = rect.split(0, 1.0);

    assert!(left.contains(&[1.0]));
    assert!(right.contains(&[1.0]));
}

// ============================================================================
// Distance Bound Tests
// ============================================================================

#[test]
fn test_min_max_sq_dist_query_inside() {
    let rect = HyperRect {
        mins: vec![0.0, 0.0],
        maxes: vec![2.0, 2.0],
    };
    let (lo, hi) = rect.min_max_sq_dist(&[0.5, 1.0]);

    // Inside on both dimensions: the lower bound is zero; the upper
    // bound reaches the far corner (2, 2) or (2, 0).
    assert_relative_eq!(lo, 0.0);
    assert_relative_eq!(hi, 1.5 * 1.5 + 1.0);
}

#[test]
fn test_min_max_sq_dist_query_outside_one_axis() {
    let rect = HyperRect {
        mins: vec![0.0, 0.0],
        maxes: vec![2.0, 2.0],
    };
    let (lo, hi) = rect.min_max_sq_dist(&[3.0, 1.0]);

    // x is 1 past the face; y is inside. Farthest corner is (0, 2).
    assert_relative_eq!(lo, 1.0);
    assert_relative_eq!(hi, 9.0 + 1.0);
}

#[test]
fn test_min_max_sq_dist_query_outside_all_axes() {
    let rect = HyperRect {
        mins: vec![0.0, 0.0],
        maxes: vec![1.0, 1.0],
    };
    let (lo, hi) = rect.min_max_sq_dist(&[-1.0, 3.0]);

    // Nearest corner (0, 1): 1 + 4; farthest corner (1, 0): 4 + 9.
    assert_relative_eq!(lo, 5.0);
    assert_relative_eq!(hi, 13.0);
}

/// Bounds must bracket the distance to every point sampled inside the
/// box.
#[test]
fn test_bounds_bracket_interior_points() {
    let rect = HyperRect {
        mins: vec![-1.0, 2.0, 0.0],
        maxes: vec![1.0, 5.0, 0.5],
    };
    let query = [3.0, 1.0, -2.0];
    let (lo, hi) = rect.min_max_sq_dist(&query);

    for &fx in &[0.0, 0.25, 0.5, 1.0] {
        for &fy in &[0.0, 0.5, 1.0] {
            for &fz in &[0.0, 1.0] {
                let p = [
                    -1.0 + 2.0 * fx,
                    2.0 + 3.0 * fy,
                    0.0 + 0.5 * fz,
                ];
                let d_sq: f64 = p
                    .iter()
                    .zip(query.iter())
                    .map(|(&a, &b)| (a - b) * (a - b))
                    .sum();
                assert!(lo <= d_sq + 1e-12 && d_sq <= hi + 1e-12);
            }
        }
    }
}
