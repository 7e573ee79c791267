//! Radius (ball) query tests.
//!
//! ## Test Organization
//!
//! 1. **Concrete Scenarios** - hand-checked point sets
//! 2. **Strictness** - boundary points and the zero radius
//! 3. **Oracle Comparison** - agreement with brute force on random data
//! 4. **Subtree Dumps** - radii large enough to swallow whole nodes
//! 5. **Error Paths** - rejected radii and query dimensions

use kdtree_rs::prelude::*;
use rand::prelude::*;

/// Brute-force ball oracle with strict inclusion, sorted ascending.
fn brute_force_ball(points: &[f64], dims: usize, query: &[f64], radius: f64) -> Vec<usize> {
    let n = points.len() / dims;
    (0..n)
        .filter(|&id| {
            let d_sq: f64 = points[id * dims..(id + 1) * dims]
                .iter()
                .zip(query.iter())
                .map(|(&a, &b)| (a - b) * (a - b))
                .sum();
            d_sq < radius * radius
        })
        .collect()
}

// ============================================================================
// Concrete Scenario Tests
// ============================================================================

#[test]
fn test_single_point_inside() {
    let points = vec![0.0, 0.0];
    let tree = KdTree::build(&points, 2).unwrap();

    assert_eq!(tree.ball(&[0.0, 0.0], 0.1).unwrap(), vec![0]);
}

#[test]
fn test_grid_cross() {
    // The 3x3 integer grid; ids in row-major order, x first.
    let points: Vec<f64> = (0..3)
        .flat_map(|x| (0..3).map(move |y| [x as f64, y as f64]))
        .flatten()
        .collect();
    let tree = KdTree::build(&points, 2).unwrap();

    // Radius 1.01 around the centre: the centre and its four axis
    // neighbours, never the diagonal corners.
    let hits = tree.ball(&[1.0, 1.0], 1.01).unwrap();
    assert_eq!(hits, vec![1, 3, 4, 5, 7]);
}

#[test]
fn test_output_sorted_ascending() {
    let points = vec![
        5.0, 5.0, //
        0.0, 0.0, //
        5.1, 5.0, //
        -1.0, 0.0, //
        4.9, 5.0, //
    ];
    let tree = KdTree::build(&points, 2).unwrap();

    let hits = tree.ball(&[5.0, 5.0], 0.5).unwrap();
    assert_eq!(hits, vec![0, 2, 4]);
}

// ============================================================================
// Strictness Tests
// ============================================================================

#[test]
fn test_zero_radius_is_empty() {
    let points = vec![0.0, 0.0, 1.0, 1.0];
    let tree = KdTree::build(&points, 2).unwrap();

    // Strict inclusion: even a coincident point is not within radius 0.
    assert_eq!(tree.ball(&[0.0, 0.0], 0.0).unwrap(), Vec::<usize>::new());
}

#[test]
fn test_boundary_point_excluded() {
    let points = vec![0.0, 1.0, 3.0];
    let tree = KdTree::build(&points, 1).unwrap();

    // The point at distance exactly 1.0 is not a hit.
    assert_eq!(tree.ball(&[0.0], 1.0).unwrap(), vec![0]);
}

#[test]
fn test_infinite_radius_returns_everything() {
    let points = vec![0.0, 10.0, -4.0, 7.5];
    let tree = KdTree::build(&points, 1).unwrap();

    assert_eq!(tree.ball(&[2.0], f64::INFINITY).unwrap(), vec![0, 1, 2, 3]);
}

// ============================================================================
// Oracle Comparison Tests
// ============================================================================

#[test]
fn test_matches_brute_force_2d() {
    let mut rng = StdRng::seed_from_u64(99);
    let n = 400;
    let dims = 2;
    let points: Vec<f64> = (0..n * dims).map(|_| rng.random_range(-10.0..10.0)).collect();

    let tree = KdTree::<f64>::builder().leaf_size(8).build(&points, dims).unwrap();

    for _ in 0..60 {
        let query: Vec<f64> = (0..dims).map(|_| rng.random_range(-11.0..11.0)).collect();
        let radius = rng.random_range(0.0..8.0);

        assert_eq!(
            tree.ball(&query, radius).unwrap(),
            brute_force_ball(&points, dims, &query, radius),
            "query {:?} radius {}",
            query,
            radius
        );
    }
}

#[test]
fn test_matches_brute_force_leaf_size_sweep() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 83;
    let dims = 3;
    let points: Vec<f64> = (0..n * dims).map(|_| rng.random_range(0.0..4.0)).collect();
    let query = [2.0, 2.0, 2.0];
    let reference = brute_force_ball(&points, dims, &query, 1.5);

    for leaf_size in [1, 2, 5, 13, 100] {
        let tree = KdTree::<f64>::builder()
            .leaf_size(leaf_size)
            .build(&points, dims)
            .unwrap();
        assert_eq!(tree.ball(&query, 1.5).unwrap(), reference, "ls={}", leaf_size);
    }
}

// ============================================================================
// Subtree Dump Tests
// ============================================================================

#[test]
fn test_radius_covering_whole_tree() {
    let mut rng = StdRng::seed_from_u64(21);
    let n = 150;
    let points: Vec<f64> = (0..n * 2).map(|_| rng.random_range(-1.0..1.0)).collect();
    let tree = KdTree::<f64>::builder().leaf_size(4).build(&points, 2).unwrap();

    // Every node's box is strictly inside this ball, so the traversal
    // dumps subtrees instead of testing points.
    let hits = tree.ball(&[0.0, 0.0], 100.0).unwrap();
    assert_eq!(hits, (0..n).collect::<Vec<_>>());
}

#[test]
fn test_radius_covering_one_cluster() {
    // Two tight clusters far apart; a ball around one must swallow it
    // whole and ignore the other.
    let mut points = Vec::new();
    for i in 0..8 {
        points.extend_from_slice(&[i as f64 * 0.01, 0.0]);
    }
    for i in 0..8 {
        points.extend_from_slice(&[100.0 + i as f64 * 0.01, 0.0]);
    }
    let tree = KdTree::<f64>::builder().leaf_size(2).build(&points, 2).unwrap();

    let hits = tree.ball(&[0.035, 0.0], 5.0).unwrap();
    assert_eq!(hits, (0..8).collect::<Vec<_>>());
}

#[test]
fn test_idempotence() {
    let points = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let tree = KdTree::build(&points, 1).unwrap();

    let first = tree.ball(&[3.0], 1.5).unwrap();
    let second = tree.ball(&[3.0], 1.5).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec![1, 2, 3]);
}

// ============================================================================
// Error Path Tests
// ============================================================================

#[test]
fn test_negative_radius_rejected() {
    let points = vec![0.0, 0.0];
    let tree = KdTree::build(&points, 2).unwrap();

    assert_eq!(
        tree.ball(&[0.0, 0.0], -1.0),
        Err(KdTreeError::InvalidRadius(-1.0))
    );
}

#[test]
fn test_nan_radius_rejected() {
    let points = vec![0.0, 0.0];
    let tree = KdTree::build(&points, 2).unwrap();

    assert!(tree.ball(&[0.0, 0.0], f64::NAN).is_err());
}

#[test]
fn test_query_dimension_mismatch_rejected() {
    let points = vec![0.0, 0.0];
    let tree = KdTree::build(&points, 2).unwrap();

    assert_eq!(
        tree.ball(&[0.0], 1.0),
        Err(KdTreeError::DimensionMismatch {
            expected: 2,
            got: 1
        })
    );
}
