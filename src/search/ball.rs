//! Radius (ball) query traversal.
//!
//! ## Purpose
//!
//! This module collects every point strictly within a given radius of a
//! query point. Each node's stored bounding box yields lower and upper
//! bounds on the squared distance to anything in its subtree: a subtree
//! entirely outside the ball is skipped, one entirely inside is emitted
//! without per-point tests, and only straddling leaves test their points
//! individually.
//!
//! ## Design notes
//!
//! * **Strict inclusion**: A point is a hit iff its distance is `< r`,
//!   so a zero radius returns nothing.
//! * **Squared radius**: The traversal compares against `r²` throughout;
//!   no square roots are taken.
//! * **Sorted output**: Hits are collected in traversal order and sorted
//!   ascending before returning; callers rely on numeric order.
//!
//! ## Non-goals
//!
//! * This module does not validate the radius or the query (handled at
//!   the public boundary).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::tree::KdTree;
use crate::math::distance::KdFloat;

// ============================================================================
// BallSearcher
// ============================================================================

/// Hit-collection state for one ball query.
pub struct BallSearcher<'q, T> {
    query: &'q [T],
    radius_sq: T,
    hits: Vec<usize>,
}

impl<'q, T: KdFloat> BallSearcher<'q, T> {
    /// Prepare a search for points within `radius` of `query`.
    pub fn new(query: &'q [T], radius: T) -> Self {
        Self {
            query,
            radius_sq: radius * radius,
            hits: Vec::new(),
        }
    }

    /// Run the traversal and return the hit ids sorted ascending.
    pub fn search(mut self, tree: &KdTree<'_, T>) -> Vec<usize> {
        self.visit(tree, 1);
        self.hits.sort_unstable();
        self.hits
    }

    fn visit(&mut self, tree: &KdTree<'_, T>, node: usize) {
        let (lo_sq, hi_sq) = tree.bounds[node].min_max_sq_dist(self.query);

        if lo_sq > self.radius_sq {
            // Nothing under this node can reach the ball.
            return;
        }
        if hi_sq < self.radius_sq {
            // The whole subtree is inside; skip per-point tests.
            self.dump(tree, node);
            return;
        }

        if tree.shape.is_leaf(node) {
            for &id in &tree.indices[tree.shape.leaf_range(node)] {
                let d_sq = T::squared_distance(self.query, tree.point(id));
                if d_sq < self.radius_sq {
                    self.hits.push(id);
                }
            }
            return;
        }

        self.visit(tree, 2 * node);
        self.visit(tree, 2 * node + 1);
    }

    /// Emit every point under `node` unconditionally.
    fn dump(&mut self, tree: &KdTree<'_, T>, node: usize) {
        if tree.shape.is_leaf(node) {
            self.hits
                .extend_from_slice(&tree.indices[tree.shape.leaf_range(node)]);
            return;
        }
        self.dump(tree, 2 * node);
        self.dump(tree, 2 * node + 1);
    }
}
