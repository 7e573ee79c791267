//! k-nearest-neighbour traversal.
//!
//! ## Purpose
//!
//! This module walks the tree for a query point and maintains the `k`
//! best candidates seen so far, pruning any subtree whose separating
//! hyperplane is farther than the current worst candidate.
//!
//! ## Design notes
//!
//! * **Sorted arrays, not a heap**: `k` is small in practice, so a pair
//!   of distance-sorted arrays with linear insertion beats a binary heap
//!   on constants and keeps the output order for free.
//! * **Stable ties**: A candidate whose distance equals an existing
//!   entry is inserted after it, keeping output order deterministic
//!   across platforms.
//! * **Squared distances**: Comparisons and the hyperplane bound use
//!   squared values; the square root is applied once per result at the
//!   end.
//!
//! ## Invariants
//!
//! * `best_sq` is sorted ascending at every step.
//! * With `k <= n`, every slot is filled when the traversal returns.
//!
//! ## Non-goals
//!
//! * This module does not validate `k` or the query (handled at the
//!   public boundary).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::tree::KdTree;
use crate::math::distance::KdFloat;

// ============================================================================
// KnnSearcher
// ============================================================================

/// Running best-`k` state for one kNN query.
pub struct KnnSearcher<'q, T> {
    query: &'q [T],
    best_ids: Vec<usize>,
    best_sq: Vec<T>,
}

impl<'q, T: KdFloat> KnnSearcher<'q, T> {
    /// Prepare a search for `k` neighbours of `query`.
    pub fn new(query: &'q [T], k: usize) -> Self {
        Self {
            query,
            best_ids: vec![usize::MAX; k],
            best_sq: vec![T::infinity(); k],
        }
    }

    /// Run the traversal and return `(ids, distances)` sorted by
    /// ascending distance, square roots applied.
    pub fn search(mut self, tree: &KdTree<'_, T>) -> (Vec<usize>, Vec<T>) {
        self.visit(tree, 1);

        let mut distances = self.best_sq;
        for d in distances.iter_mut() {
            *d = d.sqrt();
        }
        (self.best_ids, distances)
    }

    fn visit(&mut self, tree: &KdTree<'_, T>, node: usize) {
        if tree.shape.is_leaf(node) {
            for &id in &tree.indices[tree.shape.leaf_range(node)] {
                let d_sq = T::squared_distance(self.query, tree.point(id));
                if d_sq < self.worst() {
                    self.insert(id, d_sq);
                }
            }
            return;
        }

        let dim = tree.split_dims[node];
        let delta = self.query[dim] - tree.split_values[node];
        let (near, far) = if delta < T::zero() {
            (2 * node, 2 * node + 1)
        } else {
            (2 * node + 1, 2 * node)
        };

        self.visit(tree, near);

        // The far subtree can only compete if the hyperplane itself is
        // closer than the current worst candidate.
        if delta * delta < self.worst() {
            self.visit(tree, far);
        }
    }

    /// The current k-th best squared distance.
    #[inline]
    fn worst(&self) -> T {
        self.best_sq[self.best_sq.len() - 1]
    }

    /// Insert a candidate known to beat the current worst, shifting the
    /// tail down one slot. Equal distances keep earlier entries first.
    fn insert(&mut self, id: usize, d_sq: T) {
        let mut pos = self.best_sq.len() - 1;
        while pos > 0 && self.best_sq[pos - 1] > d_sq {
            self.best_sq[pos] = self.best_sq[pos - 1];
            self.best_ids[pos] = self.best_ids[pos - 1];
            pos -= 1;
        }
        self.best_sq[pos] = d_sq;
        self.best_ids[pos] = id;
    }
}
