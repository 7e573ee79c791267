//! Input validation for tree construction and queries.
//!
//! ## Purpose
//!
//! This module checks every public input before it reaches the core.
//! Internal routines assume validated inputs; every failure surfaced to
//! the caller originates here.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not inspect coordinate values; NaN or infinite
//!   coordinates are the caller's contract.
//! * This module does not emit the high-dimension advisory (handled by
//!   the builder).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KdTreeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for construction and query inputs.
///
/// Provides static methods returning `Result<(), KdTreeError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate the coordinate buffer and parameters passed to `build`.
    pub fn validate_build<T: Float>(
        coords: &[T],
        dims: usize,
        leaf_size: usize,
    ) -> Result<(), KdTreeError> {
        // Check 1: Non-empty input
        if coords.is_empty() {
            return Err(KdTreeError::EmptyInput);
        }

        // Check 2: Usable leaf capacity
        if leaf_size == 0 {
            return Err(KdTreeError::InvalidLeafSize(leaf_size));
        }

        // Check 3: Buffer length consistent with the dimension
        if dims == 0 || coords.len() % dims != 0 {
            return Err(KdTreeError::DimensionMismatch {
                expected: dims,
                got: coords.len(),
            });
        }

        Ok(())
    }

    /// Validate a query vector against the tree's dimension.
    pub fn validate_query<T: Float>(query: &[T], dims: usize) -> Result<(), KdTreeError> {
        if query.len() != dims {
            return Err(KdTreeError::DimensionMismatch {
                expected: dims,
                got: query.len(),
            });
        }
        Ok(())
    }

    /// Validate the neighbour count for a kNN query.
    pub fn validate_k(k: usize, n: usize) -> Result<(), KdTreeError> {
        if k == 0 || k > n {
            return Err(KdTreeError::InvalidK { k, n });
        }
        Ok(())
    }

    /// Validate the radius for a ball query.
    ///
    /// Rejects NaN along with negative values; an infinite radius is
    /// allowed and matches every point.
    pub fn validate_radius<T: Float>(radius: T) -> Result<(), KdTreeError> {
        if radius.is_nan() || radius < T::zero() {
            return Err(KdTreeError::InvalidRadius(
                radius.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}
