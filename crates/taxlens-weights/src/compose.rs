//! Composite weight: a left fold of matrix products over the layers.
//!
//! - A mapping layer acts as the identity (it never changes the product).
//! - A matrix whose row count differs from the accumulator's column count
//!   stops the fold; the composite becomes the identity placeholder.
//! - No matrix at all also yields the identity placeholder.
//!
//! The result is always a defined matrix.

use ndarray::Array2;
use taxlens_core::constants::IDENTITY_PLACEHOLDER_DIM;
use taxlens_core::errors::WeightError;

use crate::artifact::{WeightData, WeightLayer};

/// Identity matrix substituted when composition cannot proceed.
pub fn identity_placeholder() -> Array2<f32> {
    Array2::eye(IDENTITY_PLACEHOLDER_DIM)
}

/// Fold the layers into a composite.
///
/// Returns the composite and, if composition degraded, the shape mismatch
/// that caused it.
pub fn compose(layers: &[WeightLayer]) -> (Array2<f32>, Option<WeightError>) {
    let mut acc: Option<Array2<f32>> = None;

    for layer in layers {
        let next = match &layer.data {
            WeightData::Matrix(m) => m,
            WeightData::Mapping(_) => continue,
        };
        acc = Some(match acc {
            None => next.clone(),
            Some(current) if current.ncols() == next.nrows() => current.dot(next),
            Some(current) => {
                let mismatch = WeightError::ShapeMismatch {
                    left_rows: current.nrows(),
                    left_cols: current.ncols(),
                    right_rows: next.nrows(),
                    right_cols: next.ncols(),
                };
                return (identity_placeholder(), Some(mismatch));
            }
        });
    }

    (acc.unwrap_or_else(identity_placeholder), None)
}
