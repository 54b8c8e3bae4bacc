//! Helper functions

use crate::kinematic_traits::Position;

/// Checks if all values are finite
pub fn is_valid(values: &[f64]) -> bool {
    values.iter().all(|&v| v.is_finite())
}

/// True if the Euclidean distance between `a` and `b` does not exceed `tolerance`.
pub fn points_close(a: &Position, b: &Position, tolerance: f64) -> bool {
    nalgebra::distance(a, b) <= tolerance
}
