use nalgebra::Matrix3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kinematic_traits::Position;
use crate::rotation::RotationMatrix;

/// Fixed seed so that failures are reproducible.
pub(crate) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_f00d)
}

/// Random finite angles in degrees, well outside a single turn.
pub(crate) fn random_angles(rng: &mut StdRng, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.random_range(-1080.0..1080.0)).collect()
}

pub(crate) fn assert_matrix_close(actual: &RotationMatrix, expected: &Matrix3<f64>, tolerance: f64) {
    let error = (actual.matrix() - expected).amax();
    assert!(
        error <= tolerance,
        "matrices differ by {error}:\n{}\n{}",
        actual.matrix(),
        expected
    );
}

pub(crate) fn assert_position_close(actual: Position, expected: Position, tolerance: f64) {
    let distance = nalgebra::distance(&actual, &expected);
    assert!(
        distance <= tolerance,
        "positions differ by {distance}: ({}, {}) vs ({}, {})",
        actual.x, actual.y, expected.x, expected.y
    );
}
