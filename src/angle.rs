//! Degrees at the boundary, radians inside.
//!
//! Callers supply angles in degrees. The conversion to radians happens exactly once, in
//! [`Degrees::to_radians`], which also rejects non-finite values before any trigonometric
//! function sees them.

use crate::kinematics_error::KinematicsError;

/// Angle as supplied by the caller, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Validated conversion `degrees × π / 180`. NaN and infinities give
    /// [`KinematicsError::InvalidAngle`].
    pub fn to_radians(self) -> Result<f64, KinematicsError> {
        if !self.0.is_finite() {
            return Err(KinematicsError::InvalidAngle(self.0));
        }
        // Scale by the folded π/180; multiplying by π first overflows near f64::MAX
        Ok(self.0.to_radians())
    }
}

/// Wraps a finite angle in degrees into [0, 360). Meant for slider-driven callers;
/// the solvers themselves accept any finite value.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_to_radians_matches_formula() {
        let close = |deg: f64, expected: f64| {
            let rad = Degrees(deg).to_radians().unwrap();
            assert!((rad - expected).abs() < 1e-12, "{deg} deg gave {rad}, expected {expected}");
        };
        close(180.0, PI);
        close(-90.0, -PI / 2.0);
        close(0.0, 0.0);
        // Unbounded domain, no wrapping
        close(720.0, 4.0 * PI);
    }

    #[test]
    fn test_largest_finite_angles_stay_finite() {
        for deg in [f64::MAX, -f64::MAX, 1e308] {
            let rad = Degrees(deg).to_radians().unwrap();
            assert!(rad.is_finite(), "{deg} deg gave {rad}");
            assert!(rad.sin().is_finite() && rad.cos().is_finite());
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(Degrees(f64::NAN).to_radians(), Err(KinematicsError::InvalidAngle(v)) if v.is_nan()));
        assert_eq!(
            Degrees(f64::INFINITY).to_radians(),
            Err(KinematicsError::InvalidAngle(f64::INFINITY))
        );
        assert_eq!(
            Degrees(f64::NEG_INFINITY).to_radians(),
            Err(KinematicsError::InvalidAngle(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }
}
