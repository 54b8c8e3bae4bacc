//! Elementary rotation matrices about a principal axis.
//!
//! The matrices use the right-handed convention:
//!
//! ```text
//! R_x = [1 0 0; 0 c -s; 0 s c]
//! R_y = [c 0 s; 0 1 0; -s 0 c]
//! R_z = [c -s 0; s c 0; 0 0 1]
//! ```
//!
//! # Example
//!
//! ```
//! use nalgebra::Vector3;
//! use rs_planar_fk::rotation::{Axis, RotationMatrixBuilder};
//!
//! let r = RotationMatrixBuilder::build(Axis::Z, 90.0).unwrap();
//! let p = r.transform(&Vector3::new(1.0, 0.0, 0.0));
//! assert!((p - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
//! ```

use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use tracing::debug;

use crate::angle::Degrees;
use crate::kinematics_error::KinematicsError;

/// Principal coordinate axis to rotate about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lower case letter used in labels such as `R_x`.
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// Unit vector along this axis.
    pub fn unit_vector(self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

impl FromStr for Axis {
    type Err = KinematicsError;

    /// Accepts `x`, `y` or `z` in any case, ignoring surrounding whitespace.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        match token.to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(KinematicsError::InvalidAxis(token.to_string())),
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = KinematicsError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter.to_ascii_lowercase() {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            'z' => Ok(Axis::Z),
            _ => Err(KinematicsError::InvalidAxis(letter.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Immutable 3x3 orthonormal matrix, row-major when accessed by `(row, col)`.
///
/// Instances are only produced by [`RotationMatrixBuilder`], by composing other rotation
/// matrices or by transposing one, so determinant 1 and `transpose == inverse` hold
/// up to floating point error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    matrix: Matrix3<f64>,
}

impl RotationMatrix {
    pub fn identity() -> Self {
        RotationMatrix { matrix: Matrix3::identity() }
    }

    /// The underlying nalgebra matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Element at `row`, `col`. Panics if either index is outside 0..3.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.matrix[(row, col)]
    }

    pub fn row(&self, row: usize) -> [f64; 3] {
        [self.matrix[(row, 0)], self.matrix[(row, 1)], self.matrix[(row, 2)]]
    }

    pub fn rows(&self) -> [[f64; 3]; 3] {
        [self.row(0), self.row(1), self.row(2)]
    }

    /// Inverse rotation.
    pub fn transpose(&self) -> RotationMatrix {
        RotationMatrix { matrix: self.matrix.transpose() }
    }

    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Rotates the vector `v`.
    pub fn transform(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * v
    }

    /// Matrix product `self * other`: applies `other` first, then `self`.
    pub fn compose(&self, other: &RotationMatrix) -> RotationMatrix {
        RotationMatrix { matrix: self.matrix * other.matrix }
    }

    /// Checks `R * Rᵀ = I` and `det R = 1` with the given absolute tolerance.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let residual = self.matrix * self.matrix.transpose() - Matrix3::identity();
        residual.amax() <= tolerance && (self.determinant() - 1.0).abs() <= tolerance
    }

    pub fn to_rotation3(&self) -> Rotation3<f64> {
        Rotation3::from_matrix_unchecked(self.matrix)
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        RotationMatrix::identity()
    }
}

impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        self.compose(&rhs)
    }
}

/// Builds elementary rotation matrices. Stateless, so it is safe to call from any thread.
pub struct RotationMatrixBuilder;

impl RotationMatrixBuilder {
    /// Rotation by `angle_degrees` about `axis`.
    ///
    /// Returns [`KinematicsError::InvalidAngle`] for NaN or infinite angles.
    pub fn build(axis: Axis, angle_degrees: f64) -> Result<RotationMatrix, KinematicsError> {
        let t = Degrees(angle_degrees).to_radians()?;
        let (s, c) = t.sin_cos();
        debug!(%axis, angle_degrees, "building elementary rotation");

        let matrix = match axis {
            Axis::X => Matrix3::new(
                1.0, 0.0, 0.0,
                0.0, c, -s,
                0.0, s, c,
            ),
            Axis::Y => Matrix3::new(
                c, 0.0, s,
                0.0, 1.0, 0.0,
                -s, 0.0, c,
            ),
            Axis::Z => Matrix3::new(
                c, -s, 0.0,
                s, c, 0.0,
                0.0, 0.0, 1.0,
            ),
        };
        Ok(RotationMatrix { matrix })
    }

    /// Same as [`RotationMatrixBuilder::build`] but parses the axis token first, so an
    /// unknown axis is reported as [`KinematicsError::InvalidAxis`] without building anything.
    pub fn build_from_token(axis: &str, angle_degrees: f64) -> Result<RotationMatrix, KinematicsError> {
        let axis: Axis = axis.parse()?;
        Self::build(axis, angle_degrees)
    }
}
