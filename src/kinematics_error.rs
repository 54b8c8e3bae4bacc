//! Input validation errors shared by the rotation builder and the planar chain solver.
//!
//! All of them are detected before any trigonometry is evaluated, so a caller that
//! receives an error never gets a partially computed matrix or pose.

/// Reason why the inputs of a kinematic computation were rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Axis token other than x, y or z (case-insensitive). Carries the offending token.
    InvalidAxis(String),
    /// NaN or infinite angle.
    InvalidAngle(f64),
    /// Negative or non-finite link length.
    InvalidLinkLength(f64),
    /// NaN or infinite reference point coordinate.
    InvalidReference(f64),
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::InvalidAxis(ref token) =>
                write!(f, "Axis must be x, y, or z (got '{}')", token),
            KinematicsError::InvalidAngle(value) =>
                write!(f, "Angle must be a finite number (got {})", value),
            KinematicsError::InvalidLinkLength(value) =>
                write!(f, "Link length must be finite and non-negative (got {})", value),
            KinematicsError::InvalidReference(value) =>
                write!(f, "Reference point coordinates must be finite (got {})", value),
        }
    }
}

impl std::error::Error for KinematicsError {}
