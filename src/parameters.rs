//! Defines the two-link chain parameter data structure

use crate::kinematic_traits::ReferencePoint;
use crate::kinematics_error::KinematicsError;
use crate::utils::is_valid;

/// Parameters of a two-link planar chain. These are plain values passed into every solve,
/// so chains with different geometry can be solved side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkChainParameters {
    /// Length of link 1 (base to joint 1). Must be finite and non-negative.
    pub l1: f64,

    /// Length of link 2 (joint 1 to end effector). Must be finite and non-negative.
    pub l2: f64,

    /// Angle of link 1 in degrees, measured from the x axis of the reference frame.
    pub theta1: f64,

    /// Angle of link 2 in degrees, relative to the direction of link 1.
    pub theta2: f64,
}

impl LinkChainParameters {
    /// All zero: both links collapsed onto the reference point.
    pub fn new() -> Self {
        LinkChainParameters {
            l1: 0.0,
            l2: 0.0,
            theta1: 0.0,
            theta2: 0.0,
        }
    }

    /// 150 px and 100 px links starting at 30° and 30°, the geometry of the interactive
    /// arm viewer.
    pub fn two_link_demo() -> Self {
        LinkChainParameters {
            l1: 150.0,
            l2: 100.0,
            theta1: 30.0,
            theta2: 30.0,
        }
    }

    /// Same geometry with different joint angles (degrees).
    pub fn with_angles(&self, theta1: f64, theta2: f64) -> Self {
        LinkChainParameters { theta1, theta2, ..*self }
    }

    /// Rejects negative or non-finite link lengths and non-finite angles.
    pub fn validate(&self) -> Result<(), KinematicsError> {
        for length in [self.l1, self.l2] {
            if !length.is_finite() || length < 0.0 {
                return Err(KinematicsError::InvalidLinkLength(length));
            }
        }
        for angle in [self.theta1, self.theta2] {
            if !is_valid(&[angle]) {
                return Err(KinematicsError::InvalidAngle(angle));
            }
        }
        Ok(())
    }
}

impl Default for LinkChainParameters {
    fn default() -> Self {
        Self::new()
    }
}

/// Chain parameters together with the reference point they are drawn from, as stored in
/// configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChainConfig {
    pub parameters: LinkChainParameters,
    pub reference: ReferencePoint,
}

impl ChainConfig {
    /// Convert to string yaml representation (quick viewing, saving).
    pub fn to_yaml(&self) -> String {
        format!(
            "planar_chain:\n  \
              l1: {}\n  \
              l2: {}\n  \
              theta1: {}\n  \
              theta2: {}\n\
            reference: [{}, {}]\n",
            self.parameters.l1,
            self.parameters.l2,
            self.parameters.theta1,
            self.parameters.theta2,
            self.reference.x,
            self.reference.y
        )
    }
}
