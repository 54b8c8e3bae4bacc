//! Value types passed in and out of the planar chain solver, and the solver trait.

use nalgebra::{Isometry2, Point2};

use crate::kinematics_error::KinematicsError;
use crate::parameters::LinkChainParameters;

/// 2D position, in the same units and frame as the reference point.
pub type Position = Point2<f64>;

/// Rigid 2D transform (rotation followed by translation) of a link frame.
pub type LinkFrame = Isometry2<f64>;

/// Origin of the chain (the base joint). Owned by the caller and passed by value,
/// the solver never keeps or changes it. Both coordinates must be finite.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReferencePoint {
    pub x: f64,
    pub y: f64,
}

impl ReferencePoint {
    pub fn new(x: f64, y: f64) -> Self {
        ReferencePoint { x, y }
    }

    /// Center of a drawing surface of the given pixel size (integer halves, as pixel grids use).
    pub fn center_of(width: u32, height: u32) -> Self {
        ReferencePoint {
            x: (width / 2) as f64,
            y: (height / 2) as f64,
        }
    }

    pub fn as_position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Rejects NaN or infinite coordinates.
    pub fn validate(&self) -> Result<(), KinematicsError> {
        match [self.x, self.y].into_iter().find(|v| !v.is_finite()) {
            Some(bad) => Err(KinematicsError::InvalidReference(bad)),
            None => Ok(()),
        }
    }
}

/// Result of forward kinematics for the two-link chain. A fresh value is returned by every
/// solve; it has no setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndEffectorPose {
    joint1: Position,
    joint2: Position,
}

impl EndEffectorPose {
    pub(crate) fn new(joint1: Position, joint2: Position) -> Self {
        EndEffectorPose { joint1, joint2 }
    }

    /// Position of joint 1 (the elbow, end of link 1).
    pub fn joint1(&self) -> Position {
        self.joint1
    }

    /// Position of joint 2 (the end effector, tip of link 2).
    pub fn joint2(&self) -> Position {
        self.joint2
    }

    /// Alias of [`EndEffectorPose::joint2`].
    pub fn end_effector(&self) -> Position {
        self.joint2
    }
}

pub trait PlanarKinematics {
    /// Computes joint positions for the given chain, anchored at `reference`.
    fn solve(&self, params: &LinkChainParameters, reference: ReferencePoint)
             -> Result<EndEffectorPose, KinematicsError>;

    /// Solves every configuration independently, keeping input order. With the `parallel`
    /// feature the configurations are distributed over the rayon thread pool.
    fn solve_batch(&self, params: &[LinkChainParameters], reference: ReferencePoint)
                   -> Vec<Result<EndEffectorPose, KinematicsError>>
    where
        Self: Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            params.par_iter().map(|p| self.solve(p, reference)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            params.iter().map(|p| self.solve(p, reference)).collect()
        }
    }
}
