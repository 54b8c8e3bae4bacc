//! Forward kinematics for two-link planar arms and elementary 3D rotation matrices.
//!
//! The crate contains two independent, side-effect-free computations:
//!
//! - [`rotation::RotationMatrixBuilder`] builds the 3x3 rotation matrix about the x, y or z
//!   axis for an angle given in degrees.
//! - [`planar_chain::PlanarChainSolver`] computes the positions of the elbow and the end
//!   effector of a two-link planar arm from its link lengths and joint angles.
//!
//! Both validate their inputs at the boundary (finite angles, known axis, non-negative link
//! lengths) and report failures through [`kinematics_error::KinematicsError`] before doing any
//! trigonometry. Angles are accepted in degrees and converted to radians exactly once.
//!
//! Nothing in the library draws, reads input or prints. A display layer calls the solvers once
//! per frame and can use [`format`] to turn the results into text.
//!
//! # Features
//!
//! - `allow_filesystem`: read chain configuration from YAML files.
//! - `parallel`: solve batches of configurations on the rayon thread pool.
//! - `cli`: the `rs-planar-fk` command line tool.
//!
//! ## Examples
//!
//! - **rotation_matrix.rs**: Building and printing elementary rotations.
//! - **planar_arm.rs**: Sweeping a two-link arm through a series of frames.

pub mod angle;
pub mod kinematics_error;

pub mod utils;
pub mod kinematic_traits;

pub mod parameters;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

pub mod rotation;

pub mod planar_chain;

pub mod format;

#[cfg(test)]
mod tests;
