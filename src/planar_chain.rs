//! Forward kinematics of a two-link planar arm.
//!
//! Positions are reported in a screen-style frame where y grows downward, the way image
//! coordinates work. A positive angle therefore moves a link up the screen (towards smaller y):
//!
//! ```text
//! x1 = ref.x + L1 cos(θ1)            y1 = ref.y − L1 sin(θ1)
//! x2 = x1 + L2 cos(θ1 + θ2)          y2 = y1 − L2 sin(θ1 + θ2)
//! ```
//!
//! θ2 is relative to link 1, so rotating joint 1 carries link 2 with it.
//!
//! ```
//! use rs_planar_fk::kinematic_traits::{PlanarKinematics, ReferencePoint};
//! use rs_planar_fk::parameters::LinkChainParameters;
//! use rs_planar_fk::planar_chain::PlanarChainSolver;
//!
//! let params = LinkChainParameters { l1: 150.0, l2: 100.0, theta1: 0.0, theta2: 0.0 };
//! let pose = PlanarChainSolver.solve(&params, ReferencePoint::new(300.0, 300.0)).unwrap();
//! assert_eq!((pose.joint2().x, pose.joint2().y), (550.0, 300.0));
//! ```

use nalgebra::Vector2;
use tracing::debug;

use crate::angle::Degrees;
use crate::kinematic_traits::{EndEffectorPose, LinkFrame, PlanarKinematics, Position, ReferencePoint};
use crate::kinematics_error::KinematicsError;
use crate::parameters::LinkChainParameters;

/// Stateless two-link solver. It holds no data, so one instance (or the unit value itself)
/// can serve any number of chains and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarChainSolver;

impl PlanarKinematics for PlanarChainSolver {
    fn solve(&self, params: &LinkChainParameters, reference: ReferencePoint)
             -> Result<EndEffectorPose, KinematicsError> {
        params.validate()?;
        reference.validate()?;
        let t1 = Degrees(params.theta1).to_radians()?;
        let t2 = Degrees(params.theta2).to_radians()?;

        let (s1, c1) = t1.sin_cos();
        let (s12, c12) = (t1 + t2).sin_cos();

        let x1 = reference.x + params.l1 * c1;
        let y1 = reference.y - params.l1 * s1;
        let x2 = x1 + params.l2 * c12;
        let y2 = y1 - params.l2 * s12;

        debug!(?params, ?reference, x2, y2, "solved planar chain");
        Ok(EndEffectorPose::new(Position::new(x1, y1), Position::new(x2, y2)))
    }
}

impl PlanarChainSolver {
    /// Link frames built by chaining rigid transforms: base rotated by θ1, then translated
    /// along link 1 and rotated by θ2, then translated along link 2.
    ///
    /// The frames are expressed in a math-style frame (y up) with the reference point at the
    /// origin. Use [`to_screen`] to place their origins in the solver's screen frame.
    pub fn link_frames(&self, params: &LinkChainParameters) -> Result<[LinkFrame; 3], KinematicsError> {
        params.validate()?;
        let t1 = Degrees(params.theta1).to_radians()?;
        let t2 = Degrees(params.theta2).to_radians()?;

        let base = LinkFrame::rotation(t1);
        let joint1 = base * LinkFrame::new(Vector2::new(params.l1, 0.0), t2);
        let end_effector = joint1 * LinkFrame::translation(params.l2, 0.0);
        Ok([base, joint1, end_effector])
    }
}

/// Origin of a math-style (y up) frame placed relative to `reference`, in the screen frame.
pub fn to_screen(reference: ReferencePoint, frame: &LinkFrame) -> Position {
    let offset = frame.translation.vector;
    Position::new(reference.x + offset.x, reference.y - offset.y)
}
