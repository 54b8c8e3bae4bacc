//! Text rendering of solver output for display layers.
//!
//! Nothing here prints; every function returns a `String` and leaves the numbers untouched.
//! The matrix layout is what consumers of the rotation tool parse, so keep it stable:
//!
//! ```text
//! R_x(30.0°) =
//! [     1.0000      0.0000      0.0000 ]
//! [     0.0000      0.8660     -0.5000 ]
//! [     0.0000      0.5000      0.8660 ]
//! ```

use crate::kinematic_traits::{EndEffectorPose, ReferencePoint};
use crate::rotation::{Axis, RotationMatrix};

/// Field width and number of decimals for each matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixFormat {
    pub width: usize,
    pub precision: usize,
}

impl Default for MatrixFormat {
    fn default() -> Self {
        MatrixFormat { width: 10, precision: 4 }
    }
}

/// Label such as `R_z(-12.5°)`. The angle is printed in its shortest exact form, always
/// with a fractional part.
pub fn rotation_label(axis: Axis, angle_degrees: f64) -> String {
    format!("R_{}({:?}°)", axis.letter(), angle_degrees)
}

/// Renders `label =` followed by one bracketed row per line.
pub fn format_matrix(matrix: &RotationMatrix, label: &str, format: MatrixFormat) -> String {
    let mut text = format!("{} =\n", label);
    for row in matrix.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|v| format!("{:>width$.precision$}", v, width = format.width, precision = format.precision))
            .collect();
        text.push_str(&format!("[ {} ]\n", cells.join("  ")));
    }
    text
}

/// End effector relative to the reference point, with y flipped so that up is positive.
pub fn end_effector_offset(pose: &EndEffectorPose, reference: ReferencePoint) -> (f64, f64) {
    let ee = pose.end_effector();
    // 0.0 - d rather than -d so a level arm reports 0.0, not -0.0
    (ee.x - reference.x, 0.0 - (ee.y - reference.y))
}

/// One line status text for the arm viewer overlay.
pub fn overlay_text(pose: &EndEffectorPose, reference: ReferencePoint, theta1: f64, theta2: f64) -> String {
    let (x, y) = end_effector_offset(pose, reference);
    format!("EE: x={:.1}, y={:.1} | theta1={} deg, theta2={} deg", x, y, theta1, theta2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematic_traits::PlanarKinematics;
    use crate::parameters::LinkChainParameters;
    use crate::planar_chain::PlanarChainSolver;
    use crate::rotation::RotationMatrixBuilder;

    #[test]
    fn test_rotation_label() {
        assert_eq!(rotation_label(Axis::X, 30.0), "R_x(30.0°)");
        assert_eq!(rotation_label(Axis::Z, -12.5), "R_z(-12.5°)");
    }

    #[test]
    fn test_format_matrix_default_layout() {
        let r = RotationMatrixBuilder::build(Axis::X, 30.0).unwrap();
        let text = format_matrix(&r, &rotation_label(Axis::X, 30.0), MatrixFormat::default());
        assert_eq!(
            text,
            "R_x(30.0°) =\n\
             [     1.0000      0.0000      0.0000 ]\n\
             [     0.0000      0.8660     -0.5000 ]\n\
             [     0.0000      0.5000      0.8660 ]\n"
        );
    }

    #[test]
    fn test_format_matrix_custom_width() {
        let text = format_matrix(&RotationMatrix::identity(), "I", MatrixFormat { width: 4, precision: 1 });
        assert_eq!(text, "I =\n[  1.0   0.0   0.0 ]\n[  0.0   1.0   0.0 ]\n[  0.0   0.0   1.0 ]\n");
    }

    #[test]
    fn test_format_does_not_alter_values() {
        let r = RotationMatrixBuilder::build(Axis::Y, 17.0).unwrap();
        let before = r;
        let _ = format_matrix(&r, "R", MatrixFormat { width: 3, precision: 0 });
        assert_eq!(r, before);
    }

    #[test]
    fn test_overlay_text() {
        let reference = ReferencePoint::new(300.0, 300.0);
        let params = LinkChainParameters { l1: 150.0, l2: 100.0, theta1: 0.0, theta2: 0.0 };
        let pose = PlanarChainSolver.solve(&params, reference).unwrap();
        assert_eq!(end_effector_offset(&pose, reference), (250.0, 0.0));
        assert_eq!(
            overlay_text(&pose, reference, 0.0, 0.0),
            "EE: x=250.0, y=0.0 | theta1=0 deg, theta2=0 deg"
        );
    }

    #[test]
    fn test_overlay_y_points_up() {
        let reference = ReferencePoint::new(300.0, 300.0);
        let params = LinkChainParameters { l1: 150.0, l2: 100.0, theta1: 90.0, theta2: 0.0 };
        let pose = PlanarChainSolver.solve(&params, reference).unwrap();
        assert_eq!(
            overlay_text(&pose, reference, 90.0, 0.0),
            "EE: x=0.0, y=250.0 | theta1=90 deg, theta2=0 deg"
        );
    }
}
