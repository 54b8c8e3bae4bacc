use rs_planar_fk::angle::normalize_degrees;
use rs_planar_fk::format::overlay_text;
use rs_planar_fk::kinematic_traits::{PlanarKinematics, ReferencePoint};
use rs_planar_fk::parameters::LinkChainParameters;
use rs_planar_fk::planar_chain::PlanarChainSolver;

/// Drives a two-link arm the way a slider UI would: read the current angles, solve one frame,
/// hand the points to the renderer (printed here instead of drawn).
fn main() {
    let arm = LinkChainParameters::two_link_demo();
    let reference = ReferencePoint::center_of(600, 600);

    for frame in 0..12 {
        let theta1 = normalize_degrees(arm.theta1 + 30.0 * frame as f64);
        let theta2 = normalize_degrees(arm.theta2 - 15.0 * frame as f64);
        let params = arm.with_angles(theta1, theta2);

        let pose = PlanarChainSolver.solve(&params, reference).unwrap();
        let (j1, j2) = (pose.joint1(), pose.joint2());
        println!(
            "frame {:2}: base ({}, {}) -> joint1 ({:.0}, {:.0}) -> joint2 ({:.0}, {:.0})",
            frame, reference.x, reference.y, j1.x, j1.y, j2.x, j2.y
        );
        println!("          {}", overlay_text(&pose, reference, theta1, theta2));
    }

    // The same sweep solved in one go
    let batch: Vec<LinkChainParameters> = (0..360).map(|d| arm.with_angles(d as f64, 0.0)).collect();
    let reached = PlanarChainSolver
        .solve_batch(&batch, reference)
        .into_iter()
        .filter_map(Result::ok)
        .count();
    println!("Solved {} of {} configurations", reached, batch.len());
}
