use nalgebra::Vector3;
use rs_planar_fk::format::{MatrixFormat, format_matrix, rotation_label};
use rs_planar_fk::rotation::{Axis, RotationMatrixBuilder};

/// Elementary rotations about each axis, and what they do to a point.
fn main() {
    let angle = 30.0;
    for axis in Axis::ALL {
        let r = RotationMatrixBuilder::build(axis, angle).unwrap();
        print!("{}", format_matrix(&r, &rotation_label(axis, angle), MatrixFormat::default()));
    }

    let r = RotationMatrixBuilder::build(Axis::Z, 90.0).unwrap();
    let p = r.transform(&Vector3::new(1.0, 0.0, 0.0));
    println!("R_z(90°) * (1, 0, 0) = ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);

    // Composition: x first, then z
    let composed = RotationMatrixBuilder::build(Axis::Z, 45.0).unwrap()
        * RotationMatrixBuilder::build(Axis::X, 45.0).unwrap();
    print!("{}", format_matrix(&composed, "R_z(45°) R_x(45°)", MatrixFormat { width: 8, precision: 3 }));
    println!("det = {:.6}", composed.determinant());

    match RotationMatrixBuilder::build_from_token("w", angle) {
        Ok(_) => println!("unexpected matrix"),
        Err(e) => println!("Rejected: {}", e),
    }
}
