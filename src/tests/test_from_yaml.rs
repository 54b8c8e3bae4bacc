use std::fs;
use std::path::PathBuf;

use crate::kinematic_traits::{PlanarKinematics, Position, ReferencePoint};
use crate::parameter_error::ParameterError;
use crate::parameters::{ChainConfig, LinkChainParameters};
use crate::planar_chain::PlanarChainSolver;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rs_planar_fk_{}_{}", std::process::id(), name));
    fs::write(&path, contents).expect("Failed to write test configuration");
    path
}

#[test]
fn test_read_viewer_configuration() {
    let path = scratch_file(
        "viewer.yaml",
        "# two link arm viewer\n\
         planar_chain:\n  \
           l1: 150.0\n  \
           l2: 100\n  \
           theta1: 0\n  \
           theta2: 0\n\
         reference: [300, 300]\n",
    );
    let config = ChainConfig::from_yaml_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    let pose = PlanarChainSolver.solve(&config.parameters, config.reference).unwrap();
    assert_eq!(pose.joint1(), Position::new(450.0, 300.0));
    assert_eq!(pose.joint2(), Position::new(550.0, 300.0));
}

#[test]
fn test_yaml_round_trip() {
    let config = ChainConfig {
        parameters: LinkChainParameters { l1: 0.25, l2: 1.5, theta1: -12.75, theta2: 359.0 },
        reference: ReferencePoint::new(-3.0, 4.5),
    };
    let path = scratch_file("round_trip.yaml", &config.to_yaml());
    let read = ChainConfig::from_yaml_file(&path).unwrap();
    let _ = fs::remove_file(&path);
    assert_eq!(read, config);
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("rs_planar_fk_does_not_exist.yaml");
    assert!(matches!(ChainConfig::from_yaml_file(&path), Err(ParameterError::IoError(_))));
}
