//! Error handling for chain configuration loading

use std::io;
use crate::kinematics_error::KinematicsError;

/// Unified error to report failures while reading chain configuration from YAML.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    MissingField(String),
    Kinematics(KinematicsError),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::MissingField(ref field) =>
                write!(f, "Missing Field: {}", field),
            ParameterError::Kinematics(ref err) =>
                write!(f, "Invalid chain parameters: {}", err),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            ParameterError::Kinematics(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}

impl From<KinematicsError> for ParameterError {
    fn from(err: KinematicsError) -> Self {
        ParameterError::Kinematics(err)
    }
}
