//! Supports reading chain configuration from YAML file (optional)

use std::path::Path;
use serde::Deserialize;

use crate::kinematic_traits::ReferencePoint;
use crate::parameter_error::ParameterError;
use crate::parameters::{ChainConfig, LinkChainParameters};

#[derive(Deserialize)]
struct ChainSection {
    /// Optional here so that a missing length is reported as a missing field
    #[serde(default)]
    pub l1: Option<f64>,
    #[serde(default)]
    pub l2: Option<f64>,
    #[serde(default)]
    pub theta1: f64,
    #[serde(default)]
    pub theta2: f64,
}

#[derive(Deserialize)]
struct Root {
    #[serde(default)]
    pub planar_chain: Option<ChainSection>,
    /// [x, y]; the origin if absent
    #[serde(default)]
    pub reference: Option<[f64; 2]>,
}

impl ChainConfig {
    /// Read the chain configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// planar_chain:
    ///   l1: 150
    ///   l2: 100
    ///   theta1: 30
    ///   theta2: 30
    /// reference: [300, 300]
    /// ```
    /// Joint angles are in degrees and default to 0; the reference point defaults to the origin.
    /// Both integer and real values are accepted.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as [`ChainConfig::from_yaml_file`], reading from a string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let root: Root = serde_saphyr::from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;

        let chain = root
            .planar_chain
            .ok_or_else(|| ParameterError::MissingField("planar_chain".to_string()))?;

        let parameters = LinkChainParameters {
            l1: chain.l1.ok_or_else(|| ParameterError::MissingField("l1".to_string()))?,
            l2: chain.l2.ok_or_else(|| ParameterError::MissingField("l2".to_string()))?,
            theta1: chain.theta1,
            theta2: chain.theta2,
        };
        parameters.validate()?;

        let reference = root
            .reference
            .map(|[x, y]| ReferencePoint::new(x, y))
            .unwrap_or_default();
        reference.validate()?;

        Ok(ChainConfig { parameters, reference })
    }
}
