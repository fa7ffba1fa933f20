use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::math::distribution::distributionparameters::{
    DistributionError,
    DistributionParameters
};
use crate::math::integration::simpson::{
    QuadratureError,
    SimpsonRule,
    DEFAULT_POINT_COUNT
};
use crate::math::rootfinding::secant::{
    SecantSettings,
    DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE
};

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<QuadratureError> for ConfigurationError {
    fn from(error: QuadratureError) -> Self {
        ConfigurationError::InvalidValue { field: "quadrature.point_count", reason: error.to_string() }
    }
}

impl From<DistributionError> for ConfigurationError {
    fn from(error: DistributionError) -> Self {
        ConfigurationError::InvalidValue { field: "distribution", reason: error.to_string() }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct QuadratureSection {
    pub point_count: usize
}

impl Default for QuadratureSection {
    fn default() -> Self {
        QuadratureSection { point_count: DEFAULT_POINT_COUNT }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SecantSection {
    pub max_iterations: usize,
    pub tolerance: f64
}

impl Default for SecantSection {
    fn default() -> Self {
        SecantSection { max_iterations: DEFAULT_MAX_ITERATIONS, tolerance: DEFAULT_TOLERANCE }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DistributionSection {
    pub mean: f64,
    pub standard_deviation: f64
}

impl Default for DistributionSection {
    fn default() -> Self {
        DistributionSection { mean: 0.0, standard_deviation: 1.0 }
    }
}

/// Driver settings read from JSON. Every section and field is optional and
/// falls back to the library defaults.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    quadrature: QuadratureSection,
    secant: SecantSection,
    distribution: DistributionSection
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let config: Configuration = serde_json::from_reader(reader)?;
        config.validate()?;
        info!("loaded configuration from {}", file_path.display());
        debug!("{:?}", config);
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the numerical routines cannot run with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.simpson_rule()?;
        self.distribution_parameters()?;
        let tolerance = self.secant.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigurationError::InvalidValue {
                field: "secant.tolerance",
                reason: format!("must be finite and non-negative; got {}", tolerance),
            });
        }
        Ok(())
    }

    pub fn quadrature(&self) -> &QuadratureSection {
        &self.quadrature
    }

    pub fn secant(&self) -> &SecantSection {
        &self.secant
    }

    pub fn distribution(&self) -> &DistributionSection {
        &self.distribution
    }

    pub fn simpson_rule(&self) -> Result<SimpsonRule, ConfigurationError> {
        Ok(SimpsonRule::new(self.quadrature.point_count)?)
    }

    pub fn secant_settings(&self) -> SecantSettings {
        SecantSettings::new(self.secant.max_iterations, self.secant.tolerance)
    }

    pub fn distribution_parameters(&self) -> Result<DistributionParameters, ConfigurationError> {
        Ok(DistributionParameters::new(self.distribution.mean, self.distribution.standard_deviation)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Configuration::from_json_str("{}").unwrap();
        assert_eq!(config, Configuration::new());
        assert_eq!(config.simpson_rule().unwrap().point_count(), 20);
        assert_eq!(config.secant_settings(), SecantSettings::default());
        assert_eq!(config.distribution_parameters().unwrap(), DistributionParameters::standard());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Configuration::from_json_str(r#"{ "secant": { "tolerance": 1e-8 } }"#).unwrap();
        assert_eq!(config.secant().max_iterations, 10);
        assert_eq!(config.secant().tolerance, 1e-8);
        assert_eq!(config.quadrature().point_count, 20);
    }

    #[test]
    fn full_document() {
        let json = r#"{
            "quadrature": { "point_count": 100 },
            "secant": { "max_iterations": 15, "tolerance": 1e-8 },
            "distribution": { "mean": 10.0, "standard_deviation": 2.0 }
        }"#;
        let config = Configuration::from_json_str(json).unwrap();
        assert_eq!(config.simpson_rule().unwrap().panel_count(), 200);
        assert_eq!(config.secant_settings(), SecantSettings::new(15, 1e-8));
        assert_eq!(config.distribution().mean, 10.0);
    }

    #[test]
    fn zero_point_count_rejected() {
        let err = Configuration::from_json_str(r#"{ "quadrature": { "point_count": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { field: "quadrature.point_count", .. }));
    }

    #[test]
    fn non_positive_standard_deviation_rejected() {
        let err = Configuration::from_json_str(r#"{ "distribution": { "standard_deviation": 0.0 } }"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for 'distribution': standard deviation must be positive; got 0"
        );
    }

    #[test]
    fn negative_tolerance_rejected() {
        let err = Configuration::from_json_str(r#"{ "secant": { "tolerance": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { field: "secant.tolerance", .. }));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let err = Configuration::from_json_str(r#"{ "quadrature": { "points": 10 } }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::JsonParseError(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Configuration::from_reader("/nonexistent/gausssecant.json").unwrap_err();
        assert!(matches!(err, ConfigurationError::IOError(_)));
    }
}
