//----------------------------------------
// Crate error type
//----------------------------------------
use thiserror::Error;

use crate::configuration::ConfigurationError;
use crate::math::distribution::distributionparameters::DistributionError;
use crate::math::integration::simpson::QuadratureError;
use crate::math::rootfinding::secant::RootFindingError;

#[derive(Error, Debug)]
pub enum NumericsError {
    #[error("while evaluating normal distribution: {0}")]
    Distribution(#[from] DistributionError),
    #[error("while integrating: {0}")]
    Quadrature(#[from] QuadratureError),
    #[error("while finding root: {0}")]
    RootFinding(#[from] RootFindingError),
    #[error("while loading configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::distribution::gaussian::gaussian_density;

    #[test]
    fn distribution_error_message() {
        let err: NumericsError = gaussian_density(0.0, 0.0, -1.0).unwrap_err().into();
        assert_eq!(
            format!("{}", err),
            "while evaluating normal distribution: standard deviation must be positive; got -1"
        );
    }

    #[test]
    fn quadrature_error_message() {
        let err = NumericsError::from(QuadratureError::ZeroPointCount);
        assert_eq!(
            err.to_string(),
            "while integrating: Simpson rule needs at least one point; got 0"
        );
    }
}
