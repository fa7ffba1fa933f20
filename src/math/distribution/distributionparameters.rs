use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DistributionError {
    #[error("standard deviation must be positive; got {0}")]
    NonPositiveStandardDeviation(f64),
    #[error("distribution parameter '{name}' must be finite; got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

/// Location and scale of a Gaussian distribution.
///
/// Construction goes through [`DistributionParameters::new`], so a value of
/// this type always has a finite mean and a finite, strictly positive
/// standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawDistributionParameters")]
pub struct DistributionParameters {
    mean: f64,
    standard_deviation: f64,
}

#[derive(Deserialize)]
struct RawDistributionParameters {
    mean: f64,
    standard_deviation: f64,
}

impl DistributionParameters {
    pub fn new(mean: f64, standard_deviation: f64) -> Result<DistributionParameters, DistributionError> {
        if !mean.is_finite() {
            return Err(DistributionError::NonFiniteParameter { name: "mean", value: mean });
        }
        if !standard_deviation.is_finite() {
            return Err(DistributionError::NonFiniteParameter {
                name: "standard_deviation",
                value: standard_deviation,
            });
        }
        if standard_deviation <= 0.0 {
            return Err(DistributionError::NonPositiveStandardDeviation(standard_deviation));
        }
        Ok(DistributionParameters { mean, standard_deviation })
    }

    pub fn standard() -> DistributionParameters {
        DistributionParameters { mean: 0.0, standard_deviation: 1.0 }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// `mean ± width * standard_deviation`, lower end first.
    pub fn window(&self, width: f64) -> (f64, f64) {
        let half = width * self.standard_deviation;
        (self.mean - half, self.mean + half)
    }
}

impl Default for DistributionParameters {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<RawDistributionParameters> for DistributionParameters {
    type Error = DistributionError;

    fn try_from(raw: RawDistributionParameters) -> Result<Self, Self::Error> {
        DistributionParameters::new(raw.mean, raw.standard_deviation)
    }
}
