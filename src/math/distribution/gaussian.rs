use std::f64::consts::PI;

use crate::math::distribution::distributionparameters::{
    DistributionError,
    DistributionParameters
};
use crate::math::function::parametricfunction::ParametricFunction;

/// Gaussian probability density, parameterized by [`DistributionParameters`].
///
/// Parameters are validated when they are built, so evaluation never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianDensity;

impl ParametricFunction<DistributionParameters> for GaussianDensity {
    fn value(&self, x: f64, args: &DistributionParameters) -> f64 {
        density_unchecked(x, args.mean(), args.standard_deviation())
    }
}

/// f(x) = 1 / (σ√(2π)) · exp(−½((x − μ)/σ)²)
///
/// Fails fast on a non-positive or non-finite standard deviation instead of
/// returning an infinite or NaN density.
pub fn gaussian_density(x: f64, mean: f64, standard_deviation: f64) -> Result<f64, DistributionError> {
    let params = DistributionParameters::new(mean, standard_deviation)?;
    Ok(GaussianDensity.value(x, &params))
}

fn density_unchecked(x: f64, mean: f64, standard_deviation: f64) -> f64 {
    let z = (x - mean) / standard_deviation;
    (-0.5 * z * z).exp() / (standard_deviation * (2.0 * PI).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_normal_peak() {
        assert!((gaussian_density(0.0, 0.0, 1.0).unwrap() - 0.3989423).abs() < 1e-7);
    }

    #[test]
    fn standard_normal_at_three() {
        assert!((gaussian_density(3.0, 0.0, 1.0).unwrap() - 0.004431848).abs() < 1e-9);
    }

    #[test]
    fn symmetric_about_mean() {
        let params = DistributionParameters::new(2.5, 0.7).unwrap();
        assert_eq!(GaussianDensity.value(2.0, &params), GaussianDensity.value(3.0, &params));
    }

    #[test]
    fn scale_shrinks_peak() {
        let wide = gaussian_density(0.0, 0.0, 2.0).unwrap();
        let narrow = gaussian_density(0.0, 0.0, 1.0).unwrap();
        assert!((narrow / wide - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_standard_deviation_fails() {
        assert_eq!(
            gaussian_density(0.0, 0.0, 0.0),
            Err(DistributionError::NonPositiveStandardDeviation(0.0))
        );
    }

    #[test]
    fn negative_standard_deviation_fails() {
        assert!(gaussian_density(1.0, 0.0, -1.0).is_err());
    }
}
