use crate::math::distribution::distributionparameters::DistributionParameters;
use crate::math::function::parametricfunction::ParametricFunction;
use crate::math::integration::simpson::SimpsonRule;

/// Gaussian mass beyond this many standard deviations is treated as zero.
pub const TAIL_WIDTH_IN_STANDARD_DEVIATIONS: f64 = 5.0;

/// Resolution used for every tail integral, independent of the default rule.
pub const TAIL_POINT_COUNT: usize = 100;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Tail {
    /// P(X > c)
    #[default]
    Upper,
    /// P(X < c)
    Lower,
}

impl Tail {
    pub fn from_greater_than(greater_than: bool) -> Tail {
        if greater_than { Tail::Upper } else { Tail::Lower }
    }

    pub fn to_char(&self) -> char {
        match self {
            Tail::Upper => '>',
            Tail::Lower => '<'
        }
    }
}

/// P(X > c) or P(X < c) for X distributed by `density` with `params`.
///
/// The open end of the half-line is cut at mean ± 5σ and the density is
/// integrated with a 100-point Simpson rule. The result is not clamped to
/// [0, 1].
pub fn tail_probability<F>(density: &F, params: &DistributionParameters, cutoff: f64, tail: Tail) -> f64
where
    F: ParametricFunction<DistributionParameters> + ?Sized,
{
    let (lower_end, upper_end) = params.window(TAIL_WIDTH_IN_STANDARD_DEVIATIONS);
    let (a, b) = match tail {
        Tail::Upper => (cutoff, upper_end),
        Tail::Lower => (lower_end, cutoff),
    };
    TAIL_RULE.integrate(density, params, a, b)
}

const TAIL_RULE: SimpsonRule = SimpsonRule::with_point_count(TAIL_POINT_COUNT);
