use thiserror::Error;

use crate::math::function::parametricfunction::ParametricFunction;
use crate::math::integration::integrationbounds::IntegrationBounds;

// ─────────────────────────────────────────────────────────────────────────────
// Composite Simpson 1/3 rule
// ─────────────────────────────────────────────────────────────────────────────
//
//   ∫ f dx ≈ h/3 · [ f(x_0) + 4 Σ_odd f(x_j) + 2 Σ_even f(x_j) + f(x_n) ]
//
// with n = 2 · point_count panels of width h = (x_R − x_L) / n, so the panel
// count is always even.

pub const DEFAULT_POINT_COUNT: usize = 20;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuadratureError {
    #[error("Simpson rule needs at least one point; got 0")]
    ZeroPointCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpsonRule {
    point_count: usize
}

impl SimpsonRule {
    pub fn new(point_count: usize) -> Result<SimpsonRule, QuadratureError> {
        if point_count == 0 {
            return Err(QuadratureError::ZeroPointCount);
        }
        Ok(SimpsonRule { point_count })
    }

    /// For point counts known at compile time; a zero count fails const
    /// evaluation instead of surfacing at run time.
    pub const fn with_point_count(point_count: usize) -> SimpsonRule {
        assert!(point_count > 0, "Simpson rule needs at least one point");
        SimpsonRule { point_count }
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn panel_count(&self) -> usize {
        2 * self.point_count
    }

    /// Integrates `f` over the given limits, passing `args` to every
    /// evaluation. The limits may come in either order; equal limits give 0.
    pub fn integrate<A, F>(&self, f: &F, args: &A, lower_limit: f64, upper_limit: f64) -> f64
    where
        A: ?Sized,
        F: ParametricFunction<A> + ?Sized,
    {
        self.integrate_bounds(f, args, IntegrationBounds::new(lower_limit, upper_limit))
    }

    pub fn integrate_bounds<A, F>(&self, f: &F, args: &A, bounds: IntegrationBounds) -> f64
    where
        A: ?Sized,
        F: ParametricFunction<A> + ?Sized,
    {
        if bounds.is_degenerate() {
            return 0.0;
        }
        let (x_l, x_r) = bounds.ordered();
        let n = self.panel_count();
        let h = bounds.width() / n as f64;

        let mut area = f.value(x_l, args) + f.value(x_r, args);
        for j in 1..n {
            let x = x_l + j as f64 * h;
            let weight = if j % 2 == 1 { 4.0 } else { 2.0 };
            area += weight * f.value(x, args);
        }
        (h / 3.0) * area
    }
}

impl Default for SimpsonRule {
    fn default() -> Self {
        SimpsonRule::with_point_count(DEFAULT_POINT_COUNT)
    }
}

/// One-shot form of [`SimpsonRule::integrate`].
pub fn simpson<A, F>(
    f: &F,
    args: &A,
    lower_limit: f64,
    upper_limit: f64,
    point_count: usize,
) -> Result<f64, QuadratureError>
where
    A: ?Sized,
    F: ParametricFunction<A> + ?Sized,
{
    Ok(SimpsonRule::new(point_count)?.integrate(f, args, lower_limit, upper_limit))
}
