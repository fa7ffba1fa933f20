use argmin::core::CostFunction;

use crate::math::rootfinding::secant::{
    try_secant,
    RootFindingError,
    SecantResult,
    SecantSettings
};

/// Runs the secant iteration on a problem modelled as an argmin
/// [`CostFunction`], treating the cost as the function whose root is sought.
/// A failing `cost` call ends the search with [`RootFindingError::Evaluation`].
pub fn secant_cost_function<O>(
    problem: &O,
    x0: f64,
    x1: f64,
    settings: &SecantSettings,
) -> Result<SecantResult, RootFindingError>
where
    O: CostFunction<Param = f64, Output = f64>,
{
    try_secant(|x| problem.cost(&x), x0, x1, settings)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use argmin::core::{Error, Executor, State};
    use argmin::solver::brent::BrentRoot;

    use super::*;

    struct Cubic {
        shift: f64,
    }

    impl CostFunction for Cubic {
        type Param = f64;
        type Output = f64;

        fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
            Ok(x * x * x - self.shift)
        }
    }

    struct Failing;

    impl CostFunction for Failing {
        type Param = f64;
        type Output = f64;

        fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
            if *x > 0.5 {
                return Err(Error::msg("cost undefined above 0.5"));
            }
            Ok(*x)
        }
    }

    #[test]
    fn agrees_with_brent_root() {
        let problem = Cubic { shift: 5.0 };
        let secant_root = secant_cost_function(&problem, 1.0, 2.0, &SecantSettings::new(50, 1e-10))
            .unwrap()
            .root();

        let brent = BrentRoot::new(1.0, 2.0, 1e-12);
        let res = Executor::new(Cubic { shift: 5.0 }, brent)
            .configure(|state| state.max_iters(100))
            .run()
            .unwrap();
        let brent_root = *res.state().get_param().unwrap();

        assert_abs_diff_eq!(secant_root, 5.0_f64.cbrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(secant_root, brent_root, epsilon = 1e-8);
    }

    #[test]
    fn cost_errors_become_evaluation_errors() {
        let err = secant_cost_function(&Failing, 0.0, 1.0, &SecantSettings::default()).unwrap_err();
        assert_eq!(
            err,
            RootFindingError::Evaluation { iteration: 1, message: "cost undefined above 0.5".to_owned() }
        );
    }
}
