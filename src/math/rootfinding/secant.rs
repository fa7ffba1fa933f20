use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Secant method
// ─────────────────────────────────────────────────────────────────────────────
//
//   x_{k+1} = x_k − f(x_k) · (x_k − x_{k−1}) / (f(x_k) − f(x_{k−1}))
//
// The iteration stops once the last step |x_{k+1} − x_k| is within the
// tolerance or the iteration budget is spent.

pub const DEFAULT_MAX_ITERATIONS: usize = 10;
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

#[derive(Error, Debug, PartialEq)]
pub enum RootFindingError {
    #[error("secant line is horizontal at iteration {iteration} (x = {estimate}, f(x) = {function_value})")]
    SingularSecantStep { iteration: usize, estimate: f64, function_value: f64 },
    #[error("secant step is not finite at iteration {iteration} (x = {estimate})")]
    NonFiniteStep { iteration: usize, estimate: f64 },
    #[error("function evaluation failed at iteration {iteration}: {message}")]
    Evaluation { iteration: usize, message: String },
    #[error("tolerance must be non-negative; got {0}")]
    InvalidTolerance(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantSettings {
    max_iterations: usize,
    tolerance: f64
}

impl SecantSettings {
    pub fn new(max_iterations: usize, tolerance: f64) -> SecantSettings {
        SecantSettings { max_iterations, tolerance }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for SecantSettings {
    fn default() -> Self {
        SecantSettings::new(DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SecantStatus {
    /// The last step was within tolerance.
    Converged,
    /// The iteration budget ran out first. The estimate may still be useful.
    MaxIterationsReached,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecantResult {
    root: f64,
    iterations: usize,
    status: SecantStatus,
    steps: Vec<f64>
}

impl SecantResult {
    pub fn root(&self) -> f64 {
        self.root
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn status(&self) -> SecantStatus {
        self.status
    }

    pub fn is_converged(&self) -> bool {
        self.status == SecantStatus::Converged
    }

    /// Every step taken, in order. Empty when the initial estimates were
    /// already within tolerance of each other.
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// `(root, iterations)`
    pub fn into_tuple(self) -> (f64, usize) {
        (self.root, self.iterations)
    }
}

/// Ephemeral iteration state, created per call.
struct SecantState {
    current_estimate: f64,
    previous_estimate: f64,
    previous_function_value: f64,
    iteration_count: usize,
    step: f64,
}

impl SecantState {
    fn new(x0: f64, x1: f64, f_x0: f64) -> SecantState {
        SecantState {
            current_estimate: x1,
            previous_estimate: x0,
            previous_function_value: f_x0,
            iteration_count: 0,
            step: x1 - x0,
        }
    }

    fn should_continue(&self, settings: &SecantSettings) -> bool {
        self.iteration_count < settings.max_iterations && self.step.abs() > settings.tolerance
    }

    fn advance(&mut self, new_function_value: f64) -> Result<f64, RootFindingError> {
        let iteration = self.iteration_count + 1;
        if !new_function_value.is_finite() {
            return Err(RootFindingError::NonFiniteStep { iteration, estimate: self.current_estimate });
        }
        if new_function_value == self.previous_function_value {
            return Err(RootFindingError::SingularSecantStep {
                iteration,
                estimate: self.current_estimate,
                function_value: new_function_value,
            });
        }
        let step = -new_function_value * (self.current_estimate - self.previous_estimate)
            / (new_function_value - self.previous_function_value);
        if !step.is_finite() {
            return Err(RootFindingError::NonFiniteStep { iteration, estimate: self.current_estimate });
        }
        self.previous_estimate = self.current_estimate;
        self.current_estimate += step;
        self.previous_function_value = new_function_value;
        self.iteration_count = iteration;
        self.step = step;
        Ok(step)
    }

    fn finish(self, settings: &SecantSettings, steps: Vec<f64>) -> SecantResult {
        let status = if self.step.abs() <= settings.tolerance {
            SecantStatus::Converged
        } else {
            SecantStatus::MaxIterationsReached
        };
        SecantResult {
            root: self.current_estimate,
            iterations: self.iteration_count,
            status,
            steps,
        }
    }
}

/// Finds a root of `f` starting from the estimates `x0` and `x1`.
///
/// Running out of iterations is not an error: the result carries the last
/// estimate with [`SecantStatus::MaxIterationsReached`]. A horizontal secant
/// line (two equal consecutive function values) is reported as
/// [`RootFindingError::SingularSecantStep`] rather than continuing with NaN.
///
/// ```
/// use gausssecant::math::rootfinding::secant::{secant, SecantSettings};
///
/// let result = secant(|x| x * x - 2.0, 1.0, 2.0, &SecantSettings::new(20, 1e-12)).unwrap();
/// assert!((result.root() - std::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn secant<F>(mut f: F, x0: f64, x1: f64, settings: &SecantSettings) -> Result<SecantResult, RootFindingError>
where
    F: FnMut(f64) -> f64,
{
    try_secant(|x| Ok::<f64, String>(f(x)), x0, x1, settings)
}

/// Same iteration as [`secant`] for a fallible function. An evaluation error
/// stops the search and is returned as [`RootFindingError::Evaluation`].
///
/// A NaN or negative tolerance is rejected up front, as are non-finite
/// initial estimates or a non-finite `f(x0)` (reported at iteration 0).
pub fn try_secant<F, E>(
    mut f: F,
    x0: f64,
    x1: f64,
    settings: &SecantSettings,
) -> Result<SecantResult, RootFindingError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: ToString,
{
    let evaluate = |f: &mut F, x: f64, iteration: usize| {
        f(x).map_err(|error| RootFindingError::Evaluation { iteration, message: error.to_string() })
    };

    let tolerance = settings.tolerance;
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(RootFindingError::InvalidTolerance(tolerance));
    }
    for estimate in [x0, x1] {
        if !estimate.is_finite() {
            return Err(RootFindingError::NonFiniteStep { iteration: 0, estimate });
        }
    }

    let f_x0 = evaluate(&mut f, x0, 0)?;
    if !f_x0.is_finite() {
        return Err(RootFindingError::NonFiniteStep { iteration: 0, estimate: x0 });
    }
    let mut state = SecantState::new(x0, x1, f_x0);
    let mut steps = Vec::new();
    while state.should_continue(settings) {
        let new_function_value = evaluate(&mut f, state.current_estimate, state.iteration_count + 1)?;
        steps.push(state.advance(new_function_value)?);
    }
    Ok(state.finish(settings, steps))
}
