/// The result of a bounded minimization: the best point evaluated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minimum {
    /// The argument with the lowest objective value found
    pub x: f64,
    /// The objective value at `x`
    pub fx: f64,
    /// How many times the objective was evaluated
    pub evaluations: usize,
    /// Whether the tolerance was met before the evaluation cap
    pub converged: bool,
}

/// The fewest objective evaluations a minimizer is allowed. A golden-section
/// bracket needs two interior points before it can be compared at all.
pub const MIN_EVALUATIONS: usize = 2;

/// Settings shared by the bounded minimizers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SolverSettings {
    /// Absolute tolerance on the argument
    pub xatol: f64,
    /// Hard cap on objective evaluations; caps below [`MIN_EVALUATIONS`] are raised to it
    pub max_evaluations: usize,
}

impl SolverSettings {
    /// The evaluation cap actually enforced, never below [`MIN_EVALUATIONS`]
    pub fn evaluation_limit(&self) -> usize {
        self.max_evaluations.max(MIN_EVALUATIONS)
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            xatol: 1e-5,
            max_evaluations: 500,
        }
    }
}
