/**
 * These are implementations of the bounded scalar minimizers.
 */
mod impls;
pub use impls::*;

/**
 * These are the demand model, the profit objective, and the optimizer built on top of them.
 */
mod types;
pub use types::*;

/// The Solver trait defines the interface for bounded, derivative-free scalar minimizers.
///
/// A Solver searches a closed interval for the argument minimizing an objective.
/// The objective may be piecewise constant (unit demand is an integer), so
/// implementations must not rely on derivatives, must be deterministic, and
/// must stop after a bounded number of objective evaluations.
pub trait Solver {
    /// The configuration type for this solver
    type Settings;

    /// Create a new instance with the provided settings
    fn new(settings: Self::Settings) -> Self;

    /// Minimize the objective over `[lower, upper]`
    ///
    /// # Parameters
    /// * `objective` - The function to minimize; errors are propagated as-is
    /// * `lower`, `upper` - The search interval, which is never reordered
    ///
    /// # Returns
    /// * `Minimum` - The best point evaluated, along with convergence information
    fn minimize<F>(&self, objective: F, lower: f64, upper: f64) -> Result<Minimum, PricingError>
    where
        F: FnMut(f64) -> Result<f64, PricingError>;
}

// Shared validation of the search interval for every implementation
pub(crate) fn check_bounds(lower: f64, upper: f64) -> Result<(), PricingError> {
    if lower.is_finite() && upper.is_finite() && lower <= upper {
        Ok(())
    } else {
        Err(PricingError::InvalidBounds { lower, upper })
    }
}
