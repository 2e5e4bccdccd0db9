use crate::{PricingError, ProfitObjective, Solver, assemble, brent::BrentSolver, check_bounds};
use bps_core::models::{Catalog, MetricsRecord, ProductId, ProductRecord, round_cents};
use tracing::{Level, event, span};

/// The default ceiling of the price search, as a multiple of the reference price.
///
/// This is a heuristic, not a property of the demand model: a product whose
/// true optimum lies above the ceiling is reported at the ceiling.
pub const DEFAULT_UPPER_BOUND_MULTIPLIER: f64 = 3.0;

/// Configures the price search interval.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OptimizerConfig {
    /// Prices are searched in `[unit_cost, base_price * upper_bound_multiplier]`
    pub upper_bound_multiplier: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            upper_bound_multiplier: DEFAULT_UPPER_BOUND_MULTIPLIER,
        }
    }
}

/// Finds the profit-maximizing price of a product using a bounded [`Solver`].
#[derive(Clone, Debug)]
pub struct PriceOptimizer<S = BrentSolver> {
    solver: S,
    config: OptimizerConfig,
}

impl Default for PriceOptimizer<BrentSolver> {
    fn default() -> Self {
        Self::new(BrentSolver::default(), OptimizerConfig::default())
    }
}

impl<S: Solver> PriceOptimizer<S> {
    /// Create an optimizer from a solver and a search configuration
    pub fn new(solver: S, config: OptimizerConfig) -> Self {
        Self { solver, config }
    }

    /// The search configuration
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// The price interval searched for `record`.
    ///
    /// Fails if the interval is inverted (the unit cost exceeds the ceiling)
    /// or not finite; the ends are never swapped.
    pub fn bounds(&self, record: &ProductRecord) -> Result<(f64, f64), PricingError> {
        record.validate()?;

        let lower = record.unit_cost;
        let upper = record.base_price * self.config.upper_bound_multiplier;

        check_bounds(lower, upper)?;
        Ok((lower, upper))
    }

    /// Find the profit-maximizing price for `record` and forecast its metrics.
    ///
    /// The price found by the solver is passed to [`assemble`] unmodified.
    pub fn optimize(&self, record: &ProductRecord) -> Result<MetricsRecord, PricingError> {
        let _span = span!(Level::DEBUG, "optimize", product = %record.product).entered();

        let (lower, upper) = self.bounds(record)?;
        let objective = ProfitObjective::new(record);
        let minimum = self
            .solver
            .minimize(|price| objective.evaluate(price), lower, upper)?;

        if minimum.converged {
            event!(
                Level::DEBUG,
                price = minimum.x,
                profit = -minimum.fx,
                evaluations = minimum.evaluations,
                "found optimal price"
            );
        } else {
            event!(
                Level::WARN,
                price = minimum.x,
                evaluations = minimum.evaluations,
                "evaluation limit reached before convergence, using best price found"
            );
        }

        if round_cents(minimum.x) >= round_cents(upper) {
            event!(
                Level::DEBUG,
                ceiling = upper,
                "optimal price is at the search ceiling and may be under-reported"
            );
        }

        assemble(record, minimum.x)
    }

    /// Optimize every product in the catalog, in catalog order.
    ///
    /// Products are independent: a failure is reported alongside its product
    /// and does not affect the others.
    pub fn optimize_catalog(
        &self,
        catalog: &Catalog,
    ) -> Vec<(ProductId, Result<MetricsRecord, PricingError>)> {
        let results = catalog
            .iter()
            .map(|record| (record.product.clone(), self.optimize(record)))
            .collect::<Vec<_>>();

        let failed = results.iter().filter(|(_, r)| r.is_err()).count();
        event!(
            Level::INFO,
            products = results.len(),
            failed,
            "optimized catalog"
        );

        results
    }
}
