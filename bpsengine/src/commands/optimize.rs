use anyhow::Context as _;
use bps_core::models::{Catalog, MetricsRecord};
use bps_solver::{
    OptimizerConfig, PriceOptimizer, Solver, SolverSettings, brent::BrentSolver,
    golden::GoldenSectionSolver,
};
use clap::ValueEnum;
use tracing::{Level, event};

// This explicitly articulates the available minimizers for the `optimize` subcommand
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SolverLib {
    Brent,
    Golden,
}

// Conveniently, we can use the same enum to handle the particulars of calling into
// the various solver implementations
impl SolverLib {
    pub fn optimize(
        &self,
        catalog: &Catalog,
        settings: SolverSettings,
        config: OptimizerConfig,
        skip_invalid: bool,
    ) -> anyhow::Result<Vec<MetricsRecord>> {
        match self {
            Self::Brent => run(BrentSolver::new(settings), config, catalog, skip_invalid),
            Self::Golden => run(
                GoldenSectionSolver::new(settings),
                config,
                catalog,
                skip_invalid,
            ),
        }
    }
}

fn run<S: Solver>(
    solver: S,
    config: OptimizerConfig,
    catalog: &Catalog,
    skip_invalid: bool,
) -> anyhow::Result<Vec<MetricsRecord>> {
    let optimizer = PriceOptimizer::new(solver, config);
    let mut metrics = Vec::with_capacity(catalog.len());

    for (product, result) in optimizer.optimize_catalog(catalog) {
        match result {
            Ok(record) => metrics.push(record),
            Err(error) if skip_invalid => {
                event!(Level::WARN, %product, %error, "skipping product");
            }
            Err(error) => {
                return Err(error).with_context(|| format!("pricing product {product}"));
            }
        }
    }

    Ok(metrics)
}
