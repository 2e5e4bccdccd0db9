mod demand;
pub use demand::demand;

mod error;
pub use error::PricingError;

mod metrics;
pub use metrics::assemble;

mod minimum;
pub use minimum::{MIN_EVALUATIONS, Minimum, SolverSettings};

mod objective;
pub use objective::{ProfitObjective, objective};

mod optimizer;
pub use optimizer::{DEFAULT_UPPER_BOUND_MULTIPLIER, OptimizerConfig, PriceOptimizer};
