use super::{IOArgs, ReportFormat};
use clap::Subcommand;

pub mod demand;
pub mod optimize;

#[derive(Subcommand)]
pub enum Commands {
    /// Find the profit-maximizing price of every product and report the company summary
    Optimize {
        #[command(flatten)]
        io: IOArgs,

        /// How to render the report
        #[arg(short, long, value_enum, default_value_t)]
        format: ReportFormat,

        /// Request a specific bounded minimizer
        #[arg(short, long, value_enum, default_value = "brent")]
        lib: optimize::SolverLib,

        /// Override the price ceiling, as a multiple of each product's reference price
        #[arg(long)]
        upper_bound_multiplier: Option<f64>,

        /// Leave out products that cannot be priced instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Forecast the demand and profit of every product at a fixed price
    Demand {
        #[command(flatten)]
        io: IOArgs,

        /// The unit price to evaluate
        #[arg(short, long)]
        price: f64,

        /// Restrict the forecast to a single product
        #[arg(long)]
        product: Option<String>,
    },
}
