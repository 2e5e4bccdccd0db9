use bps_core::{models::SummaryRecord, ports::Reporter as _};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, event};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod config;
pub use config::AppConfig;

mod report;
pub use report::*;

// The top-level arguments: where to find configuration, and which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "APP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let AppConfig {
            mut optimizer,
            solver,
        } = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Optimize {
                io,
                format,
                lib,
                upper_bound_multiplier,
                skip_invalid,
            } => {
                if let Some(multiplier) = upper_bound_multiplier {
                    optimizer.upper_bound_multiplier = multiplier;
                }

                let catalog = io.catalog()?;
                let metrics = lib.optimize(&catalog, solver, optimizer, skip_invalid)?;
                let summary = SummaryRecord::from_metrics(&metrics);
                event!(
                    Level::INFO,
                    priced = metrics.len(),
                    total_profit = summary.total_profit,
                    "pricing run complete"
                );

                let output = io.write()?;
                match format {
                    ReportFormat::Table => ConsoleReporter::new(output).report(&summary, &metrics)?,
                    ReportFormat::Json => JsonReporter::new(output).report(&summary, &metrics)?,
                }
            }
            Commands::Demand { io, price, product } => {
                let catalog = io.catalog()?;
                let output = io.write()?;
                demand::forecast(&catalog, price, product.as_deref(), output)?;
            }
        }

        Ok(())
    }
}
