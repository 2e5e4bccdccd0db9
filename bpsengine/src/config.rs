//! Application configuration management.
//!
//! Configuration is merged from default values, an optional TOML file and
//! environment variables, in increasing order of precedence.

use bps_solver::{OptimizerConfig, SolverSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// The price search interval
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    /// Tolerance and evaluation limits of the minimizer
    #[serde(default)]
    pub solver: SolverSettings,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The config file, if given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Search prices up to 4x the reference price
    /// export APP_OPTIMIZER__UPPER_BOUND_MULTIPLIER=4
    ///
    /// # Allow the minimizer more evaluations
    /// export APP_SOLVER__MAX_EVALUATIONS=2000
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with(path, Self::environment())
    }

    // APP_SOLVER__XATOL maps to solver.xatol
    fn environment() -> config::Environment {
        config::Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(path: Option<&Path>, environment: config::Environment) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            anyhow::ensure!(path.exists(), "config file {} does not exist", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        let merged = builder.add_source(environment).build()?;
        Ok(merged.try_deserialize()?)
    }
}
