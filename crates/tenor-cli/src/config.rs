//! Solver settings loaded from a TOML file.
//!
//! ```toml
//! [yield_solver]
//! decimal_places = 10
//!
//! [irr]
//! initial_rates = [10.0, 8.0]
//!
//! [discount]
//! days_in_year = "Act360"
//! ```
//!
//! Missing tables and keys keep their library defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use tenor_bonds::{IrrConfig, YieldSolverConfig};
use tenor_rates::DiscountBasis;

use crate::error::{CliError, CliResult};

/// Settings shared by all commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Newton-Raphson yield solver settings.
    pub yield_solver: YieldSolverConfig,
    /// IRR solver settings.
    pub irr: IrrConfig,
    /// Bases for bond-equivalent yields.
    pub discount: DiscountBasis,
}

impl CliConfig {
    /// Reads `path`, or returns the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)?;
        let config = Self::parse(&text).map_err(|reason| CliError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        tracing::debug!("loaded settings from {}", path.display());
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }
}
