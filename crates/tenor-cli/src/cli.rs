//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{BeyArgs, IrrArgs, PriceArgs, RiskArgs, YieldArgs};

/// Tenor - fixed income and money market valuation CLI
#[derive(Parser)]
#[command(name = "tenor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// TOML file with [yield_solver], [irr] and [discount] settings
    #[arg(short, long, global = true, env = "TENOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a coupon bond from its yield
    Price(PriceArgs),

    /// Solve the yield implied by a dirty price
    Yield(YieldArgs),

    /// Internal rate of return of a cashflow schedule
    Irr(IrrArgs),

    /// Bond-equivalent yield of a discount instrument
    Bey(BeyArgs),

    /// Duration, convexity and price sensitivity of a cashflow schedule
    Risk(RiskArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
