//! Yield command implementation.

use clap::Args;

use tenor_bonds::yields::{bond_yield, money_market_yield, moosmuller_yield};
use tenor_core::DayCountBasis;

use super::{validate_price, BondArgs, Convention};
use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output::{print_metrics, KeyValue};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Dirty price, in the same units as the notional
    #[arg(short, long)]
    pub price: f64,

    /// Yield convention
    #[arg(long, value_enum, default_value = "compound")]
    pub convention: Convention,

    /// Bond market basis the money market convention scales periods to
    #[arg(long, default_value = "act365")]
    pub bond_basis: DayCountBasis,

    /// Decimal places to solve to, overriding the configuration
    #[arg(long)]
    pub decimal_places: Option<u32>,
}

/// Executes the yield command.
pub fn execute(args: YieldArgs, config: &CliConfig, format: OutputFormat) -> anyhow::Result<()> {
    let bond = args.bond.bond()?;
    let price = validate_price(args.price)?;

    let mut solver = config.yield_solver;
    if let Some(places) = args.decimal_places {
        solver = solver.with_decimal_places(places);
    }
    tracing::debug!(?solver, "solving yield");

    let y = match args.convention {
        Convention::Compound => bond_yield(&bond, price, &solver)?,
        Convention::Moosmuller => moosmuller_yield(&bond, price, &solver)?,
        Convention::MoneyMarket => money_market_yield(&bond, price, args.bond_basis, &solver)?,
    };
    tracing::info!(convention = ?args.convention, y, "solved yield");

    let metrics = vec![
        KeyValue::from_percent("Yield", y),
        KeyValue::from_f64("Dirty Price", price, 6),
        KeyValue::new("Convention", format!("{:?}", args.convention)),
    ];
    print_metrics("Bond Yield", &metrics, format)
}
