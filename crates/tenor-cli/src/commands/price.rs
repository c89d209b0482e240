//! Price command implementation.

use clap::Args;

use tenor_bonds::pricing::{
    accrued_interest, dirty_price, money_market_price, moosmuller_price,
};
use tenor_core::DayCountBasis;

use super::{BondArgs, Convention};
use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output::{print_metrics, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Market yield in percent
    #[arg(short = 'y', long = "yield")]
    pub market_yield: f64,

    /// Yield convention
    #[arg(long, value_enum, default_value = "compound")]
    pub convention: Convention,

    /// Days since the last coupon, for accrued interest and the clean price
    #[arg(long)]
    pub accrued_days: Option<f64>,

    /// Basis for accrued interest
    #[arg(long, default_value = "act365")]
    pub accrued_basis: DayCountBasis,

    /// Bond market basis the money market convention scales periods to
    #[arg(long, default_value = "act365")]
    pub bond_basis: DayCountBasis,
}

/// Executes the price command.
pub fn execute(args: PriceArgs, _config: &CliConfig, format: OutputFormat) -> anyhow::Result<()> {
    let bond = args.bond.bond()?;

    let dirty = match args.convention {
        Convention::Compound => dirty_price(&bond, args.market_yield)?,
        Convention::Moosmuller => moosmuller_price(&bond, args.market_yield)?,
        Convention::MoneyMarket => money_market_price(&bond, args.market_yield, args.bond_basis)?,
    };
    tracing::info!(convention = ?args.convention, dirty, "priced bond");

    let mut metrics = vec![KeyValue::from_f64("Dirty Price", dirty, 6)];
    if let Some(days) = args.accrued_days {
        let accrued = accrued_interest(bond.notional(), bond.coupon_rate(), days, args.accrued_basis);
        metrics.push(KeyValue::from_f64("Clean Price", dirty - accrued, 6));
        metrics.push(KeyValue::from_f64("Accrued Interest", accrued, 6));
    }
    metrics.push(KeyValue::from_percent("Yield", args.market_yield));
    metrics.push(KeyValue::new("Frequency", bond.frequency().to_string()));
    metrics.push(KeyValue::new("Stub Basis", bond.basis().to_string()));

    print_metrics("Bond Price", &metrics, format)
}
