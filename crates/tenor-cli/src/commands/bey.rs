//! Bond-equivalent yield command implementation.

use clap::Args;

use tenor_core::DayCountBasis;
use tenor_rates::discount::{
    bond_equivalent_yield, discount_rate_from_bond_equivalent_yield, yield_from_discount_rate,
};

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output::{print_metrics, KeyValue};

/// Arguments for the BEY command.
#[derive(Args, Debug)]
pub struct BeyArgs {
    /// Discount rate in percent, or the bond-equivalent yield with --inverse
    #[arg(short, long)]
    pub rate: f64,

    /// Days to maturity
    #[arg(short, long)]
    pub days: f64,

    /// Treat --rate as a bond-equivalent yield and return the discount rate
    #[arg(long)]
    pub inverse: bool,

    /// Money market basis, overriding the configuration
    #[arg(long)]
    pub mm_basis: Option<DayCountBasis>,

    /// Bond market basis, overriding the configuration
    #[arg(long)]
    pub bond_basis: Option<DayCountBasis>,
}

/// Executes the BEY command.
pub fn execute(args: BeyArgs, config: &CliConfig, format: OutputFormat) -> anyhow::Result<()> {
    let mut basis = config.discount;
    if let Some(mm) = args.mm_basis {
        basis = basis.with_days_in_year(mm);
    }
    if let Some(bond) = args.bond_basis {
        basis = basis.with_bond_days_in_year(bond);
    }

    let (rate, bey) = if args.inverse {
        let rate = discount_rate_from_bond_equivalent_yield(args.rate, args.days, basis)?;
        (rate, args.rate)
    } else {
        (args.rate, bond_equivalent_yield(args.rate, args.days, basis)?)
    };
    let mm_yield = yield_from_discount_rate(rate, args.days, basis.days_in_year)?;
    tracing::info!(rate, bey, days = args.days, "converted discount rate");

    let (solved, given) = if args.inverse {
        (("Discount Rate", rate), ("Bond-Equivalent Yield", bey))
    } else {
        (("Bond-Equivalent Yield", bey), ("Discount Rate", rate))
    };
    let metrics = vec![
        KeyValue::from_percent(solved.0, solved.1),
        KeyValue::from_percent(given.0, given.1),
        KeyValue::from_percent("Money Market Yield", mm_yield),
        KeyValue::from_f64("Days", args.days, 0),
    ];
    print_metrics("Bond-Equivalent Yield", &metrics, format)
}
