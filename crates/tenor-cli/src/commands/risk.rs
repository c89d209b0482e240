//! Risk command implementation.

use clap::Args;

use tenor_bonds::risk::{
    convexity, macaulay_duration, modified_duration, price_change_from_modified_duration,
    price_change_with_convexity,
};
use tenor_core::tvm::npv;
use tenor_core::{CashflowSchedule, Frequency};

use super::{parse_list, validate_price};
use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{print_metrics, KeyValue};

/// Arguments for the risk command.
#[derive(Args, Debug)]
pub struct RiskArgs {
    /// Market yield in percent
    #[arg(short = 'y', long = "yield")]
    pub market_yield: f64,

    /// Comma-separated cashflows (e.g. "6,6,6,106")
    #[arg(long)]
    pub cashflows: String,

    /// Comma-separated times in years; cashflows fall at years 1, 2, ... when omitted
    #[arg(long)]
    pub times: Option<String>,

    /// Coupons per year used for modified duration and convexity
    #[arg(long, default_value = "1")]
    pub frequency: u32,

    /// Dirty price; defaults to the present value of the cashflows
    #[arg(short, long)]
    pub price: Option<f64>,

    /// Yield change in percentage points for the price sensitivity
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    pub shift: f64,
}

/// Executes the risk command.
pub fn execute(args: RiskArgs, _config: &CliConfig, format: OutputFormat) -> anyhow::Result<()> {
    let amounts = parse_list(&args.cashflows)?;
    let schedule = match &args.times {
        Some(times) => {
            let times = parse_list(times)?;
            if times.len() != amounts.len() {
                return Err(CliError::ScheduleMismatch {
                    cashflows: amounts.len(),
                    times: times.len(),
                }
                .into());
            }
            CashflowSchedule::new(&amounts, &times)?
        }
        None => CashflowSchedule::yearly(&amounts),
    };
    let frequency = Frequency::from_periods(args.frequency)?;
    let price = match args.price {
        Some(p) => validate_price(p)?,
        None => npv(&schedule, args.market_yield),
    };

    let duration = macaulay_duration(args.market_yield, &schedule)?;
    let md = modified_duration(duration, args.market_yield, frequency);
    let cx = convexity(price, args.market_yield, frequency, &schedule)?;
    let first_order = price_change_from_modified_duration(price, args.shift, md);
    let second_order =
        price_change_with_convexity(price, args.market_yield, args.shift, frequency, &schedule)?;
    tracing::info!(duration, md, convexity = cx, "computed risk measures");

    let metrics = vec![
        KeyValue::from_f64("Macaulay Duration", duration, 6),
        KeyValue::from_f64("Modified Duration", md, 6),
        KeyValue::from_f64("Convexity", cx, 6),
        KeyValue::from_f64("Dirty Price", price, 6),
        KeyValue::from_f64("Price Change (duration)", first_order, 6),
        KeyValue::from_f64("Price Change (with convexity)", second_order, 6),
    ];
    print_metrics("Risk Measures", &metrics, format)
}
