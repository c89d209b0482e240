//! IRR command implementation.

use clap::Args;

use tenor_bonds::irr::{irr_dated_flows, irr_yearly};

use super::parse_list;
use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{print_metrics, KeyValue};

/// Arguments for the IRR command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    /// Initial outflow, as a positive amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub investment: f64,

    /// Comma-separated cashflows (e.g. "100,-200,1100,350")
    #[arg(long, allow_hyphen_values = true)]
    pub cashflows: String,

    /// Comma-separated times in years; cashflows fall at years 1, 2, ... when omitted
    #[arg(long)]
    pub times: Option<String>,
}

/// Executes the IRR command.
pub fn execute(args: IrrArgs, config: &CliConfig, format: OutputFormat) -> anyhow::Result<()> {
    let cashflows = parse_list(&args.cashflows)?;

    let rate = match &args.times {
        Some(times) => {
            let times = parse_list(times)?;
            if times.len() != cashflows.len() {
                return Err(CliError::ScheduleMismatch {
                    cashflows: cashflows.len(),
                    times: times.len(),
                }
                .into());
            }
            irr_dated_flows(args.investment, &cashflows, &times, &config.irr)?
        }
        None => irr_yearly(args.investment, &cashflows, &config.irr)?,
    };
    tracing::info!(rate, flows = cashflows.len(), "solved IRR");

    let metrics = vec![
        KeyValue::from_percent("IRR", rate),
        KeyValue::from_f64("Investment", args.investment, 2),
        KeyValue::new("Cashflows", cashflows.len().to_string()),
    ];
    print_metrics("Internal Rate of Return", &metrics, format)
}
