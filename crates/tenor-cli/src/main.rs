//! Tenor CLI - Command-line interface for fixed income and money market
//! valuation.
//!
//! # Usage
//!
//! ```bash
//! # Price a bond from its yield
//! tenor price --coupon 6 --coupons 9 --days 100 --basis act360 --yield 3
//!
//! # Solve the yield from a dirty price
//! tenor yield --coupon 6 --coupons 9 --days 100 --basis act360 --price 126.0201
//!
//! # Internal rate of return
//! tenor irr --investment 1300 --cashflows 100,-200,1100,350
//!
//! # Bond-equivalent yield of a 100-day bill discounted at 8%
//! tenor bey --rate 8 --days 100
//!
//! # Duration and convexity
//! tenor risk --yield 5.4 --cashflows 6,6,6,6,6,6,6,6,106
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides the `-v` level.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::CliConfig;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, &config, format)?,
        Commands::Yield(args) => commands::yields::execute(args, &config, format)?,
        Commands::Irr(args) => commands::irr::execute(args, &config, format)?,
        Commands::Bey(args) => commands::bey::execute(args, &config, format)?,
        Commands::Risk(args) => commands::risk::execute(args, &config, format)?,
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        tracing::debug!(?err, "command failed");
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
