//! CLI command implementations.

pub mod bey;
pub mod irr;
pub mod price;
pub mod risk;
pub mod yields;

pub use bey::BeyArgs;
pub use irr::IrrArgs;
pub use price::PriceArgs;
pub use risk::RiskArgs;
pub use yields::YieldArgs;

use clap::{Args, ValueEnum};
use tenor_bonds::CouponBond;
use tenor_core::{DayCountBasis, Frequency};

use crate::error::{CliError, CliResult};

/// Bond description shared by `price` and `yield`.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Notional (redemption amount)
    #[arg(long, default_value = "100")]
    pub notional: f64,

    /// Annual coupon rate in percent (e.g. 6.0 for 6%)
    #[arg(short = 'r', long)]
    pub coupon: f64,

    /// Coupons per year: 1, 2, 4 or 12
    #[arg(long, default_value = "1")]
    pub frequency: u32,

    /// Coupons still to be paid, including the next one
    #[arg(short = 'n', long)]
    pub coupons: u32,

    /// Days until the next coupon
    #[arg(short, long)]
    pub days: f64,

    /// Day-count basis of the stub period (act365, act360, actact, working or a day count)
    #[arg(short, long, default_value = "act365")]
    pub basis: DayCountBasis,
}

impl BondArgs {
    /// Builds the bond these arguments describe.
    pub fn bond(&self) -> anyhow::Result<CouponBond> {
        let frequency = Frequency::from_periods(self.frequency)?;
        let bond = CouponBond::new(
            self.notional,
            self.coupon,
            frequency,
            self.coupons,
            self.days,
        )?
        .with_basis(self.basis);
        tracing::debug!(?bond, "bond from arguments");
        Ok(bond)
    }
}

/// Yield convention for bond pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Convention {
    /// Compound discounting over the stub
    #[default]
    Compound,
    /// Simple interest to the next coupon, compound thereafter
    Moosmuller,
    /// Simple stub with periods scaled to the money market basis
    MoneyMarket,
}

/// Parses a comma-separated list of numbers.
pub fn parse_list(s: &str) -> CliResult<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>()
                .map_err(|_| CliError::InvalidNumber(item.to_string()))
        })
        .collect()
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if price <= 0.0 {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}
