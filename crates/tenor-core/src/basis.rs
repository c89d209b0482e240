//! Day-count bases.
//!
//! A basis is the number of days treated as a full year when converting a
//! day count into a year fraction. Tenor never derives day counts from
//! calendar dates; callers supply plain day numbers and pick the basis that
//! matches the market they quote in.
//!
//! | Basis | Days in year | Typical use |
//! |-------|--------------|-------------|
//! | [`DayCountBasis::Act365`] | 365 | Bond market, GBP/HKD/SGD money markets |
//! | [`DayCountBasis::Act360`] | 360 | USD/EUR money markets |
//! | [`DayCountBasis::ActAct`] | 366 | Government bonds (leap-year upper bound) |
//! | [`DayCountBasis::Working`] | 252 | Volatility annualisation |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Days-in-year convention used to scale rate-to-time conversions.
///
/// The custom variant holds a [`NonZeroU32`], so a zero basis cannot be
/// represented and every year fraction is finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountBasis {
    /// Actual/365 - bond market basis.
    #[default]
    Act365,
    /// Actual/360 - money market basis.
    Act360,
    /// Actual/Actual, fixed at the 366-day leap-year length.
    ActAct,
    /// 252 business days.
    Working,
    /// Any other strictly positive year length.
    Custom(NonZeroU32),
}

impl DayCountBasis {
    /// Bond market basis (ACT/365).
    pub const BOND_MARKET: Self = Self::Act365;

    /// Money market basis (ACT/360).
    pub const MONEY_MARKET: Self = Self::Act360;

    /// Creates a custom basis, rejecting zero.
    pub fn custom(days: u32) -> CoreResult<Self> {
        NonZeroU32::new(days)
            .map(Self::Custom)
            .ok_or(CoreError::InvalidBasis { days })
    }

    /// Returns the number of days in a year for this basis.
    #[must_use]
    pub fn days_in_year(&self) -> f64 {
        match self {
            Self::Act365 => 365.0,
            Self::Act360 => 360.0,
            Self::ActAct => 366.0,
            Self::Working => 252.0,
            Self::Custom(days) => f64::from(days.get()),
        }
    }

    /// Converts a day count into a year fraction.
    #[must_use]
    pub fn year_fraction(&self, days: f64) -> f64 {
        days / self.days_in_year()
    }

    /// Returns the market name of the basis.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Act365 => "ACT/365".to_string(),
            Self::Act360 => "ACT/360".to_string(),
            Self::ActAct => "ACT/ACT".to_string(),
            Self::Working => "BUS/252".to_string(),
            Self::Custom(days) => format!("ACT/{days}"),
        }
    }
}

impl fmt::Display for DayCountBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountBasis {
    type Err = CoreError;

    /// Parses `act365`, `act/360`, `actact`, `working`/`bus252`, or a plain
    /// number of days.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "act365" | "365" => Ok(Self::Act365),
            "act360" | "360" => Ok(Self::Act360),
            "actact" | "366" => Ok(Self::ActAct),
            "working" | "bus252" | "252" => Ok(Self::Working),
            other => other
                .parse::<u32>()
                .map_err(|_| CoreError::invalid_input(format!("unknown day-count basis '{s}'")))
                .and_then(Self::custom),
        }
    }
}
