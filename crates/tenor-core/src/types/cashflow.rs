//! Cashflow schedules.

use serde::{Deserialize, Serialize};

use crate::basis::DayCountBasis;
use crate::error::{CoreError, CoreResult};

/// A single amount received (or paid, if negative) at a time offset in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cashflow {
    /// Signed amount.
    pub amount: f64,
    /// Time offset from today, in years.
    pub time: f64,
}

impl Cashflow {
    /// Creates a new cashflow.
    #[must_use]
    pub fn new(amount: f64, time: f64) -> Self {
        Self { amount, time }
    }
}

/// Ordered sequence of cashflows.
///
/// Times are usually increasing, but nothing in Tenor relies on it.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::CashflowSchedule;
///
/// let schedule = CashflowSchedule::new(&[1000.0, -200.0, 300.0], &[0.5, 1.0, 1.5]).unwrap();
/// assert_eq!(schedule.len(), 3);
///
/// let yearly = CashflowSchedule::yearly(&[6.0, 6.0, 106.0]);
/// assert_eq!(yearly.times(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashflowSchedule {
    flows: Vec<Cashflow>,
}

impl CashflowSchedule {
    /// Pairs amounts with explicit year offsets.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LengthMismatch`] if the slices differ in length and
    /// [`CoreError::InvalidInput`] if any value is not finite.
    pub fn new(amounts: &[f64], times: &[f64]) -> CoreResult<Self> {
        if amounts.len() != times.len() {
            return Err(CoreError::LengthMismatch {
                amounts: amounts.len(),
                times: times.len(),
            });
        }
        if amounts.iter().chain(times).any(|v| !v.is_finite()) {
            return Err(CoreError::invalid_input(
                "cashflow amounts and times must be finite",
            ));
        }

        Ok(Self {
            flows: amounts
                .iter()
                .zip(times)
                .map(|(&amount, &time)| Cashflow::new(amount, time))
                .collect(),
        })
    }

    /// Places each amount on consecutive whole years starting at year 1.
    #[must_use]
    pub fn yearly(amounts: &[f64]) -> Self {
        Self {
            flows: amounts
                .iter()
                .enumerate()
                .map(|(i, &amount)| Cashflow::new(amount, (i + 1) as f64))
                .collect(),
        }
    }

    /// Pairs amounts with day offsets, normalised to years by `basis`.
    pub fn from_days(amounts: &[f64], days: &[f64], basis: DayCountBasis) -> CoreResult<Self> {
        let times: Vec<f64> = days.iter().map(|&d| basis.year_fraction(d)).collect();
        Self::new(amounts, &times)
    }

    /// Returns the cashflows in order.
    #[must_use]
    pub fn flows(&self) -> &[Cashflow] {
        &self.flows
    }

    /// Iterates over the cashflows.
    pub fn iter(&self) -> std::slice::Iter<'_, Cashflow> {
        self.flows.iter()
    }

    /// Returns the amounts.
    #[must_use]
    pub fn amounts(&self) -> Vec<f64> {
        self.flows.iter().map(|cf| cf.amount).collect()
    }

    /// Returns the time offsets in years.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.flows.iter().map(|cf| cf.time).collect()
    }

    /// Number of cashflows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if the schedule holds no cashflows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

impl<'a> IntoIterator for &'a CashflowSchedule {
    type Item = &'a Cashflow;
    type IntoIter = std::slice::Iter<'a, Cashflow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

impl FromIterator<Cashflow> for CashflowSchedule {
    fn from_iter<I: IntoIterator<Item = Cashflow>>(iter: I) -> Self {
        Self {
            flows: iter.into_iter().collect(),
        }
    }
}
