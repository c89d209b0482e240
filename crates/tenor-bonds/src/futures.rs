//! Bond forwards, bond futures and repo.

use serde::{Deserialize, Serialize};

use tenor_core::{DayCountBasis, Frequency};

use crate::error::{ensure_non_negative, ensure_positive, BondResult};

/// Carry inputs for delivering a bond at a future date.
///
/// Accrued coupon is measured against a bond year of
/// `days_in_coupon_period × frequency`; the financing leg uses `basis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondForward {
    /// Clean price of the deliverable today.
    pub clean_price: f64,
    /// Annual coupon per 100 face.
    pub coupon_rate: f64,
    /// Coupon frequency of the deliverable.
    pub frequency: Frequency,
    /// Financing (repo) rate in percent.
    pub repo_rate: f64,
    /// Days since the last coupon.
    pub days_since_last_coupon: f64,
    /// Days from today to delivery.
    pub days_to_delivery: f64,
    /// Length of the current coupon period in days.
    pub days_in_coupon_period: f64,
    /// Money market basis of the repo.
    pub basis: DayCountBasis,
}

impl BondForward {
    fn validate(&self) -> BondResult<()> {
        ensure_positive("clean price", self.clean_price)?;
        ensure_non_negative("days since last coupon", self.days_since_last_coupon)?;
        ensure_non_negative("days to delivery", self.days_to_delivery)?;
        ensure_positive("days in coupon period", self.days_in_coupon_period)
    }

    fn accrued_after(&self, days: f64) -> f64 {
        let bond_year = self.days_in_coupon_period * self.frequency.as_f64();
        self.coupon_rate * days / bond_year
    }

    /// Forward price: today's dirty price financed to delivery, less the
    /// coupon accrued by then.
    ///
    /// ```rust
    /// use tenor_bonds::futures::BondForward;
    /// use tenor_core::{DayCountBasis, Frequency};
    ///
    /// let forward = BondForward {
    ///     clean_price: 105.0,
    ///     coupon_rate: 6.0,
    ///     frequency: Frequency::SemiAnnual,
    ///     repo_rate: 5.4,
    ///     days_since_last_coupon: 23.0,
    ///     days_to_delivery: 100.0,
    ///     days_in_coupon_period: 184.0,
    ///     basis: DayCountBasis::Act360,
    /// };
    /// let futures = forward.futures_price(1.0087).unwrap();
    /// assert!((futures - 104.04).abs() < 0.01);
    /// ```
    pub fn forward_price(&self) -> BondResult<f64> {
        self.validate()?;
        let dirty_now = self.clean_price + self.accrued_after(self.days_since_last_coupon);
        let accrued_at_delivery =
            self.accrued_after(self.days_to_delivery + self.days_since_last_coupon);
        let financing = 1.0 + self.repo_rate * 0.01 * self.basis.year_fraction(self.days_to_delivery);
        Ok(dirty_now * financing - accrued_at_delivery)
    }

    /// Futures price: the forward price divided by the conversion factor.
    pub fn futures_price(&self, conversion_factor: f64) -> BondResult<f64> {
        ensure_positive("conversion factor", conversion_factor)?;
        Ok(self.forward_price()? / conversion_factor)
    }
}

/// Futures notional per unit of bond face value needed to hedge it.
pub fn hedge_ratio(
    repo_rate: f64,
    conversion_factor: f64,
    days_to_delivery: f64,
    basis: DayCountBasis,
) -> BondResult<f64> {
    ensure_positive("conversion factor", conversion_factor)?;
    ensure_non_negative("days to delivery", days_to_delivery)?;
    Ok(conversion_factor / (1.0 + repo_rate * 0.01 * basis.year_fraction(days_to_delivery)))
}

/// Futures notional needed to hedge `face_value` of the deliverable.
pub fn futures_hedge_notional(
    face_value: f64,
    repo_rate: f64,
    conversion_factor: f64,
    days_to_delivery: f64,
    basis: DayCountBasis,
) -> BondResult<f64> {
    Ok(face_value * hedge_ratio(repo_rate, conversion_factor, days_to_delivery, basis)?)
}

/// Inputs of a cash-and-carry trade: buy the bond, repo it, sell the
/// future and deliver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashAndCarry {
    /// Clean price of the bond today.
    pub clean_price: f64,
    /// Futures price.
    pub futures_price: f64,
    /// Coupon accrued today.
    pub accrued_now: f64,
    /// Coupon accrued at delivery.
    pub accrued_at_delivery: f64,
    /// Interim coupon income reinvested to delivery.
    pub coupon_reinvested: f64,
    /// Conversion factor of the deliverable.
    pub conversion_factor: f64,
    /// Days from today to delivery.
    pub days_to_delivery: f64,
    /// Money market basis of the repo.
    pub basis: DayCountBasis,
}

impl CashAndCarry {
    fn validate(&self) -> BondResult<()> {
        ensure_positive("clean price", self.clean_price)?;
        ensure_positive("conversion factor", self.conversion_factor)?;
        ensure_positive("days to delivery", self.days_to_delivery)
    }

    /// Repo rate at which the trade breaks even, in percent.
    pub fn implied_repo_rate(&self) -> BondResult<f64> {
        self.validate()?;
        let proceeds =
            self.futures_price * self.conversion_factor + self.accrued_at_delivery + self.coupon_reinvested;
        let cost = self.clean_price + self.accrued_now;
        Ok((proceeds / cost - 1.0) * (self.basis.days_in_year() / self.days_to_delivery) * 100.0)
    }

    /// Profit of the trade on `notional` futures, financed at `repo_rate`.
    pub fn arbitrage_profit(&self, notional: f64, repo_rate: f64) -> BondResult<f64> {
        self.validate()?;
        let bond_face = notional / self.conversion_factor;
        let initial_cost = bond_face * (self.clean_price + self.accrued_now) / 100.0;
        let borrowing_cost =
            initial_cost * (1.0 + repo_rate * 0.01 * self.basis.year_fraction(self.days_to_delivery));
        let receipts = bond_face
            * (self.futures_price * self.conversion_factor + self.accrued_at_delivery)
            / 100.0;
        Ok(receipts - borrowing_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn forward() -> BondForward {
        BondForward {
            clean_price: 105.0,
            coupon_rate: 6.0,
            frequency: Frequency::SemiAnnual,
            repo_rate: 5.4,
            days_since_last_coupon: 23.0,
            days_to_delivery: 100.0,
            days_in_coupon_period: 184.0,
            basis: DayCountBasis::Act360,
        }
    }

    fn carry() -> CashAndCarry {
        CashAndCarry {
            clean_price: 105.0,
            futures_price: 104.0,
            accrued_now: 2.1,
            accrued_at_delivery: 2.8,
            coupon_reinvested: 0.0,
            conversion_factor: 1.034,
            days_to_delivery: 100.0,
            basis: DayCountBasis::Act360,
        }
    }

    #[test]
    fn test_futures_price() {
        assert_relative_eq!(forward().futures_price(1.0087).unwrap(), 104.04, epsilon = 0.01);
        assert!(forward().futures_price(0.0).is_err());
    }

    #[test]
    fn test_forward_without_carry() {
        let mut fwd = forward();
        fwd.days_to_delivery = 0.0;
        // Same-day delivery: the forward is today's clean price.
        assert_relative_eq!(fwd.forward_price().unwrap(), 105.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hedge_notional() {
        let notional =
            futures_hedge_notional(1_000_000.0, 5.4, 1.0087, 100.0, DayCountBasis::Act360).unwrap();
        assert_relative_eq!(notional, 993_793.10, epsilon = 0.005);
    }

    #[test]
    fn test_implied_repo() {
        assert_relative_eq!(carry().implied_repo_rate().unwrap(), 10.8773, epsilon = 5e-5);
    }

    #[test]
    fn test_cash_and_carry() {
        let profit = carry().arbitrage_profit(100_000.0, 10.2).unwrap();
        assert_relative_eq!(profit, 194.87, epsilon = 0.005);
    }

    #[test]
    fn test_break_even_at_implied_repo() {
        let trade = carry();
        let repo = trade.implied_repo_rate().unwrap();
        assert_relative_eq!(trade.arbitrage_profit(100_000.0, repo).unwrap(), 0.0, epsilon = 1e-8);
    }
}
