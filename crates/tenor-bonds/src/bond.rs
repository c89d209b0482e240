//! Coupon bond valuation parameters.

use serde::{Deserialize, Serialize};

use tenor_core::{DayCountBasis, Frequency};

use crate::error::{ensure_non_negative, ensure_positive, BondError, BondResult};

/// The inputs every closed-form bond price shares.
///
/// The stub to the next coupon is discounted over
/// `days_to_next_coupon / basis.days_in_year()`. For non-annual bonds pass a
/// basis whose length matches the compounding period so the two describe
/// the same period.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::CouponBond;
/// use tenor_core::{DayCountBasis, Frequency};
///
/// let bond = CouponBond::new(100.0, 6.0, Frequency::Annual, 9, 100.0)
///     .unwrap()
///     .with_basis(DayCountBasis::Act360);
/// assert_eq!(bond.coupons_remaining(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CouponBond {
    notional: f64,
    coupon_rate: f64,
    frequency: Frequency,
    coupons_remaining: u32,
    days_to_next_coupon: f64,
    basis: DayCountBasis,
}

impl CouponBond {
    /// Creates a bond on the bond-market basis.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidSpec`] if the notional is not positive, the
    /// coupon rate is negative, no coupons remain, or the days to the next
    /// coupon are negative.
    pub fn new(
        notional: f64,
        coupon_rate: f64,
        frequency: Frequency,
        coupons_remaining: u32,
        days_to_next_coupon: f64,
    ) -> BondResult<Self> {
        ensure_positive("notional", notional)?;
        ensure_non_negative("coupon rate", coupon_rate)?;
        ensure_non_negative("days to next coupon", days_to_next_coupon)?;
        if coupons_remaining == 0 {
            return Err(BondError::invalid_spec("at least one coupon must remain"));
        }

        Ok(Self {
            notional,
            coupon_rate,
            frequency,
            coupons_remaining,
            days_to_next_coupon,
            basis: DayCountBasis::BOND_MARKET,
        })
    }

    /// Creates a stripped coupon or zero-coupon bond. `periods` counts the
    /// remaining quasi-coupon dates.
    pub fn zero_coupon(
        notional: f64,
        frequency: Frequency,
        periods: u32,
        days_to_next_coupon: f64,
    ) -> BondResult<Self> {
        Self::new(notional, 0.0, frequency, periods, days_to_next_coupon)
    }

    /// Sets the day-count basis used for the stub period.
    #[must_use]
    pub fn with_basis(mut self, basis: DayCountBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Returns a copy with a different coupon rate.
    pub fn with_coupon_rate(self, coupon_rate: f64) -> BondResult<Self> {
        ensure_non_negative("coupon rate", coupon_rate)?;
        Ok(Self {
            coupon_rate,
            ..self
        })
    }

    /// Redemption amount.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Annual coupon rate in percent.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Coupon frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Coupons still to be paid, including the next one.
    #[must_use]
    pub fn coupons_remaining(&self) -> u32 {
        self.coupons_remaining
    }

    /// Days until the next coupon.
    #[must_use]
    pub fn days_to_next_coupon(&self) -> f64 {
        self.days_to_next_coupon
    }

    /// Day-count basis of the stub period.
    #[must_use]
    pub fn basis(&self) -> DayCountBasis {
        self.basis
    }

    /// Stub period to the next coupon, as a fraction of `basis`.
    #[must_use]
    pub fn stub_fraction(&self) -> f64 {
        self.basis.year_fraction(self.days_to_next_coupon)
    }
}
