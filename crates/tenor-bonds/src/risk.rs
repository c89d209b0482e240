//! Duration, convexity and duration hedging.

use serde::{Deserialize, Serialize};

use tenor_core::tvm::compound_present_value;
use tenor_core::{CashflowSchedule, Frequency};

use crate::error::{ensure_positive, BondError, BondResult};

/// Macaulay duration: PV-weighted average time of the cashflows, with each
/// flow discounted at `(1 + y)^t`.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::risk::macaulay_duration;
/// use tenor_core::CashflowSchedule;
///
/// let flows = CashflowSchedule::yearly(&[6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 106.0]);
/// let duration = macaulay_duration(5.4, &flows).unwrap();
/// assert!((duration - 7.2510).abs() < 1e-4);
/// ```
pub fn macaulay_duration(market_yield: f64, cashflows: &CashflowSchedule) -> BondResult<f64> {
    let (weighted, total) = cashflows.iter().fold((0.0, 0.0), |(weighted, total), cf| {
        let pv = compound_present_value(cf.amount, market_yield, cf.time);
        (weighted + pv * cf.time, total + pv)
    });
    if total == 0.0 || !total.is_finite() {
        return Err(BondError::domain(
            "cashflows have zero present value, duration is undefined",
        ));
    }
    Ok(weighted / total)
}

/// Macaulay duration divided by `1 + y/k`.
#[must_use]
pub fn modified_duration(duration: f64, market_yield: f64, frequency: Frequency) -> f64 {
    duration / (1.0 + market_yield * 0.01 / frequency.as_f64())
}

/// Convexity per unit of dirty price, discounting each flow per period.
pub fn convexity(
    dirty_price: f64,
    market_yield: f64,
    frequency: Frequency,
    cashflows: &CashflowSchedule,
) -> BondResult<f64> {
    ensure_positive("dirty price", dirty_price)?;
    let k = frequency.as_f64();
    let total: f64 = cashflows
        .iter()
        .map(|cf| {
            let pv = compound_present_value(cf.amount, market_yield / k, k * cf.time + 2.0);
            pv * cf.time * (cf.time + 1.0 / k)
        })
        .sum();
    Ok(total / dirty_price)
}

/// First-order price change `-P · Δy · MD` for a yield move in percent.
#[must_use]
pub fn price_change_from_modified_duration(
    dirty_price: f64,
    yield_change: f64,
    modified_duration: f64,
) -> f64 {
    -dirty_price * yield_change * 0.01 * modified_duration
}

/// First-order price change, computing the modified duration from the
/// cashflows.
pub fn price_change(
    dirty_price: f64,
    market_yield: f64,
    yield_change: f64,
    frequency: Frequency,
    cashflows: &CashflowSchedule,
) -> BondResult<f64> {
    let duration = macaulay_duration(market_yield, cashflows)?;
    let md = modified_duration(duration, market_yield, frequency);
    Ok(price_change_from_modified_duration(dirty_price, yield_change, md))
}

/// Second-order price change `-P·MD·Δy + ½·P·C·Δy²`.
pub fn price_change_with_convexity(
    dirty_price: f64,
    market_yield: f64,
    yield_change: f64,
    frequency: Frequency,
    cashflows: &CashflowSchedule,
) -> BondResult<f64> {
    let duration = macaulay_duration(market_yield, cashflows)?;
    let md = modified_duration(duration, market_yield, frequency);
    let c = convexity(dirty_price, market_yield, frequency, cashflows)?;
    let dy = yield_change * 0.01;
    Ok(-dirty_price * md * dy + 0.5 * dirty_price * c * dy * dy)
}

/// One long holding in a duration hedge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HedgePosition {
    /// Face value held.
    pub face_value: f64,
    /// Dirty price per 100 face.
    pub dirty_price: f64,
    /// Modified duration.
    pub modified_duration: f64,
}

impl HedgePosition {
    /// Creates a position.
    #[must_use]
    pub fn new(face_value: f64, dirty_price: f64, modified_duration: f64) -> Self {
        Self {
            face_value,
            dirty_price,
            modified_duration,
        }
    }

    /// Market value times modified duration.
    #[must_use]
    pub fn duration_weighted_value(&self) -> f64 {
        self.face_value * self.dirty_price * 0.01 * self.modified_duration
    }
}

/// Face value of the hedge bond to sell so its price sensitivity offsets the
/// long positions.
pub fn duration_hedge_face_value(
    hedge_dirty_price: f64,
    hedge_modified_duration: f64,
    positions: &[HedgePosition],
) -> BondResult<f64> {
    ensure_positive("hedge dirty price", hedge_dirty_price)?;
    ensure_positive("hedge modified duration", hedge_modified_duration)?;
    let exposure: f64 = positions
        .iter()
        .map(HedgePosition::duration_weighted_value)
        .sum();
    Ok(exposure / (hedge_dirty_price * 0.01 * hedge_modified_duration))
}
