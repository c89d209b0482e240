//! Domain types shared by every layer.
//!
//! - [`Frequency`]: coupon payments per year
//! - [`Cashflow`] / [`CashflowSchedule`]: signed amounts at year offsets

mod cashflow;
mod frequency;

pub use cashflow::{Cashflow, CashflowSchedule};
pub use frequency::Frequency;
