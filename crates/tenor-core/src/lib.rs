//! # Tenor Core
//!
//! Foundational building blocks for the Tenor valuation library.
//!
//! This crate provides the basis layer every other Tenor crate builds on:
//!
//! - **Day-count bases**: days-in-year constants for ACT/365, ACT/360, ACT/ACT
//!   and working-day conventions
//! - **Types**: coupon [`Frequency`] and dated [`CashflowSchedule`]
//! - **Interest**: conversions between simple, compound, effective, nominal and
//!   continuously compounded rates
//! - **Time value of money**: present/future values, discount factors and NPV
//!
//! ## Conventions
//!
//! Every rate crossing the public API is a percentage (`6.0` means 6%).
//! Functions rescale to fractions internally. Day counts are plain numbers of
//! days; no calendar arithmetic happens anywhere in Tenor.
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! // 100 invested for 123 days at 5% on the bond market basis
//! let amount = tenor_core::interest::simple_interest(100.0, 5.0, 123.0, DayCountBasis::Act365);
//! assert!((amount - 101.68).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

pub mod basis;
pub mod error;
pub mod interest;
pub mod tvm;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::basis::DayCountBasis;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Cashflow, CashflowSchedule, Frequency};
}

pub use basis::DayCountBasis;
pub use error::{CoreError, CoreResult};
pub use types::{Cashflow, CashflowSchedule, Frequency};
