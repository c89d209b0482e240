//! # Tenor Rates
//!
//! Money market instruments for the Tenor valuation library.
//!
//! This crate provides:
//!
//! - **Discount instruments**: prices from yields and discount rates,
//!   conversions between the two, bond-equivalent yields
//! - **Certificates of deposit**: proceeds, secondary market prices and
//!   holding-period yields
//! - **Annuities**: deferred, due and perpetual
//! - **Forwards**: forward-forward rates, FRAs, STIR futures and strips
//!
//! Rates are percentages and day counts are plain numbers of days, as in
//! [`tenor_core`].
//!
//! ## Example
//!
//! ```rust
//! use tenor_rates::prelude::*;
//!
//! let bey = bond_equivalent_yield(8.0, 100.0, DiscountBasis::default()).unwrap();
//! assert!((bey - 8.2955).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

pub mod annuity;
pub mod deposits;
pub mod discount;
pub mod error;
pub mod forwards;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::discount::{
        bond_equivalent_yield, discount_rate_from_bond_equivalent_yield, price_from_discount_rate,
        price_from_yield, yield_from_discount_rate, DiscountBasis,
    };
    pub use crate::error::{RatesError, RatesResult};
    pub use crate::forwards::{forward_forward_rate, fra_settlement, ContractSplit};

    pub use tenor_core::DayCountBasis;
}

pub use discount::DiscountBasis;
pub use error::{RatesError, RatesResult};
