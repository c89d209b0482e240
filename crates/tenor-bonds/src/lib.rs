//! # Tenor Bonds
//!
//! Coupon bond valuation for the Tenor library.
//!
//! This crate provides:
//!
//! - **Pricing**: dirty, clean and ex-dividend prices, accrued interest, the
//!   Moosmüller and money market conventions, stripped bonds
//! - **Yields**: Newton-Raphson inversion of the pricing formulas with their
//!   analytic derivatives, plus the closed-form yield measures
//! - **IRR**: damped-secant internal rate of return over yearly or dated flows
//! - **Risk**: Macaulay and modified duration, convexity, duration hedging
//! - **Futures**: forward and futures prices, hedge ratios, implied repo
//!
//! ## Quick start
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//!
//! let bond = CouponBond::new(100.0, 6.0, Frequency::Annual, 9, 100.0)
//!     .unwrap()
//!     .with_basis(DayCountBasis::Act360);
//!
//! let price = dirty_price(&bond, 3.0).unwrap();
//! assert!((price - 126.0201).abs() < 1e-4);
//!
//! let y = bond_yield(&bond, price, &YieldSolverConfig::default()).unwrap();
//! assert!((y - 3.0).abs() < 1e-9);
//! ```
//!
//! Solvers never hand back an unconverged answer: iteration ceilings and
//! vanishing derivatives surface as [`tenor_math::MathError`] wrapped in
//! [`BondError::Math`].

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
#![allow(clippy::too_many_arguments)]
#![allow(clippy::float_cmp)]

pub mod bond;
pub mod config;
pub mod error;
pub mod futures;
pub mod irr;
pub mod pricing;
pub mod risk;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond::CouponBond;
    pub use crate::config::{IrrConfig, YieldSolverConfig};
    pub use crate::error::{BondError, BondResult};
    pub use crate::irr::{irr_dated, irr_dated_flows, irr_yearly};
    pub use crate::pricing::{
        accrued_interest, clean_price, dirty_price, money_market_price, moosmuller_price,
        stripped_price, PriceModel,
    };
    pub use crate::risk::{convexity, macaulay_duration, modified_duration};
    pub use crate::yields::{bond_yield, money_market_yield, moosmuller_yield};

    pub use tenor_core::{CashflowSchedule, DayCountBasis, Frequency};
}

pub use bond::CouponBond;
pub use config::{IrrConfig, YieldSolverConfig};
pub use error::{BondError, BondResult};
