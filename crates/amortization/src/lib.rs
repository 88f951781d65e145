//! # Mortgage Amortization Scheduler
//!
//! Builds the payment-by-payment ledger of a fixed-rate, fully amortizing loan,
//! its yearly roll-up, and the ancillary housing costs paid alongside it.
//!
//! - `schedule`: fixed payment plus the full ledger. A 0% loan is repaid in equal
//!   principal-only payments; the annuity formula is undefined there.
//! - `yearly_rollup`: one row per loan year, for charting and review.
//! - `AncillaryCosts`: property tax, insurance, mortgage insurance and association
//!   fees. They sit on top of principal and interest and never amortize anything.

pub mod ancillary;
pub mod error;
pub mod rollup;
pub mod schedule;

pub use ancillary::AncillaryCosts;
pub use error::ScheduleError;
pub use rollup::yearly_rollup;
pub use schedule::{Schedule, payment_for, schedule};
