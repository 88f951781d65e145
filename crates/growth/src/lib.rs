//! # Compound Interest Projector
//!
//! Builds the year-by-year ledger of a balance that grows through periodic
//! contributions and compounding interest, with inflation-deflated and after-tax
//! views recorded next to each year's nominal balance.
//!
//! ## Frequency domains
//!
//! Compounding and contributions run on independent frequencies. Each year is cut
//! into the compounding frequency's sub-periods; the year's contributions are
//! pro-rated across those sub-periods regardless of how often the saver actually
//! contributes.
//!
//! ## Zero rates
//!
//! A zero nominal rate needs no special handling here: the periodic rate is only
//! ever a multiplicand, so contributions simply accumulate linearly. Only the
//! loan annuity formula divides by a rate-derived term.

pub mod error;
pub mod projector;

pub use error::GrowthError;
pub use projector::project;
