//! # Aggregation & Formatting Layer
//!
//! Turns finished ledgers into what a caller shows a user: summary statistics,
//! display strings, and labelled series for charts.
//!
//! ## Architectural Principles
//!
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless calculator. It takes
//!   a finished ledger as input and produces a summary as output. It never alters
//!   the ledger it is given.
//! - **Single Display Boundary:** The `format` module is the only place a decimal
//!   value becomes a display string.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: derives `GrowthSummary` and `MortgageSummary`.
//! - `format_currency`, `format_percentage`, `format_currency_compact`.
//! - `ChartSeries` and its builders.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod format;
pub mod report;
pub mod series;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use format::{format_currency, format_currency_compact, format_percentage};
pub use report::{GrowthSummary, MortgageSummary};
pub use series::{ChartSeries, SeriesPoint};
