use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate view of a finished growth ledger. Rates are in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub years: u32,
    /// Initial amount plus every contribution.
    pub total_contributed: Decimal,
    pub total_interest: Decimal,
    pub future_value: Decimal,
    /// Annualized rate after intra-year compounding.
    pub effective_annual_rate: Decimal,
    pub inflation_adjusted_value: Decimal,
    pub after_tax_value: Decimal,
    /// Monthly income the final balance could sustain at the configured withdrawal rate.
    pub sustainable_monthly_income: Decimal,
}

/// Aggregate view of a finished amortization schedule. Rates are in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageSummary {
    pub loan_amount: Decimal,
    pub payment_count: u32,

    // I. Per-payment figures
    /// Principal and interest.
    pub periodic_payment: Decimal,
    pub periodic_ancillary: Decimal,
    /// Principal, interest and ancillary costs.
    pub periodic_outlay: Decimal,
    pub monthly_ancillary: Decimal,

    // II. Lifetime totals
    /// Principal and interest over the whole term.
    pub total_paid: Decimal,
    pub total_interest: Decimal,
    pub total_ancillary: Decimal,
    /// Everything paid after closing: principal, interest and ancillary costs.
    pub total_cost: Decimal,

    // III. Ratios
    pub effective_annual_rate: Decimal,
    pub loan_to_value: Decimal,
    pub payoff_year: u32,
}

impl GrowthSummary {
    /// Creates a new, zeroed-out summary.
    pub fn new() -> Self {
        Self {
            years: 0,
            total_contributed: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            future_value: Decimal::ZERO,
            effective_annual_rate: Decimal::ZERO,
            inflation_adjusted_value: Decimal::ZERO,
            after_tax_value: Decimal::ZERO,
            sustainable_monthly_income: Decimal::ZERO,
        }
    }
}

impl Default for GrowthSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl MortgageSummary {
    /// Creates a new, zeroed-out summary.
    pub fn new() -> Self {
        Self {
            loan_amount: Decimal::ZERO,
            payment_count: 0,
            periodic_payment: Decimal::ZERO,
            periodic_ancillary: Decimal::ZERO,
            periodic_outlay: Decimal::ZERO,
            monthly_ancillary: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            total_ancillary: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            effective_annual_rate: Decimal::ZERO,
            loan_to_value: Decimal::ZERO,
            payoff_year: 0,
        }
    }
}

impl Default for MortgageSummary {
    fn default() -> Self {
        Self::new()
    }
}
