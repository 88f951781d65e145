use analytics::{GrowthSummary, MortgageSummary};
use core_types::{GrowthParameters, GrowthYear, MortgageParameters, MortgagePayment, MortgageYear};
use serde::Serialize;

/// A finished growth projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthOutcome {
    pub parameters: GrowthParameters,
    /// The horizon actually used, after falling back to the goal's default.
    pub horizon_years: u32,
    pub periods: Vec<GrowthYear>,
    pub summary: GrowthSummary,
}

/// A finished amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortgageOutcome {
    pub parameters: MortgageParameters,
    pub periods: Vec<MortgagePayment>,
    pub yearly: Vec<MortgageYear>,
    pub summary: MortgageSummary,
}
