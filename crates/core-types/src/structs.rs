use crate::enums::{
    CompoundingFrequency, ContributionFrequency, ContributionTiming, GoalTag, PaymentFrequency,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==============================================================================
// Parameter sets
// ==============================================================================

/// Inputs to the compound growth projector. Rates are in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthParameters {
    pub principal: Decimal,
    /// Amount added every contribution period.
    pub contribution: Decimal,
    pub annual_rate: Decimal,
    /// Horizon in years. `None` falls back to the goal's default horizon.
    pub years: Option<u32>,
    pub compounding: CompoundingFrequency,
    pub contribution_frequency: ContributionFrequency,
    pub contribution_timing: ContributionTiming,
    pub inflation_rate: Decimal,
    pub tax_rate: Decimal,
    pub goal: GoalTag,
}

impl Default for GrowthParameters {
    fn default() -> Self {
        Self {
            principal: dec!(10000),
            contribution: dec!(500),
            annual_rate: dec!(7),
            years: None,
            compounding: CompoundingFrequency::Monthly,
            contribution_frequency: ContributionFrequency::Monthly,
            contribution_timing: ContributionTiming::Beginning,
            inflation_rate: dec!(3),
            tax_rate: dec!(15),
            goal: GoalTag::Retirement,
        }
    }
}

/// Inputs to the amortization scheduler. Rates are in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageParameters {
    pub home_price: Decimal,
    pub down_payment: Decimal,
    pub annual_rate: Decimal,
    pub term_years: u32,
    pub payment_frequency: PaymentFrequency,
    pub property_tax_annual: Decimal,
    pub insurance_annual: Decimal,
    pub mortgage_insurance_monthly: Decimal,
    pub hoa_monthly: Decimal,
}

impl Default for MortgageParameters {
    fn default() -> Self {
        Self {
            home_price: dec!(300000),
            down_payment: dec!(60000),
            annual_rate: dec!(6),
            term_years: 30,
            payment_frequency: PaymentFrequency::Monthly,
            property_tax_annual: Decimal::ZERO,
            insurance_annual: Decimal::ZERO,
            mortgage_insurance_monthly: Decimal::ZERO,
            hoa_monthly: Decimal::ZERO,
        }
    }
}

// ==============================================================================
// Ledger rows
// ==============================================================================

/// One year of the growth ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthYear {
    pub year: u32,
    pub starting_balance: Decimal,
    pub contributions: Decimal,
    pub interest: Decimal,
    pub ending_balance: Decimal,
    /// Ending balance deflated to today's purchasing power.
    pub real_value: Decimal,
    /// Ending balance less tax on the unrealized gain.
    pub after_tax_value: Decimal,
}

/// One payment of the amortization ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgagePayment {
    /// 1-based.
    pub payment_index: u32,
    /// 1-based loan year.
    pub year: u32,
    /// Calendar month (1..=12) the payment falls in.
    pub month_in_year: u32,
    pub payment: Decimal,
    pub principal_portion: Decimal,
    pub interest_portion: Decimal,
    pub remaining_balance: Decimal,
    pub cumulative_interest: Decimal,
    pub cumulative_principal: Decimal,
}

/// Yearly roll-up of the amortization ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageYear {
    pub year: u32,
    pub principal: Decimal,
    pub interest: Decimal,
    /// Balance after the year's final payment.
    pub ending_balance: Decimal,
}

// ==============================================================================
// Validation results
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A non-empty list of validation errors travelling as an `Err`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{}", describe(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![ValidationError::new(field, message)])
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
