use core_types::GoalTag;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The root configuration structure: the bounds table both validators read and
/// the fixed assumptions the summaries use.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub growth: GrowthLimits,
    pub mortgage: MortgageLimits,
    pub assumptions: Assumptions,
}

/// An inclusive `[min, max]` range for a single numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl Bounds {
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.max(self.min).min(self.max)
    }
}

/// Per-field bounds for the growth projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthLimits {
    pub principal: Bounds,
    pub contribution: Bounds,
    /// Annual nominal rate, in percent.
    pub annual_rate: Bounds,
    pub inflation_rate: Bounds,
    pub tax_rate: Bounds,
    /// Longest horizon accepted. The shortest is always one year.
    pub max_years: u32,
}

/// Per-field bounds for the amortization scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageLimits {
    pub home_price: Bounds,
    pub annual_rate: Bounds,
    pub property_tax_annual: Bounds,
    pub insurance_annual: Bounds,
    pub mortgage_insurance_monthly: Bounds,
    pub hoa_monthly: Bounds,
    pub max_term_years: u32,
    /// Smallest down payment accepted, as a percentage of the home price.
    pub min_down_payment_pct: Decimal,
}

/// Fixed modelling assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Annual withdrawal rate, in percent, used for the sustainable income estimate.
    pub withdrawal_rate: Decimal,
    pub default_horizons: GoalHorizons,
}

/// Default horizon, in years, for each savings goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalHorizons {
    pub retirement: u32,
    pub home_purchase: u32,
    pub education: u32,
    pub emergency_fund: u32,
    pub wealth: u32,
}

impl GoalHorizons {
    pub fn for_goal(&self, goal: GoalTag) -> u32 {
        match goal {
            GoalTag::Retirement => self.retirement,
            GoalTag::HomePurchase => self.home_purchase,
            GoalTag::Education => self.education,
            GoalTag::EmergencyFund => self.emergency_fund,
            GoalTag::Wealth => self.wealth,
        }
    }
}

// --- Default Implementations ---
// These are the built-in bounds. A `config.toml` only needs to name the values
// it wants to change.

impl Default for GrowthLimits {
    fn default() -> Self {
        Self {
            principal: Bounds::new(Decimal::ZERO, dec!(10000000)),
            contribution: Bounds::new(Decimal::ZERO, dec!(1000000)),
            annual_rate: Bounds::new(Decimal::ZERO, dec!(30)),
            inflation_rate: Bounds::new(Decimal::ZERO, dec!(20)),
            tax_rate: Bounds::new(Decimal::ZERO, dec!(60)),
            max_years: 50,
        }
    }
}

impl Default for MortgageLimits {
    fn default() -> Self {
        Self {
            home_price: Bounds::new(Decimal::ONE, dec!(100000000)),
            annual_rate: Bounds::new(Decimal::ZERO, dec!(25)),
            property_tax_annual: Bounds::new(Decimal::ZERO, dec!(1000000)),
            insurance_annual: Bounds::new(Decimal::ZERO, dec!(500000)),
            mortgage_insurance_monthly: Bounds::new(Decimal::ZERO, dec!(50000)),
            hoa_monthly: Bounds::new(Decimal::ZERO, dec!(50000)),
            max_term_years: 50,
            min_down_payment_pct: dec!(3),
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            withdrawal_rate: dec!(4),
            default_horizons: GoalHorizons::default(),
        }
    }
}

impl Default for GoalHorizons {
    fn default() -> Self {
        Self {
            retirement: 30,
            home_purchase: 5,
            education: 18,
            emergency_fund: 2,
            wealth: 20,
        }
    }
}
