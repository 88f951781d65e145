//! Frequency resolution: every frequency variant maps to a whole number of
//! periods per year and a human label.

use crate::decimal::DecimalExt;
use crate::enums::{CompoundingFrequency, ContributionFrequency, PaymentFrequency};
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Resolved metadata for one frequency variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyInfo {
    /// Always at least 1.
    pub periods_per_year: u32,
    pub label: &'static str,
}

const DAILY: FrequencyInfo = FrequencyInfo { periods_per_year: 365, label: "Daily" };
const MONTHLY: FrequencyInfo = FrequencyInfo { periods_per_year: 12, label: "Monthly" };
const QUARTERLY: FrequencyInfo = FrequencyInfo { periods_per_year: 4, label: "Quarterly" };
const ANNUALLY: FrequencyInfo = FrequencyInfo { periods_per_year: 1, label: "Annually" };

impl FrequencyInfo {
    pub fn periods(&self) -> Decimal {
        Decimal::from(self.periods_per_year)
    }

    /// Converts an annual nominal rate in percent into a per-period fraction.
    pub fn periodic_rate(&self, annual_rate_pct: Decimal) -> Result<Decimal, CoreError> {
        annual_rate_pct
            .percent_to_fraction()
            .try_div(self.periods(), "periodic rate")
    }

    /// Spreads an annual amount evenly over the periods of one year.
    pub fn per_period_amount(&self, annual_amount: Decimal) -> Result<Decimal, CoreError> {
        annual_amount.try_div(self.periods(), "per-period amount")
    }
}

/// Implemented by every closed frequency enum.
pub trait Frequency: Copy {
    fn resolve(self) -> FrequencyInfo;

    fn periods_per_year(self) -> u32 {
        self.resolve().periods_per_year
    }

    fn label(self) -> &'static str {
        self.resolve().label
    }
}

impl Frequency for CompoundingFrequency {
    fn resolve(self) -> FrequencyInfo {
        match self {
            CompoundingFrequency::Daily => DAILY,
            CompoundingFrequency::Monthly => MONTHLY,
            CompoundingFrequency::Quarterly => QUARTERLY,
            CompoundingFrequency::Annually => ANNUALLY,
        }
    }
}

impl Frequency for ContributionFrequency {
    fn resolve(self) -> FrequencyInfo {
        match self {
            ContributionFrequency::Monthly => MONTHLY,
            ContributionFrequency::Quarterly => QUARTERLY,
            ContributionFrequency::Annually => ANNUALLY,
        }
    }
}

impl Frequency for PaymentFrequency {
    fn resolve(self) -> FrequencyInfo {
        match self {
            PaymentFrequency::Monthly => MONTHLY,
            PaymentFrequency::Quarterly => QUARTERLY,
            PaymentFrequency::Annually => ANNUALLY,
        }
    }
}

macro_rules! frequency_text {
    ($ty:ident, $field:literal, { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    other => Err(CoreError::InvalidInput(
                        $field.to_string(),
                        format!("unknown frequency '{}'", other),
                    )),
                }
            }
        }
    };
}

frequency_text!(CompoundingFrequency, "compounding", {
    "daily" => Daily,
    "monthly" => Monthly,
    "quarterly" => Quarterly,
    "annually" => Annually,
});

frequency_text!(ContributionFrequency, "contribution_frequency", {
    "monthly" => Monthly,
    "quarterly" => Quarterly,
    "annually" => Annually,
});

frequency_text!(PaymentFrequency, "payment_frequency", {
    "monthly" => Monthly,
    "quarterly" => Quarterly,
    "annually" => Annually,
});
