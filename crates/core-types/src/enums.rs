use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often interest is credited to a growing balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Daily,
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

/// How often money is added to a growing balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

/// How often a loan payment is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

/// Whether a contribution lands before or after the sub-period's interest accrues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionTiming {
    #[default]
    Beginning,
    End,
}

/// What the saver is saving for. Only used to pick a default horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTag {
    #[default]
    Retirement,
    HomePurchase,
    Education,
    EmergencyFund,
    Wealth,
}

impl fmt::Display for ContributionTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContributionTiming::Beginning => write!(f, "beginning"),
            ContributionTiming::End => write!(f, "end"),
        }
    }
}

impl FromStr for ContributionTiming {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginning" | "start" => Ok(ContributionTiming::Beginning),
            "end" => Ok(ContributionTiming::End),
            other => Err(CoreError::InvalidInput(
                "contribution_timing".to_string(),
                format!("unknown timing '{}'", other),
            )),
        }
    }
}

impl fmt::Display for GoalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GoalTag::Retirement => "retirement",
            GoalTag::HomePurchase => "home_purchase",
            GoalTag::Education => "education",
            GoalTag::EmergencyFund => "emergency_fund",
            GoalTag::Wealth => "wealth",
        };
        f.write_str(name)
    }
}

impl FromStr for GoalTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "retirement" => Ok(GoalTag::Retirement),
            "home_purchase" | "home" => Ok(GoalTag::HomePurchase),
            "education" => Ok(GoalTag::Education),
            "emergency_fund" | "emergency" => Ok(GoalTag::EmergencyFund),
            "wealth" => Ok(GoalTag::Wealth),
            other => Err(CoreError::InvalidInput(
                "goal".to_string(),
                format!("unknown goal '{}'", other),
            )),
        }
    }
}
