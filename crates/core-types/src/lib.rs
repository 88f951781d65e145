pub mod decimal;
pub mod enums;
pub mod error;
pub mod frequency;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use decimal::{CURRENCY_DP, CURRENCY_UNIT, DecimalExt};
pub use enums::{
    CompoundingFrequency, ContributionFrequency, ContributionTiming, GoalTag, PaymentFrequency,
};
pub use error::CoreError;
pub use frequency::{Frequency, FrequencyInfo};
pub use structs::{
    GrowthParameters, GrowthYear, MortgageParameters, MortgagePayment, MortgageYear,
    ValidationError, ValidationErrors,
};
