//! # Calculation Engine
//!
//! The boundary every caller goes through. Each call takes a fresh parameter set
//! by value and runs the full lifecycle:
//!
//! 1. validate against the bounds table, collecting every violation;
//! 2. on success, run the pipeline once and summarize the ledger;
//! 3. return the ledger and summary, or the errors and nothing else.
//!
//! Computation faults (which validated input should never produce) are logged
//! and reported as a single `calculation` validation error, so the caller has one
//! error path. The engine keeps no state between calls.

use crate::error::EngineError;
use analytics::AnalyticsEngine;
use configuration::Config;
use core_types::{GrowthParameters, MortgageParameters, ValidationErrors};

pub mod error;
pub mod outcome;

pub use error::CALCULATION_FIELD;
pub use outcome::{GrowthOutcome, MortgageOutcome};

/// Runs both pipelines against one immutable bounds table.
#[derive(Debug)]
pub struct Calculator {
    config: Config,
    analytics: AnalyticsEngine,
}

impl Calculator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            analytics: AnalyticsEngine::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates `params` and, if valid, projects the growth ledger.
    pub fn project_growth(&self, params: GrowthParameters) -> Result<GrowthOutcome, ValidationErrors> {
        let errors = validation::validate_growth(&params, &self.config);
        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        let horizon = validation::resolve_horizon(&params, &self.config.assumptions.default_horizons);
        self.run_growth(params, horizon).map_err(|err| {
            tracing::error!(error = %err, "Growth calculation failed.");
            err.into()
        })
    }

    /// Validates `params` and, if valid, builds the amortization schedule.
    pub fn schedule_mortgage(
        &self,
        params: MortgageParameters,
    ) -> Result<MortgageOutcome, ValidationErrors> {
        let errors = validation::validate_mortgage(&params, &self.config);
        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        self.run_mortgage(params).map_err(|err| {
            tracing::error!(error = %err, "Mortgage calculation failed.");
            err.into()
        })
    }

    fn run_growth(&self, params: GrowthParameters, horizon_years: u32) -> Result<GrowthOutcome, EngineError> {
        let periods = growth::project(&params, horizon_years)?;
        let summary = self.analytics.summarize_growth(
            &params,
            &periods,
            self.config.assumptions.withdrawal_rate,
        )?;

        Ok(GrowthOutcome {
            parameters: params,
            horizon_years,
            periods,
            summary,
        })
    }

    fn run_mortgage(&self, params: MortgageParameters) -> Result<MortgageOutcome, EngineError> {
        let schedule = amortization::schedule(&params)?;
        let yearly = amortization::yearly_rollup(&schedule.payments);
        let summary = self.analytics.summarize_mortgage(&params, &schedule)?;

        Ok(MortgageOutcome {
            parameters: params,
            periods: schedule.payments,
            yearly,
            summary,
        })
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ValidationError;
    use rust_decimal_macros::dec;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn calculator_can_be_shared_across_threads() {
        assert_send_sync::<Calculator>();
        assert_send_sync::<GrowthOutcome>();
        assert_send_sync::<MortgageOutcome>();
    }

    #[test]
    fn invalid_input_returns_errors_and_no_ledger() {
        let params = MortgageParameters {
            down_payment: dec!(350000),
            ..MortgageParameters::default()
        };
        let errors = Calculator::default().schedule_mortgage(params).unwrap_err();
        assert!(!errors.errors().is_empty());
        assert!(errors.has_field("down_payment"));
    }

    #[test]
    fn computation_faults_become_a_single_calculation_error() {
        let fault = EngineError::Growth(growth::GrowthError::InvalidHorizon(0));
        let errors: ValidationErrors = fault.into();
        assert_eq!(
            errors.errors(),
            &[ValidationError::new(
                CALCULATION_FIELD,
                "Growth projection failed: A projection needs a horizon of at least one year, got 0"
            )]
        );
    }

    #[test]
    fn horizon_comes_from_the_goal_when_years_are_omitted() {
        let params = GrowthParameters {
            years: None,
            goal: core_types::GoalTag::Education,
            ..GrowthParameters::default()
        };
        let outcome = Calculator::default().project_growth(params).unwrap();
        assert_eq!(outcome.horizon_years, 18);
        assert_eq!(outcome.periods.len(), 18);
        assert_eq!(outcome.summary.years, 18);
    }
}
