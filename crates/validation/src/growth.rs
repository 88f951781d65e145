use crate::rules::{check_bounds, check_years};
use configuration::{Config, GoalHorizons};
use core_types::{GrowthParameters, ValidationError};

/// The horizon the projector will run for: the explicit `years`, or the goal's default.
pub fn resolve_horizon(params: &GrowthParameters, horizons: &GoalHorizons) -> u32 {
    params.years.unwrap_or_else(|| horizons.for_goal(params.goal))
}

/// Checks every growth field against the bounds table.
pub fn validate_growth(params: &GrowthParameters, config: &Config) -> Vec<ValidationError> {
    let limits = &config.growth;
    let mut errors = Vec::new();

    check_bounds(&mut errors, "principal", "Initial amount", params.principal, &limits.principal);
    check_bounds(
        &mut errors,
        "contribution",
        "Contribution",
        params.contribution,
        &limits.contribution,
    );
    check_bounds(
        &mut errors,
        "annual_rate",
        "Annual rate",
        params.annual_rate,
        &limits.annual_rate,
    );
    check_bounds(
        &mut errors,
        "inflation_rate",
        "Inflation rate",
        params.inflation_rate,
        &limits.inflation_rate,
    );
    check_bounds(&mut errors, "tax_rate", "Tax rate", params.tax_rate, &limits.tax_rate);

    let horizon = resolve_horizon(params, &config.assumptions.default_horizons);
    check_years(&mut errors, "years", "Time horizon", horizon, limits.max_years);

    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "Growth parameters rejected.");
    }
    errors
}
