use crate::error::GrowthError;
use core_types::{ContributionTiming, DecimalExt, Frequency, GrowthParameters, GrowthYear};
use rust_decimal::Decimal;

/// Scale of a single sub-period deposit. Fixed so that a year's deposits add up
/// without the accumulator ever having to round.
const DEPOSIT_DP: u32 = 12;

/// Projects `params` forward over `horizon_years`, one ledger row per year.
///
/// The caller resolves the horizon (explicit years or the goal's default) and is
/// expected to have validated `params` first.
pub fn project(params: &GrowthParameters, horizon_years: u32) -> Result<Vec<GrowthYear>, GrowthError> {
    if horizon_years == 0 {
        return Err(GrowthError::InvalidHorizon(horizon_years));
    }

    let compounding = params.compounding.resolve();
    let contribution_frequency = params.contribution_frequency.resolve();
    let sub_periods = compounding.periods_per_year;

    let periodic_rate = compounding.periodic_rate(params.annual_rate)?;

    // The year's contributions, pro-rated over the compounding sub-periods. The
    // last sub-period takes the remainder so each year sums to the annual amount.
    let annual_contribution = params
        .contribution
        .try_mul(contribution_frequency.periods(), "annual contribution")?;
    let sub_period_contribution = compounding
        .per_period_amount(annual_contribution)?
        .round_dp(DEPOSIT_DP);
    let final_sub_period_contribution = annual_contribution.try_sub(
        sub_period_contribution.try_mul(Decimal::from(sub_periods - 1), "contribution remainder")?,
        "contribution remainder",
    )?;

    let deflator_base = Decimal::ONE.try_sub(params.inflation_rate.percent_to_fraction(), "deflator")?;
    let tax_fraction = params.tax_rate.percent_to_fraction();

    let mut ledger = Vec::with_capacity(horizon_years as usize);
    let mut balance = params.principal;
    let mut contributed_to_date = params.principal;

    for year in 1..=horizon_years {
        let starting_balance = balance;
        let mut contributions = Decimal::ZERO;
        let mut interest = Decimal::ZERO;

        for sub_period in 1..=sub_periods {
            let deposit = if sub_period == sub_periods {
                final_sub_period_contribution
            } else {
                sub_period_contribution
            };

            let accrued = match params.contribution_timing {
                ContributionTiming::Beginning => {
                    balance = balance.try_add(deposit, "balance")?;
                    let accrued = balance.try_mul(periodic_rate, "interest")?;
                    balance = balance.try_add(accrued, "balance")?;
                    accrued
                }
                ContributionTiming::End => {
                    let accrued = balance.try_mul(periodic_rate, "interest")?;
                    balance = balance.try_add(accrued, "balance")?.try_add(deposit, "balance")?;
                    accrued
                }
            };

            contributions = contributions.try_add(deposit, "yearly contributions")?;
            interest = interest.try_add(accrued, "yearly interest")?;
        }

        contributed_to_date = contributed_to_date.try_add(contributions, "total contributed")?;

        // Simple deflation by the cumulative inflation factor, not a second compounding process.
        let real_value = balance.try_mul(deflator_base.try_powu(year.into(), "deflator")?, "real value")?;

        let gain = balance.try_sub(contributed_to_date, "unrealized gain")?.floor_zero();
        let after_tax_value = balance.try_sub(gain.try_mul(tax_fraction, "tax")?, "after-tax value")?;

        tracing::debug!(
            year,
            ending_balance = %balance.round_currency(),
            interest = %interest.round_currency(),
            "Projected year."
        );

        ledger.push(GrowthYear {
            year,
            starting_balance,
            contributions,
            interest,
            ending_balance: balance,
            real_value,
            after_tax_value,
        });
    }

    tracing::info!(
        years = horizon_years,
        compounding = compounding.label,
        future_value = %balance.round_currency(),
        "Growth projection complete."
    );

    Ok(ledger)
}
