use crate::error::AnalyticsError;
use crate::report::{GrowthSummary, MortgageSummary};
use amortization::{AncillaryCosts, Schedule};
use core_types::{
    CoreError, DecimalExt, Frequency, FrequencyInfo, GrowthParameters, GrowthYear,
    MortgageParameters,
};
use rust_decimal::Decimal;

/// A stateless calculator for deriving summary statistics from finished ledgers.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarizes a growth ledger.
    ///
    /// # Arguments
    ///
    /// * `params` - The parameter set the ledger was projected from.
    /// * `ledger` - The full year-by-year ledger, in order.
    /// * `withdrawal_rate` - Annual withdrawal rate in percent for the income estimate.
    pub fn summarize_growth(
        &self,
        params: &GrowthParameters,
        ledger: &[GrowthYear],
        withdrawal_rate: Decimal,
    ) -> Result<GrowthSummary, AnalyticsError> {
        let last = ledger
            .last()
            .ok_or_else(|| AnalyticsError::NotEnoughData("growth ledger is empty".to_string()))?;

        let mut report = GrowthSummary::new();
        report.years = last.year;

        self.calculate_totals(params, ledger, &mut report)?;

        report.future_value = last.ending_balance;
        report.inflation_adjusted_value = last.real_value;
        report.after_tax_value = last.after_tax_value;
        report.effective_annual_rate =
            effective_annual_rate(params.compounding.resolve(), params.annual_rate)?;
        report.sustainable_monthly_income = report
            .future_value
            .try_mul(withdrawal_rate.percent_to_fraction(), "sustainable income")?
            .try_div(Decimal::from(12), "sustainable income")?;

        Ok(report)
    }

    /// Summarizes an amortization schedule, adding the ancillary housing costs.
    pub fn summarize_mortgage(
        &self,
        params: &MortgageParameters,
        schedule: &Schedule,
    ) -> Result<MortgageSummary, AnalyticsError> {
        let last = schedule
            .payments
            .last()
            .ok_or_else(|| AnalyticsError::NotEnoughData("payment ledger is empty".to_string()))?;
        let ancillary = AncillaryCosts::from_parameters(params)?;

        let mut report = MortgageSummary::new();
        report.loan_amount = schedule.loan_amount;
        report.payment_count = schedule.payment_count;
        report.payoff_year = last.year;

        // --- Per-payment ---
        report.periodic_payment = schedule.payment;
        report.periodic_ancillary = ancillary.per_payment;
        report.periodic_outlay = schedule.payment.try_add(ancillary.per_payment, "outlay")?;
        report.monthly_ancillary = ancillary.monthly;

        // --- Lifetime ---
        report.total_paid = schedule
            .payments
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.try_add(p.payment, "total paid"))?;
        report.total_interest = last.cumulative_interest;
        report.total_ancillary = ancillary.lifetime;
        report.total_cost = report.total_paid.try_add(ancillary.lifetime, "total cost")?;

        // --- Ratios ---
        report.effective_annual_rate =
            effective_annual_rate(params.payment_frequency.resolve(), params.annual_rate)?;
        if params.home_price > Decimal::ZERO {
            report.loan_to_value = schedule
                .loan_amount
                .try_div(params.home_price, "loan to value")?
                .try_mul(Decimal::ONE_HUNDRED, "loan to value")?;
        }

        tracing::debug!(
            total_paid = %report.total_paid.round_currency(),
            total_cost = %report.total_cost.round_currency(),
            "Mortgage summary calculated."
        );

        Ok(report)
    }

    /// Sums contributions (including the initial amount) and interest.
    fn calculate_totals(
        &self,
        params: &GrowthParameters,
        ledger: &[GrowthYear],
        report: &mut GrowthSummary,
    ) -> Result<(), AnalyticsError> {
        let mut contributed = params.principal;
        let mut interest = Decimal::ZERO;

        for year in ledger {
            contributed = contributed.try_add(year.contributions, "total contributed")?;
            interest = interest.try_add(year.interest, "total interest")?;
        }

        report.total_contributed = contributed;
        report.total_interest = interest;
        Ok(())
    }
}

/// `((1 + annual/ppy)^ppy - 1) * 100`, in percent.
pub fn effective_annual_rate(
    frequency: FrequencyInfo,
    annual_rate: Decimal,
) -> Result<Decimal, CoreError> {
    let periodic = frequency.periodic_rate(annual_rate)?;
    Decimal::ONE
        .try_add(periodic, "effective rate")?
        .try_powu(frequency.periods_per_year.into(), "effective rate")?
        .try_sub(Decimal::ONE, "effective rate")?
        .try_mul(Decimal::ONE_HUNDRED, "effective rate")
}
