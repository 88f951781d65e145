//! Labelled numeric series, one point per period, ready for a charting component.

use core_types::{DecimalExt, GrowthYear, MortgageYear};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    fn from_years<I>(name: &str, base_year: Option<i32>, values: I) -> Self
    where
        I: IntoIterator<Item = (u32, Decimal)>,
    {
        let points = values
            .into_iter()
            .map(|(year, value)| SeriesPoint {
                label: year_label(year, base_year),
                value: value.round_currency(),
            })
            .collect();
        Self {
            name: name.to_string(),
            points,
        }
    }

    /// `(label, value)` pairs in period order.
    pub fn as_pairs(&self) -> Vec<(&str, Decimal)> {
        self.points
            .iter()
            .map(|p| (p.label.as_str(), p.value))
            .collect()
    }

    pub fn max_value(&self) -> Option<Decimal> {
        self.points.iter().map(|p| p.value).max()
    }
}

/// `"Year 3"`, or the calendar year when the first year's calendar year is known.
pub fn year_label(year: u32, base_year: Option<i32>) -> String {
    match base_year {
        Some(base) => (i64::from(base) + i64::from(year) - 1).to_string(),
        None => format!("Year {}", year),
    }
}

pub fn growth_balance_series(ledger: &[GrowthYear], base_year: Option<i32>) -> ChartSeries {
    ChartSeries::from_years(
        "Balance",
        base_year,
        ledger.iter().map(|y| (y.year, y.ending_balance)),
    )
}

pub fn growth_real_value_series(ledger: &[GrowthYear], base_year: Option<i32>) -> ChartSeries {
    ChartSeries::from_years(
        "Inflation-adjusted",
        base_year,
        ledger.iter().map(|y| (y.year, y.real_value)),
    )
}

pub fn growth_after_tax_series(ledger: &[GrowthYear], base_year: Option<i32>) -> ChartSeries {
    ChartSeries::from_years(
        "After tax",
        base_year,
        ledger.iter().map(|y| (y.year, y.after_tax_value)),
    )
}

/// Cumulative money put in versus cumulative interest earned, for a stacked chart.
pub fn growth_contribution_vs_interest(
    principal: Decimal,
    ledger: &[GrowthYear],
    base_year: Option<i32>,
) -> (ChartSeries, ChartSeries) {
    let mut contributed = principal;
    let mut earned = Decimal::ZERO;
    let mut contributions = Vec::with_capacity(ledger.len());
    let mut interest = Vec::with_capacity(ledger.len());

    for year in ledger {
        contributed += year.contributions;
        earned += year.interest;
        contributions.push((year.year, contributed));
        interest.push((year.year, earned));
    }

    (
        ChartSeries::from_years("Contributions", base_year, contributions),
        ChartSeries::from_years("Interest", base_year, interest),
    )
}

pub fn mortgage_balance_series(years: &[MortgageYear], base_year: Option<i32>) -> ChartSeries {
    ChartSeries::from_years(
        "Remaining balance",
        base_year,
        years.iter().map(|y| (y.year, y.ending_balance)),
    )
}

/// Principal and interest paid each year.
pub fn mortgage_split_series(
    years: &[MortgageYear],
    base_year: Option<i32>,
) -> (ChartSeries, ChartSeries) {
    (
        ChartSeries::from_years("Principal", base_year, years.iter().map(|y| (y.year, y.principal))),
        ChartSeries::from_years("Interest", base_year, years.iter().map(|y| (y.year, y.interest))),
    )
}
