//! Coercion of raw input into the configured ranges, for callers that prefer
//! adjusting a value to rejecting it (e.g. a slider that overshot).

use crate::mortgage::minimum_down_payment;
use configuration::Config;
use core_types::{CURRENCY_UNIT, GrowthParameters, MortgageParameters};
use rust_decimal::Decimal;

pub fn clamp_growth(params: GrowthParameters, config: &Config) -> GrowthParameters {
    let limits = &config.growth;
    GrowthParameters {
        principal: limits.principal.clamp(params.principal),
        contribution: limits.contribution.clamp(params.contribution),
        annual_rate: limits.annual_rate.clamp(params.annual_rate),
        years: params.years.map(|y| y.clamp(1, limits.max_years)),
        inflation_rate: limits.inflation_rate.clamp(params.inflation_rate),
        tax_rate: limits.tax_rate.clamp(params.tax_rate),
        ..params
    }
}

pub fn clamp_mortgage(params: MortgageParameters, config: &Config) -> MortgageParameters {
    let limits = &config.mortgage;
    let home_price = limits.home_price.clamp(params.home_price);

    // The price is in range now, so the minimum share cannot overflow.
    let floor = minimum_down_payment(home_price, limits).unwrap_or(Decimal::ZERO);
    let ceiling = (home_price - CURRENCY_UNIT).max(Decimal::ZERO);
    let down_payment = params.down_payment.max(floor).min(ceiling);

    MortgageParameters {
        home_price,
        down_payment,
        annual_rate: limits.annual_rate.clamp(params.annual_rate),
        term_years: params.term_years.clamp(1, limits.max_term_years),
        property_tax_annual: limits.property_tax_annual.clamp(params.property_tax_annual),
        insurance_annual: limits.insurance_annual.clamp(params.insurance_annual),
        mortgage_insurance_monthly: limits
            .mortgage_insurance_monthly
            .clamp(params.mortgage_insurance_monthly),
        hoa_monthly: limits.hoa_monthly.clamp(params.hoa_monthly),
        ..params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_growth, validate_mortgage};
    use rust_decimal_macros::dec;

    #[test]
    fn clamped_growth_parameters_validate() {
        let config = Config::default();
        let raw = GrowthParameters {
            principal: dec!(-500),
            annual_rate: dec!(99),
            years: Some(80),
            tax_rate: dec!(70),
            ..GrowthParameters::default()
        };
        assert!(!validate_growth(&raw, &config).is_empty());

        let clamped = clamp_growth(raw, &config);
        assert_eq!(clamped.principal, Decimal::ZERO);
        assert_eq!(clamped.annual_rate, dec!(30));
        assert_eq!(clamped.years, Some(50));
        assert!(validate_growth(&clamped, &config).is_empty());
    }

    #[test]
    fn clamped_mortgage_parameters_validate() {
        let config = Config::default();
        let raw = MortgageParameters {
            down_payment: dec!(400000),
            term_years: 0,
            annual_rate: dec!(-2),
            ..MortgageParameters::default()
        };
        let clamped = clamp_mortgage(raw, &config);
        assert_eq!(clamped.down_payment, dec!(299999.99));
        assert_eq!(clamped.term_years, 1);
        assert_eq!(clamped.annual_rate, Decimal::ZERO);
        assert!(validate_mortgage(&clamped, &config).is_empty());
    }

    #[test]
    fn small_down_payment_is_raised_to_the_minimum_share() {
        let raw = MortgageParameters {
            down_payment: Decimal::ZERO,
            ..MortgageParameters::default()
        };
        let clamped = clamp_mortgage(raw, &Config::default());
        assert_eq!(clamped.down_payment, dec!(9000));
    }
}
