use crate::rules::{check_bounds, check_years};
use configuration::{Config, MortgageLimits};
use core_types::{MortgageParameters, ValidationError};
use rust_decimal::Decimal;

/// Smallest acceptable down payment for `home_price`, or `None` if the product
/// does not fit in a decimal.
pub fn minimum_down_payment(home_price: Decimal, limits: &MortgageLimits) -> Option<Decimal> {
    home_price
        .checked_mul(limits.min_down_payment_pct)?
        .checked_div(Decimal::ONE_HUNDRED)
}

/// Checks every mortgage field against the bounds table, plus the down payment
/// rules that relate it to the price.
pub fn validate_mortgage(params: &MortgageParameters, config: &Config) -> Vec<ValidationError> {
    let limits = &config.mortgage;
    let mut errors = Vec::new();

    check_bounds(&mut errors, "home_price", "Home price", params.home_price, &limits.home_price);

    // --- Down payment: relative to the price, not a fixed range ---
    if params.down_payment < Decimal::ZERO {
        errors.push(ValidationError::new(
            "down_payment",
            "Down payment cannot be negative",
        ));
    } else if params.down_payment >= params.home_price {
        errors.push(ValidationError::new(
            "down_payment",
            "Down payment must be less than the home price",
        ));
    } else if let Some(minimum) = minimum_down_payment(params.home_price, limits) {
        if params.down_payment < minimum {
            errors.push(ValidationError::new(
                "down_payment",
                format!(
                    "Down payment must be at least {}% of the home price",
                    limits.min_down_payment_pct
                ),
            ));
        }
    }

    check_bounds(
        &mut errors,
        "annual_rate",
        "Interest rate",
        params.annual_rate,
        &limits.annual_rate,
    );
    check_years(
        &mut errors,
        "term_years",
        "Loan term",
        params.term_years,
        limits.max_term_years,
    );
    check_bounds(
        &mut errors,
        "property_tax_annual",
        "Property tax",
        params.property_tax_annual,
        &limits.property_tax_annual,
    );
    check_bounds(
        &mut errors,
        "insurance_annual",
        "Home insurance",
        params.insurance_annual,
        &limits.insurance_annual,
    );
    check_bounds(
        &mut errors,
        "mortgage_insurance_monthly",
        "Mortgage insurance",
        params.mortgage_insurance_monthly,
        &limits.mortgage_insurance_monthly,
    );
    check_bounds(&mut errors, "hoa_monthly", "HOA fees", params.hoa_monthly, &limits.hoa_monthly);

    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "Mortgage parameters rejected.");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base() -> MortgageParameters {
        MortgageParameters::default()
    }

    #[test]
    fn worked_example_is_valid() {
        assert!(validate_mortgage(&base(), &Config::default()).is_empty());
    }

    #[test]
    fn down_payment_equal_to_price_is_rejected() {
        let params = MortgageParameters {
            down_payment: dec!(300000),
            ..base()
        };
        let errors = validate_mortgage(&params, &Config::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "down_payment");
        assert!(errors[0].message.contains("less than"));
    }

    #[test]
    fn down_payment_below_minimum_share_is_rejected() {
        // 3% of 300,000 is 9,000.
        let params = MortgageParameters {
            down_payment: dec!(8999.99),
            ..base()
        };
        let errors = validate_mortgage(&params, &Config::default());
        assert_eq!(errors[0].field, "down_payment");
        assert!(errors[0].message.contains("3%"));

        let at_minimum = MortgageParameters {
            down_payment: dec!(9000),
            ..base()
        };
        assert!(validate_mortgage(&at_minimum, &Config::default()).is_empty());
    }

    #[test]
    fn errors_are_collected_not_short_circuited() {
        let params = MortgageParameters {
            home_price: dec!(0),
            down_payment: dec!(10),
            annual_rate: dec!(40),
            term_years: 0,
            hoa_monthly: dec!(-1),
            ..base()
        };
        let errors = validate_mortgage(&params, &Config::default());
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["home_price", "down_payment", "annual_rate", "term_years", "hoa_monthly"]
        );
    }

    #[test]
    fn huge_price_does_not_panic() {
        let params = MortgageParameters {
            home_price: Decimal::MAX,
            down_payment: dec!(1),
            ..base()
        };
        let errors = validate_mortgage(&params, &Config::default());
        assert!(errors.iter().any(|e| e.field == "home_price"));
    }
}
