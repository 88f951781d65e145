use core_types::{CoreError, DecimalExt, Frequency, MortgageParameters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recurring housing costs paid alongside principal and interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AncillaryCosts {
    /// `property_tax/12 + insurance/12 + mortgage_insurance + hoa`.
    pub monthly: Decimal,
    /// The monthly figure converted to the loan's payment frequency.
    pub per_payment: Decimal,
    /// Over the whole term.
    pub lifetime: Decimal,
}

impl AncillaryCosts {
    pub fn from_parameters(params: &MortgageParameters) -> Result<Self, CoreError> {
        let twelve = Decimal::from(12);

        let monthly = params
            .property_tax_annual
            .try_div(twelve, "monthly property tax")?
            .try_add(
                params.insurance_annual.try_div(twelve, "monthly insurance")?,
                "monthly ancillary",
            )?
            .try_add(params.mortgage_insurance_monthly, "monthly ancillary")?
            .try_add(params.hoa_monthly, "monthly ancillary")?;

        let annual = monthly.try_mul(twelve, "annual ancillary")?;
        let per_payment = params.payment_frequency.resolve().per_period_amount(annual)?;
        let lifetime = annual.try_mul(Decimal::from(params.term_years), "lifetime ancillary")?;

        Ok(Self {
            monthly,
            per_payment,
            lifetime,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::PaymentFrequency;
    use rust_decimal_macros::dec;

    #[test]
    fn monthly_costs_combine_annual_and_monthly_items() {
        let params = MortgageParameters {
            property_tax_annual: dec!(3600),
            insurance_annual: dec!(1200),
            mortgage_insurance_monthly: dec!(100),
            hoa_monthly: dec!(50),
            ..MortgageParameters::default()
        };
        let costs = AncillaryCosts::from_parameters(&params).unwrap();
        assert_eq!(costs.monthly, dec!(550));
        assert_eq!(costs.per_payment, dec!(550));
        assert_eq!(costs.lifetime, dec!(198000));
    }

    #[test]
    fn per_payment_follows_the_payment_frequency() {
        let params = MortgageParameters {
            hoa_monthly: dec!(100),
            payment_frequency: PaymentFrequency::Quarterly,
            ..MortgageParameters::default()
        };
        let costs = AncillaryCosts::from_parameters(&params).unwrap();
        assert_eq!(costs.per_payment, dec!(300));
    }
}
