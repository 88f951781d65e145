use crate::error::ScheduleError;
use core_types::{DecimalExt, Frequency, MortgageParameters, MortgagePayment};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A complete amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub loan_amount: Decimal,
    /// Per-payment rate as a fraction (monthly: annual / 1200).
    pub periodic_rate: Decimal,
    pub payments_per_year: u32,
    pub payment_count: u32,
    /// Fixed principal-and-interest payment.
    pub payment: Decimal,
    pub payments: Vec<MortgagePayment>,
}

impl Schedule {
    pub fn total_interest(&self) -> Decimal {
        self.payments
            .last()
            .map(|p| p.cumulative_interest)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn total_principal(&self) -> Decimal {
        self.payments
            .last()
            .map(|p| p.cumulative_principal)
            .unwrap_or(Decimal::ZERO)
    }
}

/// The fixed payment that retires `loan` over `count` payments at `rate` per payment.
///
/// `loan * r * (1+r)^n / ((1+r)^n - 1)`, or `loan / n` when `r` is exactly zero,
/// where the annuity denominator would vanish.
pub fn payment_for(loan: Decimal, rate: Decimal, count: u32) -> Result<Decimal, ScheduleError> {
    if count == 0 {
        return Err(ScheduleError::InvalidTerm(count));
    }
    if rate.is_zero() {
        return Ok(loan.try_div(Decimal::from(count), "linear payment")?);
    }

    let factor = Decimal::ONE
        .try_add(rate, "compound factor")?
        .try_powu(count.into(), "compound factor")?;
    let numerator = loan
        .try_mul(rate, "annuity numerator")?
        .try_mul(factor, "annuity numerator")?;
    let denominator = factor.try_sub(Decimal::ONE, "annuity denominator")?;

    Ok(numerator.try_div(denominator, "annuity payment")?)
}

/// Builds the full payment ledger for `params`.
///
/// Each payment's interest is the outstanding balance times the periodic rate;
/// the rest of the payment retires principal. The final payment retires whatever
/// balance is left, so the ledger always ends at exactly zero and the principal
/// portions sum to the financed amount.
pub fn schedule(params: &MortgageParameters) -> Result<Schedule, ScheduleError> {
    let frequency = params.payment_frequency.resolve();
    let payments_per_year = frequency.periods_per_year;
    let months_per_payment = 12 / payments_per_year;

    let loan_amount = params.home_price.try_sub(params.down_payment, "loan amount")?;
    if loan_amount <= Decimal::ZERO {
        return Err(ScheduleError::NonPositiveLoan(loan_amount));
    }

    let periodic_rate = frequency.periodic_rate(params.annual_rate)?;
    let payment_count = params
        .term_years
        .checked_mul(payments_per_year)
        .ok_or(ScheduleError::InvalidTerm(params.term_years))?;
    let payment = payment_for(loan_amount, periodic_rate, payment_count)?;

    let mut payments = Vec::with_capacity(payment_count as usize);
    let mut balance = loan_amount;
    let mut cumulative_interest = Decimal::ZERO;
    let mut cumulative_principal = Decimal::ZERO;

    for payment_index in 1..=payment_count {
        let interest_portion = balance.try_mul(periodic_rate, "interest portion")?;
        let principal_portion = if payment_index == payment_count {
            balance
        } else {
            payment
                .try_sub(interest_portion, "principal portion")?
                .min(balance)
        };

        balance = balance.try_sub(principal_portion, "remaining balance")?.floor_zero();
        cumulative_interest = cumulative_interest.try_add(interest_portion, "cumulative interest")?;
        cumulative_principal =
            cumulative_principal.try_add(principal_portion, "cumulative principal")?;

        let zero_based = payment_index - 1;
        payments.push(MortgagePayment {
            payment_index,
            year: zero_based / payments_per_year + 1,
            month_in_year: (zero_based % payments_per_year + 1) * months_per_payment,
            payment: principal_portion.try_add(interest_portion, "payment")?,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
            cumulative_interest,
            cumulative_principal,
        });
    }

    tracing::info!(
        loan = %loan_amount,
        payments = payment_count,
        payment = %payment.round_currency(),
        total_interest = %cumulative_interest.round_currency(),
        "Amortization schedule complete."
    );

    Ok(Schedule {
        loan_amount,
        periodic_rate,
        payments_per_year,
        payment_count,
        payment,
        payments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{CURRENCY_UNIT, PaymentFrequency};
    use rust_decimal_macros::dec;

    fn worked_example() -> MortgageParameters {
        MortgageParameters {
            home_price: dec!(300000),
            down_payment: dec!(60000),
            annual_rate: dec!(6),
            term_years: 30,
            ..MortgageParameters::default()
        }
    }

    #[test]
    fn worked_example_matches_published_figures() {
        let schedule = schedule(&worked_example()).unwrap();
        assert_eq!(schedule.loan_amount, dec!(240000));
        assert_eq!(schedule.periodic_rate, dec!(0.005));
        assert_eq!(schedule.payment_count, 360);
        assert_eq!(schedule.payment.round_currency(), dec!(1438.92));
        assert_eq!(schedule.total_interest().round_currency(), dec!(278011.65));
    }

    #[test]
    fn principal_is_conserved_and_balance_terminates_at_zero() {
        let schedule = schedule(&worked_example()).unwrap();
        let principal: Decimal = schedule.payments.iter().map(|p| p.principal_portion).sum();
        assert!((principal - dec!(240000)).abs() <= CURRENCY_UNIT);
        assert!((schedule.total_principal() - dec!(240000)).abs() < dec!(0.000001));

        let last = schedule.payments.last().unwrap();
        assert_eq!(last.remaining_balance, Decimal::ZERO);
        assert_eq!(last.payment_index, 360);
        assert_eq!(last.year, 30);
        assert_eq!(last.month_in_year, 12);
        assert!((last.payment - schedule.payment).abs() < CURRENCY_UNIT);
    }

    #[test]
    fn balances_never_go_negative_and_interest_declines() {
        let schedule = schedule(&worked_example()).unwrap();
        for pair in schedule.payments.windows(2) {
            assert!(pair[1].remaining_balance >= Decimal::ZERO);
            assert!(pair[1].remaining_balance < pair[0].remaining_balance);
            assert!(pair[1].interest_portion < pair[0].interest_portion);
        }
    }

    #[test]
    fn zero_rate_loan_is_linear() {
        let params = MortgageParameters {
            annual_rate: Decimal::ZERO,
            ..worked_example()
        };
        let schedule = schedule(&params).unwrap();
        assert_eq!(schedule.payment, dec!(240000) / dec!(360));
        assert_eq!(schedule.total_interest(), Decimal::ZERO);
        assert!(schedule.payments.iter().all(|p| p.interest_portion.is_zero()));
        assert_eq!(schedule.payments.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn payment_for_rejects_an_empty_term() {
        assert_eq!(
            payment_for(dec!(1000), dec!(0.01), 0).unwrap_err(),
            ScheduleError::InvalidTerm(0)
        );
    }

    #[test]
    fn quarterly_payments_land_on_quarter_end_months() {
        let params = MortgageParameters {
            payment_frequency: PaymentFrequency::Quarterly,
            term_years: 2,
            ..worked_example()
        };
        let schedule = schedule(&params).unwrap();
        assert_eq!(schedule.periodic_rate, dec!(0.015));
        assert_eq!(schedule.payment_count, 8);
        let months: Vec<u32> = schedule.payments.iter().map(|p| p.month_in_year).collect();
        assert_eq!(months, vec![3, 6, 9, 12, 3, 6, 9, 12]);
        assert_eq!(schedule.payments[4].year, 2);
    }

    #[test]
    fn fully_financed_down_payment_is_rejected() {
        let params = MortgageParameters {
            down_payment: dec!(300000),
            ..worked_example()
        };
        assert!(matches!(
            schedule(&params).unwrap_err(),
            ScheduleError::NonPositiveLoan(_)
        ));
    }

    #[test]
    fn scheduling_twice_is_identical() {
        assert_eq!(schedule(&worked_example()).unwrap(), schedule(&worked_example()).unwrap());
    }
}
