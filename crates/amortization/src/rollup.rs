use core_types::{MortgagePayment, MortgageYear};
use rust_decimal::Decimal;

/// Collapses a payment ledger into one row per loan year.
///
/// Each row sums that year's principal and interest portions and carries the
/// balance left after the year's final payment. Expects the ledger in payment
/// order, as `schedule` produces it.
pub fn yearly_rollup(payments: &[MortgagePayment]) -> Vec<MortgageYear> {
    let mut years: Vec<MortgageYear> = Vec::new();

    for payment in payments {
        match years.last_mut() {
            Some(current) if current.year == payment.year => {
                current.principal += payment.principal_portion;
                current.interest += payment.interest_portion;
                current.ending_balance = payment.remaining_balance;
            }
            _ => years.push(MortgageYear {
                year: payment.year,
                principal: payment.principal_portion,
                interest: payment.interest_portion,
                ending_balance: payment.remaining_balance,
            }),
        }
    }

    years
}

/// Sum of interest paid across a roll-up.
pub fn total_interest(years: &[MortgageYear]) -> Decimal {
    years.iter().map(|y| y.interest).sum()
}
