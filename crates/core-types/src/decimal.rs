//! Checked decimal arithmetic.
//!
//! Every monetary and rate value in the workspace is a `rust_decimal::Decimal`.
//! The plain operators on `Decimal` panic on overflow and on division by zero, so
//! calculation code goes through [`DecimalExt`] instead and propagates a
//! [`CoreError`] naming the step that failed.

use crate::error::CoreError;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

/// Number of fractional digits in a minor currency unit.
pub const CURRENCY_DP: u32 = 2;

/// One minor currency unit (a cent).
pub const CURRENCY_UNIT: Decimal = Decimal::from_parts(1, 0, 0, false, CURRENCY_DP);

pub trait DecimalExt: Sized + Copy {
    fn try_add(self, rhs: Decimal, context: &'static str) -> Result<Decimal, CoreError>;
    fn try_sub(self, rhs: Decimal, context: &'static str) -> Result<Decimal, CoreError>;
    fn try_mul(self, rhs: Decimal, context: &'static str) -> Result<Decimal, CoreError>;

    /// Division. An exact-zero divisor is a domain error; callers that can see a
    /// zero rate coming must branch to a linear formula before reaching here.
    fn try_div(self, rhs: Decimal, context: &'static str) -> Result<Decimal, CoreError>;

    fn try_powu(self, exp: u64, context: &'static str) -> Result<Decimal, CoreError>;

    /// Rounds to whole minor units, midpoint away from zero.
    fn round_currency(self) -> Decimal;

    /// `6` -> `0.06`.
    fn percent_to_fraction(self) -> Decimal;

    fn floor_zero(self) -> Decimal;
}

impl DecimalExt for Decimal {
    fn try_add(self, rhs: Decimal, context: &'static str) -> Result<Decimal, CoreError> {
        self.checked_add(rhs).ok_or(CoreError::Overflow(context))
    }

    fn try_sub(self, rhs: Decimal, context: &'static str) -> Result<Decimal, CoreError> {
        self.checked_sub(rhs).ok_or(CoreError::Overflow(context))
    }

    fn try_mul(self, rhs: Decimal, context: &'static str) -> Result<Decimal, CoreError> {
        self.checked_mul(rhs).ok_or(CoreError::Overflow(context))
    }

    fn try_div(self, rhs: Decimal, context: &'static str) -> Result<Decimal, CoreError> {
        if rhs.is_zero() {
            return Err(CoreError::DivisionByZero(context));
        }
        self.checked_div(rhs).ok_or(CoreError::Overflow(context))
    }

    fn try_powu(self, exp: u64, context: &'static str) -> Result<Decimal, CoreError> {
        self.checked_powu(exp).ok_or(CoreError::Overflow(context))
    }

    fn round_currency(self) -> Decimal {
        self.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
    }

    fn percent_to_fraction(self) -> Decimal {
        self / Decimal::ONE_HUNDRED
    }

    fn floor_zero(self) -> Decimal {
        self.max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn division_by_exact_zero_is_a_domain_error() {
        let err = dec!(100).try_div(Decimal::ZERO, "payment").unwrap_err();
        assert_eq!(err, CoreError::DivisionByZero("payment"));
    }

    #[test]
    fn overflow_is_reported_instead_of_panicking() {
        let err = Decimal::MAX.try_add(Decimal::ONE, "balance").unwrap_err();
        assert_eq!(err, CoreError::Overflow("balance"));
        assert!(Decimal::MAX.try_mul(dec!(2), "interest").is_err());
    }

    #[test]
    fn decimal_fractions_are_exact() {
        // 0.1 + 0.2 is the classic binary floating point failure.
        let sum = dec!(0.1).try_add(dec!(0.2), "sum").unwrap();
        assert_eq!(sum, dec!(0.3));
    }

    #[test]
    fn currency_rounding_goes_away_from_zero_at_the_midpoint() {
        assert_eq!(dec!(1.005).round_currency(), dec!(1.01));
        assert_eq!(dec!(-1.005).round_currency(), dec!(-1.01));
        assert_eq!(dec!(1438.9161).round_currency(), dec!(1438.92));
        assert_eq!(CURRENCY_UNIT, dec!(0.01));
    }

    #[test]
    fn power_and_percent_helpers() {
        assert_eq!(dec!(1.1).try_powu(2, "factor").unwrap(), dec!(1.21));
        assert_eq!(dec!(6).percent_to_fraction(), dec!(0.06));
        assert_eq!(dec!(-3).floor_zero(), Decimal::ZERO);
        assert_eq!(dec!(3).floor_zero(), dec!(3));
    }
}
