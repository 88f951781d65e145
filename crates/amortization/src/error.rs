use core_types::CoreError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("A loan needs at least one payment, got {0}")]
    InvalidTerm(u32),

    #[error("The financed amount ({0}) must be greater than zero")]
    NonPositiveLoan(Decimal),

    #[error("Arithmetic error while amortizing: {0}")]
    Arithmetic(#[from] CoreError),
}
