use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Division by zero in '{0}'")]
    DivisionByZero(&'static str),

    #[error("Decimal overflow in '{0}'")]
    Overflow(&'static str),

    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),
}
