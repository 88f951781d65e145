use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrowthError {
    #[error("A projection needs a horizon of at least one year, got {0}")]
    InvalidHorizon(u32),

    #[error("Arithmetic error while projecting growth: {0}")]
    Arithmetic(#[from] CoreError),
}
