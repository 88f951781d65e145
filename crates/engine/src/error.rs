use core_types::ValidationErrors;
use thiserror::Error;

/// A fault inside a pipeline. Never expected for validated input.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Growth projection failed: {0}")]
    Growth(#[from] growth::GrowthError),

    #[error("Amortization failed: {0}")]
    Schedule(#[from] amortization::ScheduleError),

    #[error("Summary failed: {0}")]
    Analytics(#[from] analytics::AnalyticsError),
}

/// Field name under which computation faults are reported.
pub const CALCULATION_FIELD: &str = "calculation";

/// Callers handle one error shape: a computation fault becomes a single
/// `calculation` entry, with no partial result.
impl From<EngineError> for ValidationErrors {
    fn from(err: EngineError) -> Self {
        ValidationErrors::single(CALCULATION_FIELD, err.to_string())
    }
}
