use configuration::Bounds;
use core_types::ValidationError;
use rust_decimal::Decimal;

/// Pushes an error when `value` falls outside `bounds`.
pub(crate) fn check_bounds(
    errors: &mut Vec<ValidationError>,
    field: &str,
    label: &str,
    value: Decimal,
    bounds: &Bounds,
) {
    if !bounds.contains(value) {
        errors.push(ValidationError::new(
            field,
            format!("{} must be between {} and {}", label, bounds.min, bounds.max),
        ));
    }
}

/// Pushes an error when a whole number of years falls outside `[1, max]`.
pub(crate) fn check_years(
    errors: &mut Vec<ValidationError>,
    field: &str,
    label: &str,
    value: u32,
    max: u32,
) {
    if value < 1 || value > max {
        errors.push(ValidationError::new(
            field,
            format!("{} must be between 1 and {} years", label, max),
        ));
    }
}
