use crate::error::AppError;

pub fn require_finite(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::InvalidInput(format!("{field} must be a finite number, got {value}")));
    }
    Ok(())
}

pub fn require_positive(field: &str, value: i64) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::InvalidConfiguration(format!("{field} must be greater than zero, got {value}")));
    }
    Ok(())
}

pub fn require_ordered(low_field: &str, low: i64, high_field: &str, high: i64) -> Result<(), AppError> {
    if low >= high {
        return Err(AppError::InvalidConfiguration(format!(
            "{low_field} ({low}) must be less than {high_field} ({high})"
        )));
    }
    Ok(())
}
