use thiserror::Error;

/// A physical or numerical parameter that failed validation.
///
/// Every length and energy handed to the core must be finite and strictly
/// positive. Violations are caller programming errors and are reported at
/// construction time, before any energy is summed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("Parameter '{name}' must be strictly positive (got {value:e})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("Parameter '{name}' must be a finite number (got {value})")]
    NonFinite { name: &'static str, value: f64 },
}

/// Returns `value` unchanged if it is finite and greater than zero.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { name, value });
    }
    if value <= 0.0 {
        return Err(ParameterError::NonPositive { name, value });
    }
    Ok(value)
}
