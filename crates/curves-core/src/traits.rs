use crate::error::{CurveError, Result};

/// Validate the parameters of a geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Check that a shape parameter is finite and non-negative.
pub fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CurveError::Geometry(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}

/// Check that a parameter is finite.
pub fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CurveError::Geometry(format!("{name} must be finite, got {value}")))
    }
}
