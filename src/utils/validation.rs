//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de campos
//! de vehículos y repostajes.

use num_traits::Float;
use serde::Serialize;
use std::borrow::Cow;
use validator::ValidationError;

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Validar que un campo opcional esté presente
pub fn validate_required<T>(value: Option<T>, message: &'static str) -> Result<T, ValidationError> {
    value.ok_or_else(|| validation_error("required", message))
}

/// Validar que un string no esté vacío tras recortar espacios
pub fn validate_not_blank(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = validation_error("not_blank", message);
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + num_traits::Zero + Serialize>(
    value: T,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = validation_error("positive", message);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + num_traits::Zero + Serialize>(
    value: T,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = validation_error("non_negative", message);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un número real sea finito (ni NaN ni infinito)
pub fn validate_finite<T: Float>(value: T, message: &'static str) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(validation_error("finite", message));
    }
    Ok(())
}
