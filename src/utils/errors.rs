//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Vehicle not found: {0}")]
    NotFound(u64),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Código estable del tipo de error, usado en el cuerpo JSON
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code().to_string();
        let (status, error_response) = match self {
            AppError::InvalidInput(msg) => {
                warn!("Invalid input: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Invalid Input".to_string(),
                        message: msg,
                        details: None,
                        code,
                    },
                )
            }

            AppError::NotFound(id) => {
                warn!("Vehicle not found: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: format!("Vehicle not found: {}", id),
                        details: Some(json!({ "vehicle_id": id })),
                        code,
                    },
                )
            }

            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: e.to_string(),
                        details: Some(json!(e)),
                        code,
                    },
                )
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code,
                    },
                )
            }

            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: format!("Unexpected error: {}", msg),
                        details: None,
                        code,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Convertir un `ValidationError` de campo en un error de entrada inválida
impl From<validator::ValidationError> for AppError {
    fn from(error: validator::ValidationError) -> Self {
        let message = error
            .message
            .map(|m| m.into_owned())
            .unwrap_or_else(|| error.code.into_owned());
        AppError::InvalidInput(message)
    }
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (AppError::InvalidInput("liters must be greater than zero".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound(7), StatusCode::NOT_FOUND),
            (bad_request_error("vehicleId is required"), StatusCode::BAD_REQUEST),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_validation_error_message_is_kept() {
        let mut error = validator::ValidationError::new("positive");
        error.message = Some(Cow::Borrowed("odometer must be greater than zero"));

        match AppError::from(error) {
            AppError::InvalidInput(msg) => assert_eq!(msg, "odometer must be greater than zero"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validation_error_without_message_uses_code() {
        let error = validator::ValidationError::new("not_blank");
        assert_eq!(AppError::from(error).to_string(), "Invalid input: not_blank");
    }

    #[test]
    fn test_not_found_message_identifies_vehicle() {
        assert_eq!(AppError::NotFound(42).to_string(), "Vehicle not found: 42");
        assert_eq!(AppError::NotFound(42).code(), "NOT_FOUND");
    }
}
