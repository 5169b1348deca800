//! Sistema de manejo de errores del servidor
//!
//! Este módulo define los errores del proxy y su conversión a respuestas
//! HTTP. Ninguna respuesta de error incluye la clave secreta del backend ni
//! el detalle del fallo: el detalle solo va al log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No action specified")]
    MissingAction,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Backend returned a non-JSON body: {0}")]
    UpstreamBody(#[from] serde_json::Error),

    #[error("Invalid backend URL: {0}")]
    InvalidBackendUrl(String),
}

/// Mensaje genérico para cualquier fallo al contactar el backend
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch from backend service";

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingAction | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_)
            | AppError::UpstreamBody(_)
            | AppError::InvalidBackendUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::MissingAction => {
                tracing::warn!("⚠️ Proxy request without action");
                ErrorResponse {
                    error: "No action specified".to_string(),
                    code: Some("MISSING_ACTION".to_string()),
                }
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("⚠️ Bad request: {}", msg);
                ErrorResponse {
                    error: msg,
                    code: Some("BAD_REQUEST".to_string()),
                }
            }

            AppError::Upstream(e) => {
                // reqwest incluye la URL completa (con apiKey) en el error
                tracing::error!("❌ Proxy error: {}", e.without_url());
                ErrorResponse {
                    error: UPSTREAM_FAILURE_MESSAGE.to_string(),
                    code: None,
                }
            }

            AppError::UpstreamBody(e) => {
                tracing::error!("❌ Proxy error, backend body is not JSON: {}", e);
                ErrorResponse {
                    error: UPSTREAM_FAILURE_MESSAGE.to_string(),
                    code: None,
                }
            }

            AppError::InvalidBackendUrl(msg) => {
                tracing::error!("❌ Proxy error, invalid backend URL: {}", msg);
                ErrorResponse {
                    error: UPSTREAM_FAILURE_MESSAGE.to_string(),
                    code: None,
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
