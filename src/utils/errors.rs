//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores de los servicios
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de los servicios
///
/// Cada variante lleva el mensaje completo que recibe el cliente en el
/// cuerpo `{"error": "..."}`. Ningún fallo de petición se reintenta.
#[derive(Error, Debug)]
pub enum AppError {
    /// El cuerpo de la petición no es JSON parseable
    #[error("Invalid JSON data")]
    MalformedInput,

    /// Falta un campo requerido o llegó en blanco
    #[error("{0}")]
    MissingField(String),

    /// Un campo no cumple su formato (identificador, teléfono, email)
    #[error("{0}")]
    InvalidFormat(String),

    /// El identificador foráneo no resuelve contra el servicio remoto
    #[error("{0}")]
    ReferencedEntityNotFound(String),

    /// Ya existe un registro local que referencia el mismo identificador
    #[error("{0}")]
    DuplicateReference(String),

    /// Colisión de clave primaria al insertar
    #[error("{0}")]
    AlreadyExists(String),

    /// El identificador primario no existe en el almacenamiento local
    #[error("{0}")]
    NotFound(String),

    /// Un servicio hermano no respondió durante una validación de escritura
    #[error("{0}")]
    DependencyUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MalformedInput
            | AppError::MissingField(_)
            | AppError::InvalidFormat(_)
            | AppError::ReferencedEntityNotFound(_)
            | AppError::DuplicateReference(_)
            | AppError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DependencyUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match &self {
            // No filtrar detalles de SQL al cliente
            AppError::Database(_) => "An error occurred while accessing the database".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para errores de campo requerido
pub fn missing_field_error(field: &str) -> AppError {
    AppError::MissingField(format!("Missing required field: {}", field))
}

/// Función helper para errores de entidad referenciada inexistente
pub fn referenced_not_found_error(entity: &str, field: &str, id: &str) -> AppError {
    AppError::ReferencedEntityNotFound(format!("{} with {} {} does not exist", entity, field, id))
}

/// Función helper para errores de referencia duplicada
pub fn duplicate_reference_error(entity: &str, field: &str, id: &str) -> AppError {
    AppError::DuplicateReference(format!("{} with {} {} already exists", entity, field, id))
}
