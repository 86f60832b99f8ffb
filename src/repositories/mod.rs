//! Acceso a datos de los tres servicios
//!
//! Un repositorio por entidad sobre el pool SQLite del servicio. La única
//! garantía de concurrencia del almacenamiento es la unicidad de la clave
//! primaria; los repositorios la traducen a un error de la aplicación.

pub mod booking_repository;
pub mod route_repository;
pub mod trip_repository;

use sqlx::error::ErrorKind;

use crate::utils::errors::AppError;

/// Traducir un fallo de INSERT: la colisión de clave primaria se reporta
/// al cliente, el resto queda como error de base de datos
pub(crate) fn map_insert_error(e: sqlx::Error, entity: &str, field: &str, id: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::UniqueViolation) => {
            AppError::AlreadyExists(format!("{} with {} {} already exists", entity, field, id))
        }
        _ => AppError::Database(e),
    }
}

/// Patrón LIKE para búsqueda icontains, con comodines del usuario escapados
pub(crate) fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
