//! Modelo de Route
//!
//! Este módulo contiene el struct Route tal como vive en la tabla `routes`
//! y la forma validada que produce la puerta de entrada del servicio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Route principal - mapea exactamente a la tabla routes
///
/// `stops` es la lista ordenada de identificadores de parada, persistida
/// como JSON en una columna TEXT.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub route_id: String,
    pub user_id: String,
    pub route_name: String,
    pub route_origin: String,
    pub route_destination: String,
    pub stops: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Datos de Route ya validados, listos para insertar
#[derive(Debug, Clone)]
pub struct NewRoute {
    pub route_id: String,
    pub user_id: String,
    pub route_name: String,
    pub route_origin: String,
    pub route_destination: String,
    pub stops: Vec<String>,
}
