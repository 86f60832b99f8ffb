//! Modelo de Trip
//!
//! `route_id` es una referencia débil: un string que nombra una Route del
//! servicio de rutas, resuelto bajo demanda por HTTP. No hay foreign key
//! ni acoplamiento de ciclo de vida: borrar la Route no toca el Trip.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Trip principal - mapea exactamente a la tabla trips
///
/// `trip_distance` se persiste como TEXT decimal y viaja como string en
/// las respuestas JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub trip_id: String,
    pub user_id: String,
    pub vehicle_id: String,
    pub driver_name: String,
    pub trip_distance: String,
    pub route_id: String,
    pub created_at: DateTime<Utc>,
}

/// Datos de Trip ya validados, listos para insertar
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub trip_id: String,
    pub user_id: String,
    pub vehicle_id: String,
    pub driver_name: String,
    pub trip_distance: Decimal,
    pub route_id: String,
}
