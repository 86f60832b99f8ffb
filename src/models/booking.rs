//! Modelo de Booking
//!
//! `trip_id` es una referencia débil al servicio de viajes, igual que
//! `route_id` en Trip.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub ticket_id: String,
    pub trip_id: String,
    pub traveller_name: String,
    pub traveller_number: String,
    pub ticket_cost: String,
    pub traveller_email: String,
    pub created_at: DateTime<Utc>,
}

/// Datos de Booking ya validados, listos para insertar
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub ticket_id: String,
    pub trip_id: String,
    pub traveller_name: String,
    pub traveller_number: String,
    pub ticket_cost: Decimal,
    pub traveller_email: String,
}
