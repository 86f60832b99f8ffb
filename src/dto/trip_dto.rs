//! DTOs del servicio de viajes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::trip::{NewTrip, Trip};
use crate::utils::errors::missing_field_error;
use crate::utils::errors::AppError;
use crate::utils::validation::{require_field, validate_trip_id};

/// Request crudo para crear un viaje
#[derive(Debug, Deserialize)]
pub struct CreateTripRequest {
    pub trip_id: Option<String>,
    pub user_id: Option<String>,
    pub vehicle_id: Option<String>,
    pub driver_name: Option<String>,
    pub trip_distance: Option<Decimal>,
    pub route_id: Option<String>,
}

impl CreateTripRequest {
    /// Puerta de validación: campos requeridos en orden, luego el formato
    /// de `trip_id`. Los checks de existencia y duplicado contra la Route
    /// referenciada van después, en el controller.
    pub fn validate(self) -> Result<NewTrip, AppError> {
        let user_id = require_field(self.user_id.as_deref(), "user_id")?;
        let vehicle_id = require_field(self.vehicle_id.as_deref(), "vehicle_id")?;
        let driver_name = require_field(self.driver_name.as_deref(), "driver_name")?;
        let trip_distance = self
            .trip_distance
            .ok_or_else(|| missing_field_error("trip_distance"))?;
        let trip_id = require_field(self.trip_id.as_deref(), "trip_id")?;
        let route_id = require_field(self.route_id.as_deref(), "route_id")?;

        validate_trip_id(&trip_id)?;

        Ok(NewTrip {
            trip_id,
            user_id,
            vehicle_id,
            driver_name,
            trip_distance,
            route_id,
        })
    }
}

/// Forma pública de un Trip en las respuestas JSON
#[derive(Debug, Serialize)]
pub struct TripData {
    pub trip_id: String,
    pub user_id: String,
    pub vehicle_id: String,
    pub driver_name: String,
    pub trip_distance: String,
    pub route_id: String,
}

impl From<Trip> for TripData {
    fn from(trip: Trip) -> Self {
        Self {
            trip_id: trip.trip_id,
            user_id: trip.user_id,
            vehicle_id: trip.vehicle_id,
            driver_name: trip.driver_name,
            trip_distance: trip.trip_distance,
            route_id: trip.route_id,
        }
    }
}
