//! DTOs del servicio de reservas

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::booking::{Booking, NewBooking};
use crate::utils::errors::{missing_field_error, AppError};
use crate::utils::validation::{
    require_field, validate_ticket_id, validate_traveller_email, validate_traveller_number,
    validate_trip_id,
};

/// Request crudo para crear una reserva
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub ticket_id: Option<String>,
    pub trip_id: Option<String>,
    pub traveller_name: Option<String>,
    pub traveller_number: Option<String>,
    pub ticket_cost: Option<Decimal>,
    pub traveller_email: Option<String>,
}

impl CreateBookingRequest {
    /// Puerta de validación completa del alta de reserva, en orden:
    /// requeridos, formato de ticket_id, formato de trip_id, teléfono,
    /// email. El duplicado local y la ronda contra el servicio de viajes
    /// van después, en el controller.
    pub fn validate(self) -> Result<NewBooking, AppError> {
        let ticket_id = require_field(self.ticket_id.as_deref(), "ticket_id")?;
        let traveller_name = require_field(self.traveller_name.as_deref(), "traveller_name")?;
        let traveller_number = require_field(self.traveller_number.as_deref(), "traveller_number")?;
        let ticket_cost = self
            .ticket_cost
            .ok_or_else(|| missing_field_error("ticket_cost"))?;
        let traveller_email = require_field(self.traveller_email.as_deref(), "traveller_email")?;
        let trip_id = require_field(self.trip_id.as_deref(), "trip_id")?;

        validate_ticket_id(&ticket_id)?;
        validate_trip_id(&trip_id)?;
        validate_traveller_number(&traveller_number)?;
        validate_traveller_email(&traveller_email)?;

        Ok(NewBooking {
            ticket_id,
            trip_id,
            traveller_name,
            traveller_number,
            ticket_cost,
            traveller_email,
        })
    }
}

/// Forma pública de un Booking en las respuestas JSON
#[derive(Debug, Serialize)]
pub struct BookingData {
    pub ticket_id: String,
    pub trip_id: String,
    pub traveller_name: String,
    pub traveller_number: String,
    pub ticket_cost: String,
    pub traveller_email: String,
}

impl From<Booking> for BookingData {
    fn from(booking: Booking) -> Self {
        Self {
            ticket_id: booking.ticket_id,
            trip_id: booking.trip_id,
            traveller_name: booking.traveller_name,
            traveller_number: booking.traveller_number,
            ticket_cost: booking.ticket_cost,
            traveller_email: booking.traveller_email,
        }
    }
}
