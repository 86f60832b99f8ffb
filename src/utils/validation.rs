//! Utilidades de validación
//!
//! Funciones helper para la puerta de validación de cada servicio.
//! Los checks se aplican secuencialmente y cortan en el primer fallo,
//! de modo que cada petición reporta exactamente un error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::errors::AppError;

lazy_static! {
    static ref ROUTE_ID_RE: Regex = Regex::new(r"^RT\d{8}$").unwrap();
    static ref TRIP_ID_RE: Regex = Regex::new(r"^TP\d{8}$").unwrap();
    static ref TICKET_ID_RE: Regex = Regex::new(r"^TK\d{8}$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\d{10}$").unwrap();
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

/// Extraer un campo requerido de tipo string, rechazando ausentes y blancos
pub fn require_field(value: Option<&str>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(crate::utils::errors::missing_field_error(field)),
    }
}

/// Validar formato de route_id: RT seguido de 8 dígitos
pub fn validate_route_id(value: &str) -> Result<(), AppError> {
    if !ROUTE_ID_RE.is_match(value) {
        return Err(AppError::InvalidFormat(
            "Invalid route_id format. It should start with RT followed by 8 digits".to_string(),
        ));
    }
    Ok(())
}

/// Validar formato de trip_id: TP seguido de 8 dígitos
pub fn validate_trip_id(value: &str) -> Result<(), AppError> {
    if !TRIP_ID_RE.is_match(value) {
        return Err(AppError::InvalidFormat(
            "Invalid trip_id format. It should start with TP followed by 8 digits".to_string(),
        ));
    }
    Ok(())
}

/// Validar formato de ticket_id: TK seguido de 8 dígitos
pub fn validate_ticket_id(value: &str) -> Result<(), AppError> {
    if !TICKET_ID_RE.is_match(value) {
        return Err(AppError::InvalidFormat(
            "Invalid ticket_id format. It should start with TK followed by 8 digits".to_string(),
        ));
    }
    Ok(())
}

/// Validar formato de teléfono: exactamente 10 dígitos
pub fn validate_traveller_number(value: &str) -> Result<(), AppError> {
    if !PHONE_RE.is_match(value) {
        return Err(AppError::InvalidFormat(
            "Invalid traveller_number format. It should be a 10-digit number".to_string(),
        ));
    }
    Ok(())
}

/// Validar formato de email: local@dominio.tld básico
pub fn validate_traveller_email(value: &str) -> Result<(), AppError> {
    if !EMAIL_RE.is_match(value) {
        return Err(AppError::InvalidFormat(
            "Invalid traveller_email format".to_string(),
        ));
    }
    Ok(())
}
