//! DTOs del servicio de rutas

use serde::{Deserialize, Serialize};

use crate::models::route::{NewRoute, Route};
use crate::utils::errors::AppError;
use crate::utils::validation::validate_route_id;

/// Request crudo para crear una ruta
///
/// Todos los campos son opcionales a nivel de deserialización: la puerta
/// de validación es la que decide, en orden, qué campo falta y con qué
/// mensaje.
#[derive(Debug, Deserialize)]
pub struct CreateRouteRequest {
    pub route_id: Option<String>,
    pub user_id: Option<String>,
    pub route_name: Option<String>,
    pub route_origin: Option<String>,
    pub route_destination: Option<String>,
    pub stops: Option<Vec<String>>,
}

impl CreateRouteRequest {
    /// Puerta de validación: campos requeridos en orden, luego formato.
    /// Corta en el primer fallo.
    pub fn validate(self) -> Result<NewRoute, AppError> {
        let route_id = required(self.route_id.as_deref(), "route_id")?;
        let user_id = required(self.user_id.as_deref(), "user_id")?;
        let route_name = required(self.route_name.as_deref(), "route_name")?;
        let route_origin = required(self.route_origin.as_deref(), "route_origin")?;
        let route_destination = required(self.route_destination.as_deref(), "route_destination")?;
        let stops = match self.stops {
            Some(stops) if !stops.is_empty() => stops,
            _ => return Err(blank_field_error("stops")),
        };

        validate_route_id(&route_id)?;

        Ok(NewRoute {
            route_id,
            user_id,
            route_name,
            route_origin,
            route_destination,
            stops,
        })
    }
}

// El servicio de rutas reporta los campos en blanco con su propio texto,
// con la inicial en mayúscula
fn blank_field_error(field: &str) -> AppError {
    let mut chars = field.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    AppError::MissingField(format!("{} is required and cannot be blank", capitalized))
}

fn required(value: Option<&str>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(blank_field_error(field)),
    }
}

/// Forma pública de una Route en las respuestas JSON
#[derive(Debug, Serialize)]
pub struct RouteData {
    pub route_id: String,
    pub user_id: String,
    pub route_name: String,
    pub route_origin: String,
    pub route_destination: String,
    pub stops: Vec<String>,
}

impl From<Route> for RouteData {
    fn from(route: Route) -> Self {
        Self {
            route_id: route.route_id,
            user_id: route.user_id,
            route_name: route.route_name,
            route_origin: route.route_origin,
            route_destination: route.route_destination,
            stops: route.stops.0,
        }
    }
}
