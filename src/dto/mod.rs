//! DTOs de entrada y salida de los tres servicios

pub mod booking_dto;
pub mod route_dto;
pub mod trip_dto;

use serde::Deserialize;

/// Parámetros comunes de los endpoints de listado
///
/// `page` se lee como string crudo: el paginador es quien decide qué hacer
/// con valores no numéricos o fuera de rango.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<String>,
}
