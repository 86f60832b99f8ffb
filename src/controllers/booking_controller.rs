use serde_json::{json, Value};

use crate::clients::{ClientError, RouteClient, TripClient};
use crate::dto::booking_dto::{BookingData, CreateBookingRequest};
use crate::dto::ListingParams;
use crate::repositories::booking_repository::BookingRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{Paginator, PAGE_SIZE};

/// Campos por los que el listado puede ordenar
const SORT_FIELDS: &[&str] = &[
    "ticket_id",
    "traveller_name",
    "ticket_cost",
    "traveller_number",
    "traveller_email",
    "trip_id",
];

pub struct BookingController {
    repository: BookingRepository,
    trips: TripClient,
    routes: RouteClient,
}

impl BookingController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: BookingRepository::new(state.pool.clone()),
            trips: TripClient::new(
                state.http_client.clone(),
                state.config.trip_service_url.clone(),
            ),
            routes: RouteClient::new(
                state.http_client.clone(),
                state.config.route_service_url.clone(),
            ),
        }
    }

    /// Alta de reserva: puerta de validación, unicidad local del trip_id,
    /// ronda de confirmación contra el servicio de viajes, inserción. La
    /// fila solo se escribe si la ronda remota confirma el viaje.
    pub async fn create(&self, request: CreateBookingRequest) -> Result<Value, AppError> {
        let new_booking = request.validate()?;

        // Como máximo una reserva por viaje
        if self
            .repository
            .trip_reference_exists(&new_booking.trip_id)
            .await?
        {
            return Err(AppError::DuplicateReference(
                "Trip ID already exists".to_string(),
            ));
        }

        match self.trips.fetch_trip(&new_booking.trip_id).await {
            Ok(trip) => {
                let returned_id = trip.get("trip_id").and_then(Value::as_str);
                if returned_id != Some(new_booking.trip_id.as_str()) {
                    return Err(AppError::ReferencedEntityNotFound(
                        "Provided trip_id does not match the trip_id from the trip service"
                            .to_string(),
                    ));
                }
            }
            Err(ClientError::NotFound) => {
                return Err(AppError::ReferencedEntityNotFound(
                    "Invalid trip_id or trip does not exist".to_string(),
                ));
            }
            Err(e) => {
                return Err(AppError::DependencyUnavailable(format!(
                    "Trip service is unavailable: {}",
                    e
                )));
            }
        }

        let booking = self.repository.create(new_booking).await?;

        Ok(json!({
            "message": "Booking added successfully",
            "ticket_id": booking.ticket_id,
        }))
    }

    /// Listado plano: filtro, orden y paginación, sin metadatos de página
    pub async fn listing(&self, params: ListingParams) -> Result<Value, AppError> {
        let query = params.query.as_deref().filter(|q| !q.is_empty());
        let order_by = match params.sort_by.as_deref() {
            // La columna es TEXT; el coste se ordena numéricamente
            Some("ticket_cost") => "CAST(ticket_cost AS REAL)",
            Some(field) if SORT_FIELDS.contains(&field) => field,
            _ => "ticket_id",
        };

        let bookings = self.repository.search(query, order_by).await?;
        let page = Paginator::new(bookings, PAGE_SIZE).page(params.page.as_deref());
        let bookings_data: Vec<BookingData> =
            page.items.into_iter().map(BookingData::from).collect();

        Ok(json!({ "bookings": bookings_data }))
    }

    /// Lectura compuesta Booking → Trip → Route
    ///
    /// Cada salto degrada por separado: si el viaje no llega, la ruta ni
    /// se intenta; si el viaje llega sin route_id, la ruta se omite. La
    /// reserva local se devuelve siempre: un peer caído degrada los datos
    /// adjuntos, nunca la respuesta.
    pub async fn details(&self, ticket_id: &str) -> Result<Value, AppError> {
        let booking = self
            .repository
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let trip = match self.trips.fetch_trip(&booking.trip_id).await {
            Ok(trip) => trip,
            Err(e) => {
                log::debug!("trip enrichment failed for {}: {}", ticket_id, e);
                json!({})
            }
        };

        let route = match trip.get("route_id").and_then(Value::as_str) {
            Some(route_id) => match self.routes.fetch_route(route_id).await {
                Ok(route) => route,
                Err(e) => {
                    log::debug!("route enrichment failed for {}: {}", ticket_id, e);
                    json!({})
                }
            },
            None => json!({}),
        };

        Ok(json!({
            "booking": BookingData::from(booking),
            "trip": trip,
            "route": route,
        }))
    }
}
