use futures::stream::{self, StreamExt};
use serde_json::{json, Value};

use crate::clients::{BookingClient, ClientError, RouteClient};
use crate::dto::trip_dto::{CreateTripRequest, TripData};
use crate::dto::ListingParams;
use crate::models::trip::Trip;
use crate::repositories::trip_repository::TripRepository;
use crate::state::AppState;
use crate::utils::errors::{
    duplicate_reference_error, referenced_not_found_error, AppError,
};
use crate::utils::pagination::{Paginator, PAGE_SIZE};

/// Máximo de viajes enriqueciéndose a la vez dentro de una página
const ENRICHMENT_CONCURRENCY: usize = 4;

pub struct TripController {
    repository: TripRepository,
    routes: RouteClient,
    bookings: BookingClient,
}

impl TripController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: TripRepository::new(state.pool.clone()),
            routes: RouteClient::new(
                state.http_client.clone(),
                state.config.route_service_url.clone(),
            ),
            bookings: BookingClient::new(
                state.http_client.clone(),
                state.config.booking_service_url.clone(),
            ),
        }
    }

    /// Alta de viaje: puerta de validación, existencia remota de la ruta,
    /// unicidad local de la referencia, inserción. En ese orden.
    pub async fn create(&self, request: CreateTripRequest) -> Result<Value, AppError> {
        let new_trip = request.validate()?;

        // La ruta referenciada tiene que existir en el servicio de rutas.
        // Que el peer no responda no es lo mismo que que la ruta no exista.
        match self.routes.fetch_route(&new_trip.route_id).await {
            Ok(_) => {}
            Err(ClientError::NotFound) => {
                return Err(referenced_not_found_error(
                    "Route",
                    "route_id",
                    &new_trip.route_id,
                ));
            }
            Err(e) => {
                return Err(AppError::DependencyUnavailable(format!(
                    "Route service is unavailable: {}",
                    e
                )));
            }
        }

        // Como máximo un viaje por ruta
        if self
            .repository
            .route_reference_exists(&new_trip.route_id)
            .await?
        {
            return Err(duplicate_reference_error(
                "Trip",
                "route_id",
                &new_trip.route_id,
            ));
        }

        let trip = self.repository.create(new_trip).await?;

        Ok(json!({
            "message": "Trip added successfully",
            "trip_id": trip.trip_id,
        }))
    }

    /// Listado con enriquecimiento por fila: la ruta desde el servicio de
    /// rutas y las reservas desde el servicio de reservas. El fan-out va
    /// acotado y conserva el orden de la página; cada salto degrada por
    /// separado a `{}` / `[]` sin tumbar el listado.
    pub async fn listing(&self, params: ListingParams) -> Result<Value, AppError> {
        let query = params.query.as_deref().filter(|q| !q.is_empty());
        let trips = self.repository.search(query).await?;
        let page = Paginator::new(trips, PAGE_SIZE).page(params.page.as_deref());

        let enriched: Vec<Value> = stream::iter(page.items)
            .map(|trip| self.enrich_trip(trip))
            .buffered(ENRICHMENT_CONCURRENCY)
            .collect()
            .await;

        Ok(json!({
            "trips": enriched,
            "has_next": page.has_next,
            "has_previous": page.has_previous,
            "total_pages": page.total_pages,
            "current_page": page.number,
        }))
    }

    async fn enrich_trip(&self, trip: Trip) -> Value {
        let route = match self.routes.fetch_route(&trip.route_id).await {
            Ok(route) => route,
            Err(e) => {
                log::debug!("route enrichment failed for {}: {}", trip.trip_id, e);
                json!({})
            }
        };

        let bookings = match self.bookings.fetch_bookings_for_trip(&trip.trip_id).await {
            Ok(bookings) => Value::Array(bookings),
            Err(e) => {
                log::debug!("booking enrichment failed for {}: {}", trip.trip_id, e);
                json!([])
            }
        };

        json!({
            "trip_id": trip.trip_id,
            "user_id": trip.user_id,
            "vehicle_id": trip.vehicle_id,
            "driver_name": trip.driver_name,
            "trip_distance": trip.trip_distance,
            "route": route,
            "bookings": bookings,
        })
    }

    /// Detalle local, sin enriquecimiento: expone route_id tal cual para
    /// que el caller resuelva la referencia si le hace falta
    pub async fn details(&self, trip_id: &str) -> Result<Value, AppError> {
        let trip = self
            .repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        Ok(json!({ "trip": TripData::from(trip) }))
    }
}
