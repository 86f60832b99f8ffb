use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::CreateTripRequest;
use crate::dto::ListingParams;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/add_trip/", post(add_trip))
        .route("/trip_listing/", get(trip_listing))
        .route("/trip_details/:trip_id/", get(trip_details))
        .route("/health/", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "service": "trip-service", "status": "ok" }))
}

async fn add_trip(
    State(state): State<AppState>,
    payload: Result<Json<CreateTripRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::MalformedInput)?;
    let controller = TripController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn trip_listing(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Value>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.listing(params).await?;
    Ok(Json(response))
}

async fn trip_details(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.details(&trip_id).await?;
    Ok(Json(response))
}
