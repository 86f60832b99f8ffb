use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::CreateBookingRequest;
use crate::dto::ListingParams;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/add_booking/", post(add_booking))
        .route("/booking_listing/", get(booking_listing))
        .route("/booking_details/:ticket_id/", get(booking_details))
        .route("/health/", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "service": "booking-service", "status": "ok" }))
}

async fn add_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::MalformedInput)?;
    let controller = BookingController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn booking_listing(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Value>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.listing(params).await?;
    Ok(Json(response))
}

async fn booking_details(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.details(&ticket_id).await?;
    Ok(Json(response))
}
