use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::CreateRouteRequest;
use crate::dto::ListingParams;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/add_route/", post(add_route))
        .route("/route_listing/", get(route_listing))
        .route("/route_details/:route_id/", get(route_details))
        .route("/health/", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "service": "route-service", "status": "ok" }))
}

async fn add_route(
    State(state): State<AppState>,
    payload: Result<Json<CreateRouteRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::MalformedInput)?;
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn route_listing(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Value>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.listing(params).await?;
    Ok(Json(response))
}

async fn route_details(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.details(&route_id).await?;
    Ok(Json(response))
}
