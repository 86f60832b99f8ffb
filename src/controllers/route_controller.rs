use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::dto::route_dto::{CreateRouteRequest, RouteData};
use crate::dto::ListingParams;
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::AppError;
use crate::utils::pagination::{Paginator, PAGE_SIZE};

/// Campos por los que el listado puede ordenar
const SORT_FIELDS: &[&str] = &["route_id", "route_name", "route_origin", "route_destination"];

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateRouteRequest) -> Result<Value, AppError> {
        let new_route = request.validate()?;
        let route = self.repository.create(new_route).await?;

        Ok(json!({
            "message": "Route added successfully",
            "route_id": route.route_id,
        }))
    }

    /// Listado: filtro, orden y paginación se aplican en ese orden
    pub async fn listing(&self, params: ListingParams) -> Result<Value, AppError> {
        let query = params.query.as_deref().filter(|q| !q.is_empty());
        let sort_by = match params.sort_by.as_deref() {
            Some(field) if SORT_FIELDS.contains(&field) => field,
            _ => "route_id",
        };

        let routes = self.repository.search(query, sort_by).await?;
        let page = Paginator::new(routes, PAGE_SIZE).page(params.page.as_deref());
        let routes_data: Vec<RouteData> = page.items.into_iter().map(RouteData::from).collect();

        Ok(json!({
            "routes": routes_data,
            "has_next": page.has_next,
            "has_previous": page.has_previous,
            "total_pages": page.total_pages,
            "current_page": page.number,
        }))
    }

    pub async fn details(&self, route_id: &str) -> Result<Value, AppError> {
        let route = self
            .repository
            .find_by_id(route_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        Ok(json!({ "route": RouteData::from(route) }))
    }
}
