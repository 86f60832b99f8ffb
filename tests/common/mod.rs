//! Infraestructura compartida de los tests de integración
//!
//! Cada servicio se monta sobre un pool SQLite en memoria. Para los
//! caminos entre servicios se sirven routers hermanos reales en puertos
//! efímeros; para simular un peer caído basta una URL a un puerto cerrado.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use trip_booking::config::database::DatabaseConfig;
use trip_booking::config::environment::EnvironmentConfig;
use trip_booking::repositories::booking_repository::BookingRepository;
use trip_booking::repositories::route_repository::RouteRepository;
use trip_booking::repositories::trip_repository::TripRepository;
use trip_booking::routes::booking_routes::create_booking_router;
use trip_booking::routes::route_routes::create_route_router;
use trip_booking::routes::trip_routes::create_trip_router;
use trip_booking::state::AppState;

/// URL de un puerto cerrado: la conexión se rechaza de inmediato
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

pub fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        route_service_url: UNREACHABLE.to_string(),
        trip_service_url: UNREACHABLE.to_string(),
        booking_service_url: UNREACHABLE.to_string(),
    }
}

pub async fn memory_pool() -> SqlitePool {
    DatabaseConfig::new("sqlite::memory:")
        .create_test_pool()
        .await
        .expect("in-memory pool")
}

pub async fn route_service_app() -> (Router, SqlitePool) {
    let pool = memory_pool().await;
    RouteRepository::new(pool.clone())
        .init_schema()
        .await
        .unwrap();
    let state = AppState::new(pool.clone(), test_config());
    (create_route_router().with_state(state), pool)
}

pub async fn trip_service_app(config: EnvironmentConfig) -> (Router, SqlitePool) {
    let pool = memory_pool().await;
    TripRepository::new(pool.clone())
        .init_schema()
        .await
        .unwrap();
    let state = AppState::new(pool.clone(), config);
    (create_trip_router().with_state(state), pool)
}

pub async fn booking_service_app(config: EnvironmentConfig) -> (Router, SqlitePool) {
    let pool = memory_pool().await;
    BookingRepository::new(pool.clone())
        .init_schema()
        .await
        .unwrap();
    let state = AppState::new(pool.clone(), config);
    (create_booking_router().with_state(state), pool)
}

/// Servir un router en un puerto efímero y devolver su base URL
pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_response(response).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    read_response(response).await
}

async fn read_response(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
