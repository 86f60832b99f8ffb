//! Shared application state
//!
//! Este módulo define el estado compartido que se pasa a través del
//! router de Axum. Los servicios son stateless por petición: todo lo que
//! hay aquí son handles inyectados (pool, configuración, client HTTP).

use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;

use crate::config::environment::EnvironmentConfig;

/// Timeout de toda llamada saliente hacia un servicio hermano
const PEER_CALL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub http_client: Client,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        let http_client = Client::builder()
            .timeout(PEER_CALL_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            pool,
            config,
            http_client,
        }
    }
}
