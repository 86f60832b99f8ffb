//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de SQLite con SQLx.
//! Cada servicio es dueño de su propio archivo de base de datos; nada se
//! comparte entre servicios.

use std::time::Duration;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Configuración de la base de datos de un servicio
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            max_connections: 5,
            idle_timeout: Duration::from_secs(300),
        }
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .idle_timeout(self.idle_timeout)
            .connect(&self.url)
            .await
    }

    /// Crear un pool de conexiones para testing
    ///
    /// Una sola conexión: una base `sqlite::memory:` vive dentro de su
    /// conexión, y con más de una cada test vería una base distinta.
    pub async fn create_test_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(Duration::from_secs(60))
            .connect(&self.url)
            .await
    }
}
