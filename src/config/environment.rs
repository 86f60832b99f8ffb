//! Configuración de variables de entorno
//!
//! Cada servicio lee la misma familia de variables con defaults propios.
//! Las URLs de los servicios hermanos son fijas por configuración, no hay
//! descubrimiento dinámico.

use std::env;

/// Configuración del entorno de un servicio
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub database_url: String,
    // URLs de los servicios hermanos
    pub route_service_url: String,
    pub trip_service_url: String,
    pub booking_service_url: String,
}

impl EnvironmentConfig {
    fn from_env(default_port: u16, default_database_url: &str) -> Self {
        Self {
            port: env::var("PORT")
                .map(|v| v.parse().expect("PORT must be a valid number"))
                .unwrap_or(default_port),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| default_database_url.to_string()),
            route_service_url: env::var("ROUTE_SERVICE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8002".to_string()),
            trip_service_url: env::var("TRIP_SERVICE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            booking_service_url: env::var("BOOKING_SERVICE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8001".to_string()),
        }
    }

    /// Configuración del servicio de rutas
    pub fn route_service() -> Self {
        Self::from_env(8002, "sqlite://route_service.db?mode=rwc")
    }

    /// Configuración del servicio de viajes
    pub fn trip_service() -> Self {
        Self::from_env(8000, "sqlite://trip_service.db?mode=rwc")
    }

    /// Configuración del servicio de reservas
    pub fn booking_service() -> Self {
        Self::from_env(8001, "sqlite://booking_service.db?mode=rwc")
    }
}
