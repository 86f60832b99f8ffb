//! Clients - HTTP clients hacia los servicios hermanos
//!
//! Cada referencia débil (route_id, trip_id) se resuelve bajo demanda con
//! uno de estos clients contra el endpoint de detalle o listado del peer.
//! "No existe" y "no responde" son errores distintos: el que escribe decide
//! qué hacer con cada uno.

pub mod booking_client;
pub mod route_client;
pub mod trip_client;

use thiserror::Error;

pub use booking_client::BookingClient;
pub use route_client::RouteClient;
pub use trip_client::TripClient;

/// Errores de resolución contra un servicio hermano
#[derive(Debug, Error)]
pub enum ClientError {
    /// El peer respondió 404: el registro no existe
    #[error("not found")]
    NotFound,

    /// Fallo de transporte, timeout o estado no exitoso distinto de 404
    #[error("{0}")]
    Unavailable(String),

    /// El peer respondió 200 con un cuerpo que no se pudo interpretar
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),
}

/// Sondeo de arranque contra el health de un peer
///
/// Solo informa por log; un peer caído nunca impide arrancar el servicio.
pub async fn probe_peer(http: &reqwest::Client, base_url: &str, name: &str) {
    let url = format!("{}/health/", base_url);
    match http.get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            log::info!("✅ {} is reachable at {}", name, base_url);
        }
        Ok(response) => {
            log::warn!(
                "⚠️ {} is not reachable. Status code: {}",
                name,
                response.status()
            );
        }
        Err(e) => {
            log::warn!("❌ Failed to connect to {}: {}", name, e);
        }
    }
}
