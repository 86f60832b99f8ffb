//! Client del servicio de viajes

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::clients::ClientError;

/// Resolver de referencias trip_id contra el endpoint de detalle del
/// servicio de viajes
#[derive(Clone)]
pub struct TripClient {
    http: reqwest::Client,
    base_url: String,
}

impl TripClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// GET trip_details/{trip_id}/ : devuelve el objeto `trip` del peer
    pub async fn fetch_trip(&self, trip_id: &str) -> Result<Value, ClientError> {
        let url = format!("{}/trip_details/{}/", self.base_url, trip_id);
        log::debug!("🌐 GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                let body: Value = response
                    .json()
                    .await
                    .map_err(|e| ClientError::UnexpectedPayload(e.to_string()))?;
                Ok(body.get("trip").cloned().unwrap_or_else(|| json!({})))
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            status => Err(ClientError::Unavailable(format!(
                "trip service returned status {}",
                status
            ))),
        }
    }
}
