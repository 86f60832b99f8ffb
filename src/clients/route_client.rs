//! Client del servicio de rutas

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::clients::ClientError;

/// Resolver de referencias route_id contra el endpoint de detalle del
/// servicio de rutas
#[derive(Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouteClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// GET route_details/{route_id}/ : devuelve el objeto `route` del peer
    pub async fn fetch_route(&self, route_id: &str) -> Result<Value, ClientError> {
        let url = format!("{}/route_details/{}/", self.base_url, route_id);
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
                Ok(body.get("route").cloned().unwrap_or_else(|| json!({})))
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            status => Err(ClientError::Unavailable(format!(
                "route service returned status {}",
                status
            ))),
        }
    }
}
