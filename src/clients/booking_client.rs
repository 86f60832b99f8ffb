//! Client del servicio de reservas

use serde_json::Value;

use crate::clients::ClientError;

/// Client del listado de reservas, usado por el servicio de viajes para
/// adjuntar las reservas de cada viaje
#[derive(Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookingClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// GET booking_listing/?query={trip_id} : devuelve el array `bookings`
    ///
    /// El listado del peer filtra por icontains, y un trip_id completo solo
    /// puede aparecer en su propia columna, así que el filtro es exacto en
    /// la práctica.
    pub async fn fetch_bookings_for_trip(&self, trip_id: &str) -> Result<Vec<Value>, ClientError> {
        let url = format!(
            "{}/booking_listing/?query={}",
            self.base_url,
            urlencoding::encode(trip_id)
        );
        log::debug!("🌐 GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Unavailable(format!(
                "booking service returned status {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClientError::UnexpectedPayload(e.to_string()))?;

        match body.get("bookings") {
            Some(Value::Array(bookings)) => Ok(bookings.clone()),
            _ => Ok(Vec::new()),
        }
    }
}
