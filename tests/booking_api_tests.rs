//! Tests de integración del servicio de reservas
//!
//! Cubren la confirmación remota del viaje en el alta y la lectura
//! compuesta Booking → Trip → Route con sus degradaciones parciales.

mod common;

use axum::http::StatusCode;
use axum::Json;
use axum::Router;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use trip_booking::models::booking::NewBooking;
use trip_booking::models::trip::NewTrip;
use trip_booking::repositories::booking_repository::BookingRepository;
use trip_booking::repositories::trip_repository::TripRepository;

use common::*;

fn booking_body(ticket_id: &str, trip_id: &str) -> Value {
    json!({
        "ticket_id": ticket_id,
        "trip_id": trip_id,
        "traveller_name": "Ana Prieto",
        "traveller_number": "9876543210",
        "ticket_cost": "49.99",
        "traveller_email": "ana@example.com",
    })
}

fn seeded_booking(ticket_id: &str, trip_id: &str) -> NewBooking {
    NewBooking {
        ticket_id: ticket_id.to_string(),
        trip_id: trip_id.to_string(),
        traveller_name: "Ana Prieto".to_string(),
        traveller_number: "9876543210".to_string(),
        ticket_cost: Decimal::new(4999, 2),
        traveller_email: "ana@example.com".to_string(),
    }
}

/// Servicios de rutas y viajes reales con una ruta y un viaje sembrados,
/// más el servicio de reservas apuntando a ambos
async fn booking_env_with_trip(trip_id: &str, route_id: &str) -> (Router, sqlx::SqlitePool) {
    let (route_app, _route_pool) = route_service_app().await;
    let (status, _) = post_json(
        &route_app,
        "/add_route/",
        json!({
            "route_id": route_id,
            "user_id": "U001",
            "route_name": "Coast Line",
            "route_origin": "Porto",
            "route_destination": "Lisboa",
            "stops": ["SP001", "SP002"],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let route_url = spawn_app(route_app).await;

    let mut trip_config = test_config();
    trip_config.route_service_url = route_url.clone();
    let (trip_app, trip_pool) = trip_service_app(trip_config).await;
    TripRepository::new(trip_pool.clone())
        .create(NewTrip {
            trip_id: trip_id.to_string(),
            user_id: "U001".to_string(),
            vehicle_id: "V001".to_string(),
            driver_name: "Marta Ruiz".to_string(),
            trip_distance: Decimal::new(12550, 2),
            route_id: route_id.to_string(),
        })
        .await
        .unwrap();

    let mut config = test_config();
    config.trip_service_url = spawn_app(trip_app).await;
    config.route_service_url = route_url;
    booking_service_app(config).await
}

#[tokio::test]
async fn test_health_check() {
    let (app, _pool) = booking_service_app(test_config()).await;
    let (status, body) = get(&app, "/health/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "booking-service");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_add_booking_then_composite_details() {
    let (app, _pool) = booking_env_with_trip("TP00000001", "RT00000001").await;

    let (status, body) =
        post_json(&app, "/add_booking/", booking_body("TK00000001", "TP00000001")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Booking added successfully");
    assert_eq!(body["ticket_id"], "TK00000001");

    let (status, body) = get(&app, "/booking_details/TK00000001/").await;
    assert_eq!(status, StatusCode::OK);

    let booking = &body["booking"];
    assert_eq!(booking["ticket_id"], "TK00000001");
    assert_eq!(booking["trip_id"], "TP00000001");
    assert_eq!(booking["traveller_name"], "Ana Prieto");
    assert_eq!(booking["traveller_number"], "9876543210");
    assert_eq!(booking["ticket_cost"], "49.99");
    assert_eq!(booking["traveller_email"], "ana@example.com");
    assert_eq!(booking.as_object().unwrap().len(), 6);

    // Primer salto: el viaje del servicio de viajes
    assert_eq!(body["trip"]["trip_id"], "TP00000001");
    assert_eq!(body["trip"]["driver_name"], "Marta Ruiz");
    // Segundo salto: la ruta que el viaje referencia
    assert_eq!(body["route"]["route_id"], "RT00000001");
    assert_eq!(body["route"]["route_name"], "Coast Line");
}

#[tokio::test]
async fn test_add_booking_validation_order() {
    let (app, _pool) = booking_service_app(test_config()).await;

    let mut body = booking_body("TK00000001", "TP00000001");
    body.as_object_mut().unwrap().remove("ticket_id");
    let (status, body) = post_json(&app, "/add_booking/", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: ticket_id");

    let (status, body) =
        post_json(&app, "/add_booking/", booking_body("TK123", "TP00000001")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid ticket_id format"));

    let (status, body) =
        post_json(&app, "/add_booking/", booking_body("TK00000001", "TX00000001")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid trip_id format"));

    let mut body = booking_body("TK00000001", "TP00000001");
    body["traveller_number"] = json!("12345");
    let (status, body) = post_json(&app, "/add_booking/", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid traveller_number format"));

    let mut body = booking_body("TK00000001", "TP00000001");
    body["traveller_email"] = json!("ana@example");
    let (status, body) = post_json(&app, "/add_booking/", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid traveller_email format");
}

#[tokio::test]
async fn test_add_booking_unresolved_trip_not_persisted() {
    // El servicio de viajes existe pero no tiene ese viaje: responde 404
    let (app, _pool) = booking_env_with_trip("TP00000001", "RT00000001").await;

    let (status, body) =
        post_json(&app, "/add_booking/", booking_body("TK00000001", "TP99999999")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid trip_id or trip does not exist");

    // La fila no se escribió
    let (status, _) = get(&app, "/booking_details/TK00000001/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_booking_mismatched_trip_id_rejected() {
    // Un peer que contesta 200 con otro trip_id no valida la referencia
    let stub = Router::new().route(
        "/trip_details/:trip_id/",
        axum::routing::get(|| async {
            Json(json!({ "trip": { "trip_id": "TP00000002" } }))
        }),
    );
    let mut config = test_config();
    config.trip_service_url = spawn_app(stub).await;
    let (app, _pool) = booking_service_app(config).await;

    let (status, body) =
        post_json(&app, "/add_booking/", booking_body("TK00000001", "TP00000001")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Provided trip_id does not match the trip_id from the trip service"
    );

    let (status, _) = get(&app, "/booking_details/TK00000001/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_booking_trip_service_unreachable_is_503() {
    let (app, _pool) = booking_service_app(test_config()).await;

    let (status, body) =
        post_json(&app, "/add_booking/", booking_body("TK00000001", "TP00000001")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Trip service is unavailable"));

    let (status, _) = get(&app, "/booking_details/TK00000001/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_booking_duplicate_trip_reference() {
    let (app, _pool) = booking_env_with_trip("TP00000001", "RT00000001").await;

    let (status, _) =
        post_json(&app, "/add_booking/", booking_body("TK00000001", "TP00000001")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        post_json(&app, "/add_booking/", booking_body("TK00000002", "TP00000001")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Trip ID already exists");
}

#[tokio::test]
async fn test_booking_details_survives_unreachable_peer() {
    // Reserva sembrada en local; ambos peers caídos
    let (app, pool) = booking_service_app(test_config()).await;
    BookingRepository::new(pool.clone())
        .create(seeded_booking("TK00000001", "TP00000001"))
        .await
        .unwrap();

    let (status, body) = get(&app, "/booking_details/TK00000001/").await;
    // Nunca un 500 ni un 404 por el peer: la reserva local siempre vuelve
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["ticket_id"], "TK00000001");
    assert_eq!(body["trip"], json!({}));
    assert_eq!(body["route"], json!({}));
}

#[tokio::test]
async fn test_booking_details_skips_route_hop_without_route_id() {
    // El viaje llega sin route_id: el salto a rutas ni se intenta
    let stub = Router::new().route(
        "/trip_details/:trip_id/",
        axum::routing::get(|| async {
            Json(json!({ "trip": { "trip_id": "TP00000001", "driver_name": "Marta Ruiz" } }))
        }),
    );
    let mut config = test_config();
    config.trip_service_url = spawn_app(stub).await;
    let (app, pool) = booking_service_app(config).await;
    BookingRepository::new(pool.clone())
        .create(seeded_booking("TK00000001", "TP00000001"))
        .await
        .unwrap();

    let (status, body) = get(&app, "/booking_details/TK00000001/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trip"]["driver_name"], "Marta Ruiz");
    assert_eq!(body["route"], json!({}));
}

#[tokio::test]
async fn test_booking_listing_shape_sort_and_filter() {
    let (app, pool) = booking_service_app(test_config()).await;
    let repository = BookingRepository::new(pool.clone());

    let mut cheap = seeded_booking("TK00000002", "TP00000002");
    cheap.ticket_cost = Decimal::new(950, 2);
    cheap.traveller_email = "cheap@example.com".to_string();
    repository.create(cheap).await.unwrap();

    let mut pricey = seeded_booking("TK00000001", "TP00000001");
    pricey.ticket_cost = Decimal::new(10000, 2);
    pricey.traveller_email = "pricey@example.com".to_string();
    repository.create(pricey).await.unwrap();

    // Sin metadatos de página: solo la clave bookings
    let (status, body) = get(&app, "/booking_listing/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 1);
    assert_eq!(body["bookings"].as_array().unwrap().len(), 2);

    // El coste ordena numéricamente aunque se persista como texto
    let (_, body) = get(&app, "/booking_listing/?sort_by=ticket_cost").await;
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings[0]["ticket_cost"], "9.50");
    assert_eq!(bookings[1]["ticket_cost"], "100.00");

    // icontains sobre el email
    let (_, body) = get(&app, "/booking_listing/?query=PRICEY").await;
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["ticket_id"], "TK00000001");
}

#[tokio::test]
async fn test_booking_listing_page_clamping() {
    let (app, pool) = booking_service_app(test_config()).await;
    let repository = BookingRepository::new(pool.clone());
    for i in 0..12 {
        repository
            .create(seeded_booking(
                &format!("TK000000{:02}", i),
                &format!("TP000000{:02}", i),
            ))
            .await
            .unwrap();
    }

    let (_, body) = get(&app, "/booking_listing/?page=999").await;
    // Fuera de rango: última página (2 filas de 12)
    assert_eq!(body["bookings"].as_array().unwrap().len(), 2);

    let (_, body) = get(&app, "/booking_listing/?page=abc").await;
    // No numérico: primera página
    assert_eq!(body["bookings"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_add_booking_malformed_json() {
    let (app, _pool) = booking_service_app(test_config()).await;

    let (status, body) = post_raw(&app, "/add_booking/", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON data");
}

#[tokio::test]
async fn test_booking_details_not_found() {
    let (app, _pool) = booking_service_app(test_config()).await;

    let (status, body) = get(&app, "/booking_details/TK99999999/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Booking not found");
}

#[tokio::test]
async fn test_method_not_allowed_is_bare_405() {
    let (app, _pool) = booking_service_app(test_config()).await;

    let (status, body) = get(&app, "/add_booking/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, Value::Null);
}
