use anyhow::Result;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;

use trip_booking::clients::probe_peer;
use trip_booking::config::database::DatabaseConfig;
use trip_booking::config::environment::EnvironmentConfig;
use trip_booking::middleware::cors::cors_middleware;
use trip_booking::repositories::booking_repository::BookingRepository;
use trip_booking::routes::booking_routes::create_booking_router;
use trip_booking::server;
use trip_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🎫 Booking Service - Trip Booking");
    info!("=================================");

    let config = EnvironmentConfig::booking_service();

    let pool = DatabaseConfig::new(&config.database_url).create_pool().await?;
    BookingRepository::new(pool.clone()).init_schema().await?;

    let state = AppState::new(pool, config.clone());

    // Sondeo informativo: un peer caído no impide arrancar
    probe_peer(&state.http_client, &config.trip_service_url, "Trip service").await;

    let app = create_booking_router()
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("🔍 Endpoints disponibles:");
    info!("   POST /add_booking/ - Crear reserva (confirma el viaje contra {})", config.trip_service_url);
    info!("   GET  /booking_listing/ - Listar reservas (query, sort_by, page)");
    info!("   GET  /booking_details/:ticket_id/ - Detalle compuesto reserva+viaje+ruta");
    info!("   GET  /health/ - Health check");

    server::serve(app, config.port).await
}
