use anyhow::Result;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;

use trip_booking::config::database::DatabaseConfig;
use trip_booking::config::environment::EnvironmentConfig;
use trip_booking::middleware::cors::cors_middleware;
use trip_booking::repositories::trip_repository::TripRepository;
use trip_booking::routes::trip_routes::create_trip_router;
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

    info!("🚐 Trip Service - Trip Booking");
    info!("==============================");

    let config = EnvironmentConfig::trip_service();

    let pool = DatabaseConfig::new(&config.database_url).create_pool().await?;
    TripRepository::new(pool.clone()).init_schema().await?;

    let state = AppState::new(pool, config.clone());
    let app = create_trip_router()
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("🔍 Endpoints disponibles:");
    info!("   POST /add_trip/ - Crear viaje (valida la ruta contra {})", config.route_service_url);
    info!("   GET  /trip_listing/ - Listar viajes con ruta y reservas (query, page)");
    info!("   GET  /trip_details/:trip_id/ - Detalle de viaje");
    info!("   GET  /health/ - Health check");

    server::serve(app, config.port).await
}
