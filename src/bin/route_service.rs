use anyhow::Result;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;

use trip_booking::config::database::DatabaseConfig;
use trip_booking::config::environment::EnvironmentConfig;
use trip_booking::middleware::cors::cors_middleware;
use trip_booking::repositories::route_repository::RouteRepository;
use trip_booking::routes::route_routes::create_route_router;
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

    info!("🗺️ Route Service - Trip Booking");
    info!("================================");

    let config = EnvironmentConfig::route_service();

    let pool = DatabaseConfig::new(&config.database_url).create_pool().await?;
    RouteRepository::new(pool.clone()).init_schema().await?;

    let state = AppState::new(pool, config.clone());
    let app = create_route_router()
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("🔍 Endpoints disponibles:");
    info!("   POST /add_route/ - Crear ruta");
    info!("   GET  /route_listing/ - Listar rutas (query, sort_by, page)");
    info!("   GET  /route_details/:route_id/ - Detalle de ruta");
    info!("   GET  /health/ - Health check");

    server::serve(app, config.port).await
}
