use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orbit_server::catalog::NetworkCatalog;
use orbit_server::settings::Settings;
use orbit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    let catalog = settings.catalog.load()?;
    info!(
        catalog = ?settings.catalog,
        orbits = catalog.orbits().len(),
        vehicles = catalog.vehicles().len(),
        tie_break = %settings.planner.tie_break,
        visit_order = %settings.planner.visit_order,
        "Loaded catalog"
    );

    let state = AppState::new(catalog, settings.planner);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    info!(addr = %settings.addr, "Orbit planner listening");
    info!(
        "API endpoints: GET /health, GET /weather, GET /suburbs, GET /orbits, \
         POST /fastest, POST /fastest/multi-stop"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
