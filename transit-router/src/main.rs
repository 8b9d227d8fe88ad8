use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_router::cache::CacheConfig;
use transit_router::dataset::TransportData;
use transit_router::graph::build_graph;
use transit_router::planner::PlannerConfig;
use transit_router::web::{AppState, create_router};

/// Data file used when `TRANSPORT_DATA` is not set.
const DEFAULT_DATA_PATH: &str = "transport_data.json";

/// Listen address used when `BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_path =
        std::env::var("TRANSPORT_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;

    info!(path = %data_path, "loading transport data");
    let data = TransportData::load(&data_path)?;
    let registry = data.city_registry();

    let config = PlannerConfig::from_env();
    let report = build_graph(&registry, &data.departures, &config.transfer_settings());
    info!(
        cities = registry.len(),
        stations = report.graph.station_count(),
        connections = report.graph.connection_count(),
        skipped = report.skipped,
        "graph ready"
    );

    let state = AppState::new(report.graph, registry, config, &CacheConfig::default());
    let app = create_router(state);

    info!(%addr, "route planner listening");
    info!("  GET  /health       - Health check");
    info!("  GET  /cities       - List cities");
    info!("  GET  /graph/stats  - Graph size");
    info!("  POST /routes/plan  - Plan routes between two cities");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
