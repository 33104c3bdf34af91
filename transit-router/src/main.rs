use std::error::Error;
use std::net::SocketAddr;

use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use transit_router::cache::{CacheConfig, RouteCache};
use transit_router::network::NetworkDocument;
use transit_router::web::{AppState, create_router};

/// Path of the network document to serve.
const NETWORK_ENV: &str = "TRANSIT_NETWORK";

/// Listen address override.
const ADDR_ENV: &str = "TRANSIT_ADDR";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logger();

    let network_path = std::env::var(NETWORK_ENV)
        .map_err(|_| format!("{NETWORK_ENV} must name a network document"))?;
    let addr: SocketAddr = std::env::var(ADDR_ENV)
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    // Load and finalize the network
    let router = NetworkDocument::from_path(&network_path)?.into_router()?;
    info!(
        stops = router.catalogue().stop_count(),
        buses = router.catalogue().buses().len(),
        "Network ready"
    );

    let cache = RouteCache::new(&CacheConfig::default());
    let state = AppState::new(router, cache);
    let app = create_router(state);

    info!(%addr, "Transit router listening");
    info!("  GET  /health            - Health check");
    info!("  GET  /stops/{{name}}      - Buses serving a stop");
    info!("  GET  /buses/{{name}}      - Bus statistics");
    info!("  GET  /route?from=&to=   - Fastest journey");
    info!("  POST /stats             - Batch statistics requests");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
