//! SkinRank Web Server
//!
//! Run with: cargo run -p skinrank-web

use skinrank_common::{AppConfig, ConfigSource};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = AppConfig::load()?;

    // Initialize tracing; RUST_LOG overrides the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting SkinRank Web Server...");
    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "loaded config file"),
        ConfigSource::Defaults(path) => {
            info!(path = %path.display(), "config file not found, using defaults")
        }
    }

    let state = skinrank_web::state::AppState::builtin();
    info!(conditions = state.table.len(), "condition table loaded");

    let app = skinrank_web::router::build_router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
