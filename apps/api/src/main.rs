use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use syncpro_api::config::Config;
use syncpro_api::extraction::gemini::{self, GeminiExtractor};
use syncpro_api::routes::build_router;
use syncpro_api::session::SessionStore;
use syncpro_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SyncPro API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the extraction client
    let extractor = Arc::new(GeminiExtractor::with_base_url(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
    ));
    info!("Extraction client initialized (model: {})", gemini::MODEL);

    // Build app state
    let state = AppState {
        sessions: SessionStore::default(),
        extractor,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
