mod config;
mod models;
mod routes;
mod services;

use axum::{
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::youtube::{PlaylistSource, YouTubeClient};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn PlaylistSource>,
    pub start_time: Instant,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutorials_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    tracing::info!("Starting Tutorials Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.node_env);
    if config.playlist_id.is_empty() {
        tracing::warn!("PLAYLIST_ID is not set; playlist fetches will fail upstream");
    }

    // Initialize the YouTube client
    let youtube = Arc::new(YouTubeClient::new(&config));
    tracing::info!("YouTube client initialized");

    // Build application state
    let state = Arc::new(AppState {
        config,
        source: youtube,
        start_time: Instant::now(),
    });

    // Build router
    let app = Router::new()
        // Health endpoints
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/metrics", get(routes::health::metrics))
        // Tutorial catalog endpoint
        .route(
            "/api/tutorials",
            get(routes::tutorials::get_tutorials)
                .options(routes::tutorials::preflight)
                .fallback(routes::tutorials::method_not_allowed),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION]),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
