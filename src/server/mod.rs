//! HTTP server setup.
//!
//! The router is built from an explicit [`AppState`], so tests can run it
//! against a stub [`Fetcher`].

mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::models::Config;
use crate::services::{Fetcher, HttpFetcher, MovieCatalog};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MovieCatalog>,
}

impl AppState {
    pub fn new(catalog: MovieCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Build state from configuration with the given fetcher.
    pub fn from_config(config: &Config, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        Ok(Self::new(MovieCatalog::new(config, fetcher)?))
    }
}

/// Build the Axum application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/api/category/:category", get(routes::category_by_path))
        .route("/api/get_by_category", get(routes::category_by_query))
        .route("/api/search", get(routes::search))
        .route("/api/movie/:id", get(routes::movie))
        .route("/api/categories", get(routes::categories))
        .route("/api/get_all_movies", get(routes::all_movies))
        .route("/health", get(routes::health))
        .fallback(routes::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let fetcher = Arc::new(HttpFetcher::from_config(&config.upstream)?);
    let state = AppState::from_config(config, fetcher)?;
    let app = build_router(state);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Listening on http://{}", addr);
    log::info!("Proxying {}", config.upstream.base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
