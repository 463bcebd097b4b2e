mod assets;
mod config;
mod error;
mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use assets::Assets;
use config::Config;
use routes::AppState;

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/wherestudy", get(routes::where_study))
        .route("/api/schools/{kind}", get(routes::schools))
        .route("/", get(routes::serve_index))
        .route("/home/{kind}", get(routes::serve_index))
        .with_state(state)
}

/// Build the full application router.
fn build_app(state: AppState, assets_dir: &Path) -> Router {
    let dist_dir = state.dist_dir.clone();
    // Static file routers are stateless; merge them after the API has its state.
    let static_files = Router::new()
        .nest("/static", cached_static_router(assets_dir, CACHE_1DAY))
        .nest("/dist", cached_static_router(&dist_dir, CACHE_IMMUTABLE))
        .nest(
            "/assets",
            cached_static_router(&dist_dir.join("assets"), CACHE_IMMUTABLE),
        );

    api_router(state)
        .merge(static_files)
        .layer(CompressionLayer::new())
        // The dev frontend is served from a different origin.
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();

    info!("Loading assets from {}", config.assets_dir.display());
    let assets = Arc::new(Assets::load(&config.assets_dir)?);

    let state = AppState {
        assets,
        dist_dir: config.dist_dir.clone(),
    };
    let app = build_app(state, &config.assets_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running at http://localhost:{}", config.port);
    info!("Field-of-study data at http://localhost:{}/api/wherestudy", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
