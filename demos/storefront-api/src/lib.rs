//! Reference storefront REST API. Serves the catalog, checkout and signup
//! endpoints the storefront SDK consumes, backed by a JSON seed instead of a
//! database, and hosts the built frontend when running in production mode.

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::state::AppState;

/// Assemble the full application router. API routes live under `/api`; in
/// production the built frontend is served as the fallback, with unknown
/// paths rewritten to `index.html` for client-side routing.
pub fn app(state: Arc<AppState>, config: &Config) -> Router {
    let mut router = Router::new()
        .nest("/api", routes::api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(state);

    if config.app_env == "production" {
        let dir = Path::new(&config.static_dir);
        let index = dir.join("index.html");
        router =
            router.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)));
    }

    router
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    // Refuse to start without a catalog, the same way the server would
    // refuse to start without its database.
    let catalog = match Catalog::load(Path::new(&config.catalog_seed)) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Could not load catalog seed {}: {e}", config.catalog_seed);
            std::process::exit(1);
        }
    };
    info!(
        "Catalog ready: {} products in {} categories",
        catalog.products().len(),
        catalog.categories().len()
    );

    let state = Arc::new(AppState::new(catalog));
    let app = app(state, &config);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping malformed CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
