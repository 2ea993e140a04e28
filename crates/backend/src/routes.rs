use axum::http::{header, Method};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::config::Config;
use crate::shared::request_log::request_logger;

/// Static host: `/data/*` from the data directory, everything else from the
/// built frontend with `index.html` as fallback.
pub fn build_router(config: &Config) -> Router {
    let dist_dir = config.dist_dir();
    let data_dir = config.data_dir();

    tracing::info!("Serving frontend from {}", dist_dir.display());
    tracing::info!("Serving /data from {}", data_dir.display());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let frontend = ServeDir::new(&dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/data", ServeDir::new(data_dir))
        .fallback_service(frontend)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
