//! Image toolbox: a thin proxy in front of third-party image services.
//!
//! Three stateless endpoints each turn one browser request into one provider
//! call and relay the result:
//!
//! - `POST /api/generate`: text-to-image via Volcengine Ark
//! - `POST /api/recognize`: image description via an Ark vision model
//! - `POST /api/remove-bg`: background removal via remove.bg (binary PNG out)

pub mod config;
pub mod error;
pub mod handlers;
pub mod providers;
pub mod telemetry;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::Config;
pub use error::Error;
pub use handlers::AppState;

pub fn build_router(config: &Config) -> anyhow::Result<Router> {
    let state = Arc::new(AppState::from_config(config)?);

    Ok(Router::new()
        .route("/", get(handlers::index::index))
        .route("/api/generate", post(handlers::generate::generate_image))
        .route("/api/recognize", post(handlers::recognize::recognize_image))
        .route("/api/remove-bg", post(handlers::remove_bg::remove_background))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .with_state(state))
}
