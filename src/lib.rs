//! Homestay booking service.
//!
//! Room price suggestions, booking-calendar logic and room recommendations
//! for the Homestay hotel booking site, served over HTTP/JSON.

pub mod booking;
pub mod config;
pub mod error;
pub mod pricing;
pub mod recommend;

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::AppError;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_origin.as_deref());

    Router::new()
        .route("/health", get(health))
        .merge(pricing::router())
        .merge(booking::router())
        .merge(recommend::router())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let Some(origin) = origin else {
        return CorsLayer::permissive();
    };
    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(value))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
        Err(e) => {
            tracing::warn!("Invalid CORS origin {origin:?}: {e}, allowing any origin");
            CorsLayer::permissive()
        }
    }
}

fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Internal("handler panicked".to_string()).into_response()
}
