//! HTTP surface for a [`RecipeService`], built on axum.

use crate::service::RecipeService;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiResult};

/// Shared service handle passed to every handler.
pub type SharedService = Arc<RecipeService>;

/// Build the router with all routes, permissive CORS and request tracing.
pub fn build_router(service: SharedService) -> Router {
    Router::new()
        .route("/search", post(handlers::search))
        .route("/recipe/:backend/:name", get(handlers::recipe_detail))
        .route("/recipe/:name", get(handlers::recipe_without_backend))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
