//! Products routes

use axum::Router;
use domain_products::handlers;

use crate::state::AppState;

/// Create products API router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.repository.clone())
}

/// Create product pages router
pub fn views(state: &AppState) -> Router {
    handlers::views_router(state.repository.clone())
}
