//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Routes served under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Routes served at the root: product pages and health endpoints
pub fn pages(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::views(state))
        .merge(health::router(state.clone()))
}
