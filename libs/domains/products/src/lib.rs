//! Products Domain
//!
//! CRUD for a single `Product` resource, exposed twice: as server-rendered
//! pages and as a JSON API. Both controllers share one set of decision rules.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │         Handlers         │  ← axum routers (pages + API)
//! └────────────┬─────────────┘
//!              │
//! ┌────────────▼─────────────┐
//! │ Controllers (view / API) │  ← translate outcomes per surface
//! └────────────┬─────────────┘
//!              │
//! ┌────────────▼─────────────┐
//! │         Decision         │  ← id checks, existence, validity
//! └────────────┬─────────────┘
//!              │
//! ┌────────────▼─────────────┐
//! │        Repository        │  ← generic trait + in-memory store
//! └──────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_products::{handlers, seed_products, InMemoryRepository};
//!
//! let repository = Arc::new(InMemoryRepository::with_entities(seed_products()));
//!
//! let api = axum::Router::new().nest("/products", handlers::router(repository.clone()));
//! let pages = axum::Router::new().nest("/products", handlers::views_router(repository));
//! ```

pub mod api;
pub mod controller;
pub mod decision;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod outcome;
pub mod repository;
pub mod validation;

// Re-export commonly used types
pub use api::{ApiResult, ProductsApiController};
pub use controller::{Action, ProductsController, View, ViewModel, ViewResult};
pub use error::{StoreError, StoreResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryRepository;
pub use models::{Product, seed_products};
pub use outcome::Outcome;
pub use repository::{Entity, Repository};
pub use validation::ModelState;
