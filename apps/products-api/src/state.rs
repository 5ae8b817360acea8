//! Application state management

use domain_products::{InMemoryRepository, Product, seed_products};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub repository: Arc<InMemoryRepository<Product>>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let repository = if config.seed_products {
            InMemoryRepository::with_entities(seed_products())
        } else {
            InMemoryRepository::new()
        };

        Self {
            config,
            repository: Arc::new(repository),
        }
    }
}
