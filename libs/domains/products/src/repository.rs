use async_trait::async_trait;

use crate::error::StoreResult;

/// An entity addressable by an integer identifier.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;

    /// Builds an otherwise empty entity carrying `id`.
    fn with_id(id: i32) -> Self;
}

/// Repository trait for entity persistence
///
/// The single dependency of both product controllers. Implementations decide
/// how identifiers are stored; callers assign them before `create`.
/// A lookup that finds nothing is `Ok(None)`, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository<T: Send + Sync + 'static>: Send + Sync {
    /// All stored entities, in store order
    async fn get_all(&self) -> StoreResult<Vec<T>>;

    /// Get an entity by ID
    async fn get_by_id(&self, id: i32) -> StoreResult<Option<T>>;

    /// Insert a new entity
    async fn create(&self, entity: T) -> StoreResult<()>;

    /// Replace the entity with the same identifier
    async fn update(&self, entity: T) -> StoreResult<()>;

    /// Remove the entity matching the identifier
    async fn delete(&self, entity: T) -> StoreResult<()>;
}
