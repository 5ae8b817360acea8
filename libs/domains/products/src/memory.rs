//! In-memory repository backed by an ordered map.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::error::{StoreError, StoreResult};
use crate::repository::{Entity, Repository};

/// Keeps entities in a `BTreeMap` keyed by identifier, so `get_all` is ordered by id.
///
/// Each operation takes the lock once, which makes single-entity operations atomic.
pub struct InMemoryRepository<T> {
    entities: RwLock<BTreeMap<i32, T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(BTreeMap::new()),
        }
    }

    /// Seeds the store. A later entity with a repeated identifier replaces the earlier one.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let entities = entities
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();
        Self {
            entities: RwLock::new(entities),
        }
    }

    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> StoreResult<Vec<T>> {
        let entities = self.entities.read().await;
        debug!(count = entities.len(), "Listing entities");
        Ok(entities.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<Option<T>> {
        Ok(self.entities.read().await.get(&id).cloned())
    }

    #[instrument(skip(self, entity), fields(entity_id = entity.id()))]
    async fn create(&self, entity: T) -> StoreResult<()> {
        let id = entity.id();
        let mut entities = self.entities.write().await;
        if entities.contains_key(&id) {
            return Err(StoreError::Conflict(id));
        }
        entities.insert(id, entity);
        info!("Entity created");
        Ok(())
    }

    #[instrument(skip(self, entity), fields(entity_id = entity.id()))]
    async fn update(&self, entity: T) -> StoreResult<()> {
        let id = entity.id();
        let mut entities = self.entities.write().await;
        match entities.get_mut(&id) {
            Some(slot) => {
                *slot = entity;
                info!("Entity updated");
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    #[instrument(skip(self, entity), fields(entity_id = entity.id()))]
    async fn delete(&self, entity: T) -> StoreResult<()> {
        if self.entities.write().await.remove(&entity.id()).is_some() {
            info!("Entity deleted");
        } else {
            debug!("Delete of unknown entity ignored");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, seed_products};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_get_all_is_ordered_by_id() {
        let mut seeds = seed_products();
        seeds.reverse();
        let repo = InMemoryRepository::with_entities(seeds);

        let all = repo.get_all().await.unwrap();
        let ids: Vec<i32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let repo = InMemoryRepository::<Product>::new();
        assert!(repo.get_all().await.unwrap().is_empty());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let repo = InMemoryRepository::with_entities(seed_products());
        assert_eq!(repo.get_by_id(0).await.unwrap(), None);
        assert_eq!(repo.get_by_id(2).await.unwrap().unwrap().name, "Defter");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repo = InMemoryRepository::with_entities(seed_products());
        let duplicate = Product::new(1, "Silgi", Decimal::from(5), 3, "Beyaz");

        let err = repo.create(duplicate).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(1)));
        assert_eq!(repo.get_by_id(1).await.unwrap().unwrap().name, "Kalem");
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = InMemoryRepository::new();
        let product = Product::new(3, "Silgi", Decimal::from(5), 3, "Beyaz");

        repo.create(product.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(3).await.unwrap(), Some(product));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_replaces_whole_entity() {
        let repo = InMemoryRepository::with_entities(seed_products());
        let replacement = Product {
            id: 2,
            name: "Ajanda".to_string(),
            price: None,
            stock: None,
            color: "Siyah".to_string(),
        };

        repo.update(replacement.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(2).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryRepository::<Product>::new();
        let err = repo.update(Product::with_id(9)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_delete_by_identifier() {
        let repo = InMemoryRepository::with_entities(seed_products());

        repo.delete(Product::with_id(1)).await.unwrap();

        assert_eq!(repo.get_by_id(1).await.unwrap(), None);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = InMemoryRepository::with_entities(seed_products());
        repo.delete(Product::with_id(42)).await.unwrap();
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_repeated_listing_is_stable() {
        let repo = InMemoryRepository::with_entities(seed_products());
        let first = repo.get_all().await.unwrap();
        let second = repo.get_all().await.unwrap();
        assert_eq!(first, second);
    }
}
