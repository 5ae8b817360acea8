//! Decision rules shared by the view and API controllers.
//!
//! Each function performs the checks of one entrypoint in order (identifier
//! presence, existence, identifier/payload consistency, validity) and returns
//! an [`Outcome`]. Repository faults propagate unchanged.

use crate::error::StoreResult;
use crate::outcome::Outcome;
use crate::repository::{Entity, Repository};
use crate::validation::ModelState;

/// Every stored entity.
pub async fn list<T, R>(repository: &R) -> StoreResult<Outcome<Vec<T>>>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    Ok(Outcome::Ok(repository.get_all().await?))
}

/// Resolves an optional route identifier to an entity.
///
/// A missing identifier yields `when_missing` without touching the store; an
/// unknown one yields `NotFound`.
pub async fn find<T, R>(
    repository: &R,
    id: Option<i32>,
    when_missing: Outcome<T>,
) -> StoreResult<Outcome<T>>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    let Some(id) = id else {
        return Ok(when_missing);
    };

    Ok(match repository.get_by_id(id).await? {
        Some(entity) => Outcome::Ok(entity),
        None => Outcome::NotFound,
    })
}

/// Stores a new entity if the submission is valid, otherwise echoes it back.
pub async fn submit_new<T, R>(
    repository: &R,
    payload: T,
    state: &ModelState,
) -> StoreResult<Outcome<T>>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    if !state.is_valid() {
        return Ok(Outcome::Ok(payload));
    }

    let id = payload.id();
    repository.create(payload.clone()).await?;
    Ok(Outcome::Created { id, value: payload })
}

/// Replaces an entity wholesale.
///
/// The route identifier must match the payload's. Existence is not checked
/// here; what happens to an unknown identifier is up to the store.
pub async fn submit_replacement<T, R>(
    repository: &R,
    route_id: i32,
    payload: T,
    state: &ModelState,
) -> StoreResult<Outcome<T>>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    if route_id != payload.id() {
        return Ok(Outcome::BadRequest);
    }
    if !state.is_valid() {
        return Ok(Outcome::Ok(payload));
    }

    repository.update(payload).await?;
    Ok(Outcome::NoContent)
}

/// Deletes an entity that must exist.
pub async fn remove<T, R>(repository: &R, id: i32) -> StoreResult<Outcome<T>>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    let Some(entity) = repository.get_by_id(id).await? else {
        return Ok(Outcome::NotFound);
    };

    repository.delete(entity).await?;
    Ok(Outcome::NoContent)
}

/// Deletes by identifier whether or not the lookup finds the entity.
///
/// When nothing is found the store receives an entity carrying only `id`.
pub async fn remove_confirmed<T, R>(repository: &R, id: i32) -> StoreResult<Outcome<T>>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    let entity = repository
        .get_by_id(id)
        .await?
        .unwrap_or_else(|| T::with_id(id));

    repository.delete(entity).await?;
    Ok(Outcome::NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::Product;
    use crate::repository::MockRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_find_without_id_skips_store() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo.expect_get_by_id().never();

        let outcome = find(&mock_repo, None, Outcome::Redirect).await.unwrap();

        assert_eq!(outcome, Outcome::Redirect);
    }

    #[tokio::test]
    async fn test_mismatch_wins_over_invalid_state() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo.expect_update().never();

        let mut state = ModelState::valid();
        state.add_error("name", "Name is required");

        let outcome = submit_replacement(&mock_repo, 2, Product::with_id(1), &state)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::BadRequest);
    }

    #[tokio::test]
    async fn test_remove_confirmed_uses_placeholder_when_absent() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_delete()
            .with(eq(Product::with_id(5)))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = remove_confirmed(&mock_repo, 5).await.unwrap();

        assert_eq!(outcome, Outcome::<Product>::NoContent);
    }

    #[tokio::test]
    async fn test_store_faults_propagate() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(StoreError::Storage("unreachable".into())));

        let result = list(&mock_repo).await;

        assert!(matches!(result, Err(StoreError::Storage(_))));
    }
}
