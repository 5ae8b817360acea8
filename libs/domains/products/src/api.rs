//! JSON API products controller.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use crate::decision;
use crate::error::StoreResult;
use crate::models::Product;
use crate::outcome::Outcome;
use crate::repository::Repository;
use crate::validation::ModelState;

/// Mount point of the API routes; `Location` headers are built from it.
pub const PRODUCTS_API_PATH: &str = "/api/products";

/// Action a created product can be fetched from.
pub const GET_PRODUCT: &str = "GetProduct";

/// HTTP-flavored result of an API entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    /// 200 with body
    Ok(T),
    /// 201 with body, located at `action` for `id`
    CreatedAtAction {
        action: &'static str,
        id: i32,
        value: T,
    },
    /// 204
    NoContent,
    /// 400
    BadRequest,
    /// 404
    NotFound,
}

impl<T> ApiResult<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiResult::Ok(_) => StatusCode::OK,
            ApiResult::CreatedAtAction { .. } => StatusCode::CREATED,
            ApiResult::NoContent => StatusCode::NO_CONTENT,
            ApiResult::BadRequest => StatusCode::BAD_REQUEST,
            ApiResult::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl<T> From<Outcome<T>> for ApiResult<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Ok(value) => ApiResult::Ok(value),
            Outcome::Created { id, value } => ApiResult::CreatedAtAction {
                action: GET_PRODUCT,
                id,
                value,
            },
            Outcome::NoContent => ApiResult::NoContent,
            Outcome::NotFound => ApiResult::NotFound,
            // The API has no list page to go back to.
            Outcome::BadRequest | Outcome::Redirect => ApiResult::BadRequest,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResult<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiResult::Ok(value) => (status, Json(value)).into_response(),
            ApiResult::CreatedAtAction { id, value, .. } => (
                status,
                [(header::LOCATION, format!("{}/{}", PRODUCTS_API_PATH, id))],
                Json(value),
            )
                .into_response(),
            ApiResult::NoContent => status.into_response(),
            ApiResult::BadRequest => {
                AppError::BadRequest("Route id does not match the product id".to_string())
                    .into_response()
            }
            ApiResult::NotFound => {
                AppError::NotFound("Product not found".to_string()).into_response()
            }
        }
    }
}

/// Products controller for the JSON API.
///
/// Payload validation happens in the request extractor, so every payload that
/// reaches this controller is treated as valid.
pub struct ProductsApiController<R: Repository<Product>> {
    repository: Arc<R>,
}

impl<R: Repository<Product>> ProductsApiController<R> {
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn get_products(&self) -> StoreResult<ApiResult<Vec<Product>>> {
        Ok(decision::list::<Product, _>(self.repository.as_ref())
            .await?
            .into())
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> StoreResult<ApiResult<Product>> {
        Ok(
            decision::find::<Product, _>(self.repository.as_ref(), Some(id), Outcome::NotFound)
                .await?
                .into(),
        )
    }

    /// Replace a product; the route id must match the body's
    #[instrument(skip(self, product), fields(body_id = product.id))]
    pub async fn put_product(&self, id: i32, product: Product) -> StoreResult<ApiResult<Product>> {
        let valid = ModelState::valid();
        Ok(
            decision::submit_replacement(self.repository.as_ref(), id, product, &valid)
                .await?
                .into(),
        )
    }

    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn post_product(&self, product: Product) -> StoreResult<ApiResult<Product>> {
        let valid = ModelState::valid();
        Ok(decision::submit_new(self.repository.as_ref(), product, &valid)
            .await?
            .into())
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> StoreResult<ApiResult<Product>> {
        Ok(decision::remove::<Product, _>(self.repository.as_ref(), id)
            .await?
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::seed_products;
    use crate::repository::MockRepository;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    fn defter() -> Product {
        seed_products().remove(1)
    }

    #[tokio::test]
    async fn test_get_products_returns_ok_with_all() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_get_all()
            .times(1)
            .returning(|| Ok(seed_products()));

        let result = ProductsApiController::new(mock_repo)
            .get_products()
            .await
            .unwrap();

        assert_eq!(result, ApiResult::Ok(seed_products()));
        assert_eq!(result.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_product_unknown_id_is_not_found() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(0))
            .times(1)
            .returning(|_| Ok(None));

        let result = ProductsApiController::new(mock_repo)
            .get_product(0)
            .await
            .unwrap();

        assert_eq!(result, ApiResult::NotFound);
    }

    #[tokio::test]
    async fn test_get_product_returns_ok() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(2))
            .returning(|_| Ok(Some(defter())));

        let result = ProductsApiController::new(mock_repo)
            .get_product(2)
            .await
            .unwrap();

        assert_eq!(result, ApiResult::Ok(defter()));
    }

    #[tokio::test]
    async fn test_put_id_mismatch_is_bad_request() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo.expect_update().never();

        let payload = Product { id: 1, ..defter() };

        let result = ProductsApiController::new(mock_repo)
            .put_product(2, payload)
            .await
            .unwrap();

        assert_eq!(result, ApiResult::BadRequest);
        assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_put_updates_once_and_returns_no_content() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_update()
            .with(eq(defter()))
            .times(1)
            .returning(|_| Ok(()));

        let result = ProductsApiController::new(mock_repo)
            .put_product(2, defter())
            .await
            .unwrap();

        assert_eq!(result, ApiResult::NoContent);
    }

    #[tokio::test]
    async fn test_put_store_not_found_propagates() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_update()
            .returning(|p| Err(StoreError::NotFound(p.id)));

        let result = ProductsApiController::new(mock_repo)
            .put_product(9, Product::with_id(9))
            .await;

        assert!(matches!(result, Err(StoreError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_post_creates_and_points_at_get_product() {
        let silgi = Product::new(3, "Silgi", Decimal::from(15), 4, "Beyaz");
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_create()
            .with(eq(silgi.clone()))
            .times(1)
            .returning(|_| Ok(()));

        let result = ProductsApiController::new(mock_repo)
            .post_product(silgi.clone())
            .await
            .unwrap();

        assert_eq!(
            result,
            ApiResult::CreatedAtAction {
                action: GET_PRODUCT,
                id: 3,
                value: silgi,
            }
        );

        let response = result.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/api/products/3");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(4))
            .returning(|_| Ok(None));
        mock_repo.expect_delete().never();

        let result = ProductsApiController::new(mock_repo)
            .delete_product(4)
            .await
            .unwrap();

        assert_eq!(result, ApiResult::NotFound);
    }

    #[tokio::test]
    async fn test_delete_existing_deletes_once() {
        let mut mock_repo = MockRepository::<Product>::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(Some(defter())));
        mock_repo
            .expect_delete()
            .with(eq(defter()))
            .times(1)
            .returning(|_| Ok(()));

        let result = ProductsApiController::new(mock_repo)
            .delete_product(2)
            .await
            .unwrap();

        assert_eq!(result, ApiResult::NoContent);
        assert_eq!(result.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_redirect_outcome_has_no_api_meaning() {
        assert_eq!(
            ApiResult::<Product>::from(Outcome::Redirect),
            ApiResult::BadRequest
        );
    }
}
