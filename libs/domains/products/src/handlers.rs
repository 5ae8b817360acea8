//! HTTP handlers for the products API and pages

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    routing::get,
};
use axum_helpers::{
    AppError, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestMismatchResponse, BadRequestValidationResponse,
        ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::api::{ApiResult, ProductsApiController};
use crate::controller::{ProductsController, ViewResult};
use crate::error::StoreResult;
use crate::models::Product;
use crate::repository::Repository;
use crate::validation::ModelState;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(get_products, get_product, put_product, post_product, delete_product),
    components(
        schemas(Product),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestMismatchResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

type ApiState<R> = State<Arc<ProductsApiController<R>>>;
type ViewState<R> = State<Arc<ProductsController<R>>>;

/// Create the products API router
pub fn router<R: Repository<Product> + 'static>(repository: Arc<R>) -> Router {
    let controller = Arc::new(ProductsApiController::from_shared(repository));

    Router::new()
        .route("/", get(get_products).post(post_product))
        .route(
            "/{id}",
            get(get_product).put(put_product).delete(delete_product),
        )
        .with_state(controller)
}

/// Create the router for the server-rendered product pages
pub fn views_router<R: Repository<Product> + 'static>(repository: Arc<R>) -> Router {
    let controller = Arc::new(ProductsController::from_shared(repository));

    Router::new()
        .route("/", get(index))
        .route("/details", get(details_without_id))
        .route("/details/{id}", get(details))
        .route("/create", get(create_form).post(create))
        .route("/edit", get(edit_without_id))
        .route("/edit/{id}", get(edit).post(edit_submit))
        .route("/delete", get(delete_without_id))
        .route("/delete/{id}", get(delete).post(delete_confirmed))
        .with_state(controller)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products<R: Repository<Product>>(
    State(controller): ApiState<R>,
) -> StoreResult<ApiResult<Vec<Product>>> {
    controller.get_products().await
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: Repository<Product>>(
    State(controller): ApiState<R>,
    IdPath(id): IdPath,
) -> StoreResult<ApiResult<Product>> {
    controller.get_product(id).await
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID, must match the body")
    ),
    request_body = Product,
    responses(
        (status = 204, description = "Product replaced"),
        (status = 400, response = BadRequestMismatchResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn put_product<R: Repository<Product>>(
    State(controller): ApiState<R>,
    IdPath(id): IdPath,
    ValidatedJson(product): ValidatedJson<Product>,
) -> StoreResult<ApiResult<Product>> {
    controller.put_product(id, product).await
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn post_product<R: Repository<Product>>(
    State(controller): ApiState<R>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> StoreResult<ApiResult<Product>> {
    controller.post_product(product).await
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: Repository<Product>>(
    State(controller): ApiState<R>,
    IdPath(id): IdPath,
) -> StoreResult<ApiResult<Product>> {
    controller.delete_product(id).await
}

async fn index<R: Repository<Product>>(
    State(controller): ViewState<R>,
) -> StoreResult<ViewResult> {
    controller.index().await
}

async fn details_without_id<R: Repository<Product>>(
    State(controller): ViewState<R>,
) -> StoreResult<ViewResult> {
    controller.details(None).await
}

async fn details<R: Repository<Product>>(
    State(controller): ViewState<R>,
    IdPath(id): IdPath,
) -> StoreResult<ViewResult> {
    controller.details(Some(id)).await
}

async fn create_form<R: Repository<Product>>(State(controller): ViewState<R>) -> ViewResult {
    controller.create_form()
}

async fn create<R: Repository<Product>>(
    State(controller): ViewState<R>,
    form: Result<Form<Product>, FormRejection>,
) -> Result<ViewResult, AppError> {
    let Form(product) = form?;
    let state = ModelState::of(&product);
    Ok(controller.create(product, state).await?)
}

async fn edit_without_id<R: Repository<Product>>(
    State(controller): ViewState<R>,
) -> StoreResult<ViewResult> {
    controller.edit(None).await
}

async fn edit<R: Repository<Product>>(
    State(controller): ViewState<R>,
    IdPath(id): IdPath,
) -> StoreResult<ViewResult> {
    controller.edit(Some(id)).await
}

async fn edit_submit<R: Repository<Product>>(
    State(controller): ViewState<R>,
    IdPath(id): IdPath,
    form: Result<Form<Product>, FormRejection>,
) -> Result<ViewResult, AppError> {
    let Form(product) = form?;
    let state = ModelState::of(&product);
    Ok(controller.edit_submit(id, product, state).await?)
}

async fn delete_without_id<R: Repository<Product>>(
    State(controller): ViewState<R>,
) -> StoreResult<ViewResult> {
    controller.delete(None).await
}

async fn delete<R: Repository<Product>>(
    State(controller): ViewState<R>,
    IdPath(id): IdPath,
) -> StoreResult<ViewResult> {
    controller.delete(Some(id)).await
}

async fn delete_confirmed<R: Repository<Product>>(
    State(controller): ViewState<R>,
    IdPath(id): IdPath,
) -> StoreResult<ViewResult> {
    controller.delete_confirmed(id).await
}

