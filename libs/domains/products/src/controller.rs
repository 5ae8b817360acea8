//! View-oriented products controller.
//!
//! Entrypoints return a [`ViewResult`]: a named view with its model, a
//! redirect to another action, or not-found. Rendering is left to whoever
//! consumes the result.

use axum::{
    Json,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use validator::ValidationErrors;

use crate::decision;
use crate::error::StoreResult;
use crate::models::Product;
use crate::outcome::Outcome;
use crate::repository::Repository;
use crate::validation::ModelState;
use axum_helpers::AppError;

/// Mount point of the view routes; redirects are built from it.
pub const PRODUCTS_VIEW_PATH: &str = "/products";

pub const INDEX: &str = "Index";
pub const DETAILS: &str = "Details";
pub const CREATE: &str = "Create";
pub const EDIT: &str = "Edit";
pub const DELETE: &str = "Delete";

/// Data handed to a view template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewModel {
    Product(Product),
    Products(Vec<Product>),
}

impl From<Product> for ViewModel {
    fn from(product: Product) -> Self {
        ViewModel::Product(product)
    }
}

impl From<Vec<Product>> for ViewModel {
    fn from(products: Vec<Product>) -> Self {
        ViewModel::Products(products)
    }
}

/// A view to render, serialized as `{ "view", "model", "errors"? }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    #[serde(rename = "view")]
    pub name: &'static str,
    pub model: ViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

/// Actions a view result can send the browser back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The product list
    Index,
}

impl Action {
    pub fn path(self) -> &'static str {
        match self {
            Action::Index => PRODUCTS_VIEW_PATH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewResult {
    View(View),
    RedirectToAction(Action),
    NotFound,
}

impl ViewResult {
    pub fn view(name: &'static str, model: impl Into<ViewModel>) -> Self {
        ViewResult::View(View {
            name,
            model: model.into(),
            errors: None,
        })
    }

    /// Translates a decision into the view vocabulary.
    ///
    /// Every successful mutation returns to the list, and an identifier
    /// mismatch is reported as not-found.
    pub fn from_outcome<M: Into<ViewModel>>(outcome: Outcome<M>, view: &'static str) -> Self {
        match outcome {
            Outcome::Ok(model) => Self::view(view, model),
            Outcome::Redirect | Outcome::Created { .. } | Outcome::NoContent => {
                ViewResult::RedirectToAction(Action::Index)
            }
            Outcome::NotFound | Outcome::BadRequest => ViewResult::NotFound,
        }
    }

    /// Attaches the field errors of an invalid submission to a rendered view.
    pub fn with_errors(self, state: ModelState) -> Self {
        match self {
            ViewResult::View(view) => ViewResult::View(View {
                errors: state.into_errors(),
                ..view
            }),
            other => other,
        }
    }
}

impl IntoResponse for ViewResult {
    fn into_response(self) -> Response {
        match self {
            ViewResult::View(view) => Json(view).into_response(),
            ViewResult::RedirectToAction(action) => Redirect::to(action.path()).into_response(),
            ViewResult::NotFound => {
                AppError::NotFound("Product not found".to_string()).into_response()
            }
        }
    }
}

/// Products controller for server-rendered pages.
pub struct ProductsController<R: Repository<Product>> {
    repository: Arc<R>,
}

impl<R: Repository<Product>> ProductsController<R> {
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    /// Builds a controller over a repository that other components also hold.
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn index(&self) -> StoreResult<ViewResult> {
        let outcome = decision::list::<Product, _>(self.repository.as_ref()).await?;
        Ok(ViewResult::from_outcome(outcome, INDEX))
    }

    /// Show one product; without an id, go back to the list
    #[instrument(skip(self))]
    pub async fn details(&self, id: Option<i32>) -> StoreResult<ViewResult> {
        let outcome =
            decision::find::<Product, _>(self.repository.as_ref(), id, Outcome::Redirect).await?;
        Ok(ViewResult::from_outcome(outcome, DETAILS))
    }

    /// Empty creation form
    pub fn create_form(&self) -> ViewResult {
        ViewResult::view(CREATE, Product::default())
    }

    /// Submit the creation form
    #[instrument(
        skip(self, product, state),
        fields(product_id = product.id, valid = state.is_valid())
    )]
    pub async fn create(&self, product: Product, state: ModelState) -> StoreResult<ViewResult> {
        let outcome = decision::submit_new(self.repository.as_ref(), product, &state).await?;
        Ok(ViewResult::from_outcome(outcome, CREATE).with_errors(state))
    }

    /// Edit form for an existing product
    #[instrument(skip(self))]
    pub async fn edit(&self, id: Option<i32>) -> StoreResult<ViewResult> {
        let outcome =
            decision::find::<Product, _>(self.repository.as_ref(), id, Outcome::Redirect).await?;
        Ok(ViewResult::from_outcome(outcome, EDIT))
    }

    /// Submit the edit form
    #[instrument(
        skip(self, product, state),
        fields(product_id = product.id, valid = state.is_valid())
    )]
    pub async fn edit_submit(
        &self,
        id: i32,
        product: Product,
        state: ModelState,
    ) -> StoreResult<ViewResult> {
        let outcome =
            decision::submit_replacement(self.repository.as_ref(), id, product, &state).await?;
        Ok(ViewResult::from_outcome(outcome, EDIT).with_errors(state))
    }

    /// Delete confirmation page; a missing id is not-found
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Option<i32>) -> StoreResult<ViewResult> {
        let outcome =
            decision::find::<Product, _>(self.repository.as_ref(), id, Outcome::NotFound).await?;
        Ok(ViewResult::from_outcome(outcome, DELETE))
    }

    /// Confirmed delete
    #[instrument(skip(self))]
    pub async fn delete_confirmed(&self, id: i32) -> StoreResult<ViewResult> {
        let outcome =
            decision::remove_confirmed::<Product, _>(self.repository.as_ref(), id).await?;
        Ok(ViewResult::from_outcome(outcome, DELETE))
    }
}
