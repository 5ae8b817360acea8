use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Product with id {0} already exists")]
    Conflict(i32),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Convert StoreError to AppError for standardized error responses
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            StoreError::Conflict(id) => {
                AppError::Conflict(format!("Product with id {} already exists", id))
            }
            StoreError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
