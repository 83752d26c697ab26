use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid item ID format")]
    InvalidId(String),

    #[error("Item name is required")]
    NameRequired,

    #[error("Item not found")]
    NotFound(i32),

    /// Any failure of the backing store, including a row that vanished
    /// between the existence check and the write.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidId(_) | ItemError::NameRequired => {
                AppError::BadRequest(err.to_string())
            }
            ItemError::NotFound(_) => AppError::NotFound(err.to_string()),
            ItemError::Database(e) => AppError::internal(e),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
