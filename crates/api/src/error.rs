use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use campusdb_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Every failure renders the same generic server error; the cause is logged
/// server-side and never surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(err) => tracing::error!(error = %err, "Store operation failed"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
