use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::render;

/// Application-level error type for HTTP handlers.
///
/// Any store failure is fatal to the request: the handler aborts and the
/// client gets a diagnostic error page instead of a partial listing.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx (connection or query failure).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error while serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The archive database is currently unavailable.",
                )
            }
        };

        (status, Html(render::error_page(status, message))).into_response()
    }
}
