use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;
use crate::views;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error")]
    DatabaseError(#[source] StoreError),

    #[error("Internal server error")]
    InternalServerError(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("record no longer exists".to_string()),
            other => AppError::DatabaseError(other),
        }
    }
}

impl AppError {
    pub fn venue_not_found(id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("Venue with id '{}' was not found", id))
    }

    pub fn artist_not_found(id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("Artist with id '{}' was not found", id))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::NotFound(msg) => {
                warn!(code = self.code(), message = %msg, "Not found");
            }
            AppError::InternalServerError(msg) => {
                error!(code = self.code(), message = %msg, "Application error");
            }
            AppError::DatabaseError(e) => {
                error!(code = self.code(), error = ?e, "Database error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal details
        self.log();

        // Error pages never echo store or panic details to the browser
        let page = match status {
            StatusCode::NOT_FOUND => views::errors::not_found(),
            _ => views::errors::server_error(),
        };

        (status, page).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = AppError::from(StoreError::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_store_failures_map_to_500() {
        let err = AppError::from(StoreError::MissingReference("venue"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "DATABASE_ERROR");

        let err = AppError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_page_hides_details() {
        let response =
            AppError::InternalServerError("secret stack trace".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
