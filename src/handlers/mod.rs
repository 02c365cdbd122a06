use axum::response::{IntoResponse, Response};

use crate::utils::error::AppError;
use crate::utils::response::health;
use crate::views::{self, Flash};

pub mod artists;
pub mod shows;
pub mod venues;

pub async fn health_check() -> Response {
    health("fyyur").into_response()
}

pub async fn index() -> Response {
    views::pages::home(None).into_response()
}

/// Fallback for any unmatched route.
pub async fn not_found() -> Response {
    AppError::NotFound("No route matches the request".to_string()).into_response()
}

/// Home page carrying the outcome of a create submission.
pub(crate) fn home_with(flash: Flash) -> Response {
    views::pages::home(Some(&flash)).into_response()
}

/// Path ids that are not positive integers name no record.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
