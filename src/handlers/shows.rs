use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Form;
use chrono::Utc;
use tracing::{debug, error, info};

use super::home_with;
use crate::forms::{FieldErrors, FormData, ShowForm};
use crate::utils::error::AppError;
use crate::views::{self, Flash};
use crate::AppState;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> Result<Response, AppError> {
    let shows = state.store.list_shows().await?;
    Ok(views::shows::list(&shows).into_response())
}

/// GET /shows/create
pub async fn create_show_form() -> Response {
    views::shows::form(&ShowForm::starting_at(&Utc::now()), &FieldErrors::default())
        .into_response()
}

/// POST /shows/create
///
/// A show naming a venue or artist that does not exist is reported through
/// the flash message like any other failed insert.
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let form = ShowForm::from_data(&FormData::new(fields));
    let new_show = match form.validate() {
        Ok(show) => show,
        Err(errors) => {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Show form rejected");
            return views::shows::form(&form, &errors).into_response();
        }
    };

    match state.store.create_show(new_show).await {
        Ok(show) => {
            info!(
                show_id = show.id,
                venue_id = show.venue_id,
                artist_id = show.artist_id,
                "Show listed"
            );
            home_with(Flash::Success("Show was successfully listed!".to_string()))
        }
        Err(e) => {
            error!(error = ?e, "Failed to list show");
            home_with(Flash::Error(
                "An error occurred. Show could not be listed.".to_string(),
            ))
        }
    }
}
