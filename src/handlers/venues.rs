use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use super::{home_with, parse_id};
use crate::aggregate::{group_by_locality, search_results, UpcomingCounts, VenueDetail};
use crate::forms::{FieldErrors, FormData, VenueForm};
use crate::utils::error::AppError;
use crate::utils::response::outcome;
use crate::views::{self, venues::VenueFormTarget, Flash};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> Result<Response, AppError> {
    let venues = state.store.list_venues().await?;
    let shows = state.store.list_shows().await?;
    let counts = UpcomingCounts::by_venue(&shows, &Utc::now());
    let areas = group_by_locality(&venues, &counts);
    Ok(views::venues::list(&areas).into_response())
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let venues = state.store.search_venues(&form.search_term).await?;
    let shows = state.store.list_shows().await?;
    let counts = UpcomingCounts::by_venue(&shows, &Utc::now());
    let results = search_results(&venues, &counts);
    debug!(term = %form.search_term, count = results.count, "Venue search");
    Ok(views::venues::search(&results, &form.search_term).into_response())
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id).ok_or_else(|| AppError::venue_not_found(&raw_id))?;
    let venue = state
        .store
        .get_venue(id)
        .await?
        .ok_or_else(|| AppError::venue_not_found(id))?;
    let shows = state.store.venue_shows(id).await?;
    let detail = VenueDetail::assemble(venue, &shows, &Utc::now());
    Ok(views::venues::detail(&detail).into_response())
}

/// GET /venues/create
pub async fn create_venue_form() -> Response {
    views::venues::form(
        &VenueForm::default(),
        &FieldErrors::default(),
        VenueFormTarget::Create,
    )
    .into_response()
}

/// POST /venues/create
///
/// Answers with the home page whether or not the insert succeeded; the
/// outcome is reported through the flash message.
pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let form = VenueForm::from_data(&FormData::new(fields));
    let new_venue = match form.validate() {
        Ok(venue) => venue,
        Err(errors) => {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Venue form rejected");
            return views::venues::form(&form, &errors, VenueFormTarget::Create).into_response();
        }
    };

    let name = new_venue.name.clone();
    match state.store.create_venue(new_venue).await {
        Ok(venue) => {
            info!(venue_id = venue.id, "Venue listed");
            home_with(Flash::Success(format!(
                "Venue {} was successfully listed!",
                venue.name
            )))
        }
        Err(e) => {
            error!(error = ?e, venue = %name, "Failed to list venue");
            home_with(Flash::Error(format!(
                "An error occurred. Venue {} could not be listed.",
                name
            )))
        }
    }
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id).ok_or_else(|| AppError::venue_not_found(&raw_id))?;
    let venue = state
        .store
        .get_venue(id)
        .await?
        .ok_or_else(|| AppError::venue_not_found(id))?;
    Ok(views::venues::form(
        &VenueForm::from_venue(&venue),
        &FieldErrors::default(),
        VenueFormTarget::Edit(id),
    )
    .into_response())
}

/// POST /venues/:id/edit
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id).ok_or_else(|| AppError::venue_not_found(&raw_id))?;
    if state.store.get_venue(id).await?.is_none() {
        return Err(AppError::venue_not_found(id));
    }

    let form = VenueForm::from_data(&FormData::new(fields));
    match form.validate() {
        Ok(changes) => {
            let venue = state.store.update_venue(id, changes).await?;
            info!(venue_id = venue.id, "Venue updated");
            Ok(Redirect::to(&format!("/venues/{}", venue.id)).into_response())
        }
        Err(errors) => {
            debug!(venue_id = id, fields = ?errors.fields().collect::<Vec<_>>(), "Venue edit rejected");
            Ok(views::venues::form(&form, &errors, VenueFormTarget::Edit(id)).into_response())
        }
    }
}

/// DELETE /venues/:id
///
/// Always answers 200 with `{"message": "Succeed" | "Failed"}`.
pub async fn delete_venue(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        warn!(venue_id = %raw_id, "Delete requested for malformed venue id");
        return outcome(false).into_response();
    };

    match state.store.delete_venue(id).await {
        Ok(()) => {
            info!(venue_id = id, "Venue deleted");
            outcome(true).into_response()
        }
        Err(e) => {
            warn!(venue_id = id, error = ?e, "Venue could not be deleted");
            outcome(false).into_response()
        }
    }
}
