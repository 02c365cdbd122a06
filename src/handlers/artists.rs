use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use tracing::{debug, error, info};

use super::venues::SearchForm;
use super::{home_with, parse_id};
use crate::aggregate::{list_items, search_results, ArtistDetail, UpcomingCounts};
use crate::forms::{ArtistForm, FieldErrors, FormData};
use crate::utils::error::AppError;
use crate::views::{self, artists::ArtistFormTarget, Flash};
use crate::AppState;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Response, AppError> {
    let artists = state.store.list_artists().await?;
    let shows = state.store.list_shows().await?;
    let counts = UpcomingCounts::by_artist(&shows, &Utc::now());
    Ok(views::artists::list(&list_items(&artists, &counts)).into_response())
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let artists = state.store.search_artists(&form.search_term).await?;
    let shows = state.store.list_shows().await?;
    let counts = UpcomingCounts::by_artist(&shows, &Utc::now());
    let results = search_results(&artists, &counts);
    debug!(term = %form.search_term, count = results.count, "Artist search");
    Ok(views::artists::search(&results, &form.search_term).into_response())
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id).ok_or_else(|| AppError::artist_not_found(&raw_id))?;
    let artist = state
        .store
        .get_artist(id)
        .await?
        .ok_or_else(|| AppError::artist_not_found(id))?;
    let shows = state.store.artist_shows(id).await?;
    let detail = ArtistDetail::assemble(artist, &shows, &Utc::now());
    Ok(views::artists::detail(&detail).into_response())
}

/// GET /artists/create
pub async fn create_artist_form() -> Response {
    views::artists::form(
        &ArtistForm::default(),
        &FieldErrors::default(),
        ArtistFormTarget::Create,
    )
    .into_response()
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let form = ArtistForm::from_data(&FormData::new(fields));
    let new_artist = match form.validate() {
        Ok(artist) => artist,
        Err(errors) => {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Artist form rejected");
            return views::artists::form(&form, &errors, ArtistFormTarget::Create)
                .into_response();
        }
    };

    let name = new_artist.name.clone();
    match state.store.create_artist(new_artist).await {
        Ok(artist) => {
            info!(artist_id = artist.id, "Artist listed");
            home_with(Flash::Success(format!(
                "Artist {} was successfully listed!",
                artist.name
            )))
        }
        Err(e) => {
            error!(error = ?e, artist = %name, "Failed to list artist");
            home_with(Flash::Error(format!(
                "An error occurred. Artist {} could not be listed.",
                name
            )))
        }
    }
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id).ok_or_else(|| AppError::artist_not_found(&raw_id))?;
    let artist = state
        .store
        .get_artist(id)
        .await?
        .ok_or_else(|| AppError::artist_not_found(id))?;
    Ok(views::artists::form(
        &ArtistForm::from_artist(&artist),
        &FieldErrors::default(),
        ArtistFormTarget::Edit(id),
    )
    .into_response())
}

/// POST /artists/:id/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id).ok_or_else(|| AppError::artist_not_found(&raw_id))?;
    if state.store.get_artist(id).await?.is_none() {
        return Err(AppError::artist_not_found(id));
    }

    let form = ArtistForm::from_data(&FormData::new(fields));
    match form.validate() {
        Ok(changes) => {
            let artist = state.store.update_artist(id, changes).await?;
            info!(artist_id = artist.id, "Artist updated");
            Ok(Redirect::to(&format!("/artists/{}", artist.id)).into_response())
        }
        Err(errors) => {
            debug!(artist_id = id, fields = ?errors.fields().collect::<Vec<_>>(), "Artist edit rejected");
            Ok(views::artists::form(&form, &errors, ArtistFormTarget::Edit(id)).into_response())
        }
    }
}
