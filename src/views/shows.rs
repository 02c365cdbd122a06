use axum::response::Html;

use super::form::{form_page, text_input};
use super::{escape, image, layout};
use crate::aggregate::format_start_time;
use crate::forms::{FieldErrors, ShowForm};
use crate::models::ShowListing;

pub fn list(shows: &[ShowListing]) -> Html<String> {
    let rows: String = shows
        .iter()
        .map(|show| {
            format!(
                r#"  <li>{img}<a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a> <time>{start}</time></li>
"#,
                img = image(show.artist_image_link.as_deref(), &show.artist_name),
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                start = format_start_time(&show.start_time),
            )
        })
        .collect();
    let body = format!("<h1>Shows</h1>\n<ul class=\"shows\">\n{rows}</ul>");
    layout("Shows", None, &body)
}

pub fn form(form: &ShowForm, errors: &FieldErrors) -> Html<String> {
    let fields = [
        text_input("artist_id", "Artist ID", &form.artist_id, errors),
        text_input("venue_id", "Venue ID", &form.venue_id, errors),
        text_input("start_time", "Start time", &form.start_time, errors),
    ]
    .concat();
    layout(
        "New Show",
        None,
        &form_page("List a new show", "/shows/create", "Create Show", &fields),
    )
}
