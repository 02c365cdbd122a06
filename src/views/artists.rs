use axum::response::Html;

use super::form::{checkbox, form_page, genre_select, state_select, text_input, textarea};
use super::{
    escape, genre_tags, image, item_list, layout, optional_link, search_page, seeking_block,
    show_list,
};
use crate::aggregate::{ArtistDetail, ListedItem, SearchResults};
use crate::forms::{ArtistForm, FieldErrors};

pub fn list(artists: &[ListedItem]) -> Html<String> {
    let body = format!(
        r#"<h1>Artists</h1>
<form method="post" action="/artists/search">
  <input type="search" name="search_term" placeholder="Find an artist" aria-label="Search artists">
</form>
{items}"#,
        items = item_list("/artists", artists),
    );
    layout("Artists", None, &body)
}

pub fn search(results: &SearchResults, term: &str) -> Html<String> {
    search_page("Artists", "/artists", results, term)
}

pub fn detail(detail: &ArtistDetail) -> Html<String> {
    let artist = &detail.artist;
    let body = format!(
        r#"<article class="artist">
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<p class="genres">{genres}</p>
<p class="address">{city}, {state}</p>
<p class="phone">{phone}</p>
<p class="website">{website}</p>
<p class="facebook">{facebook}</p>
{seeking}
{image}
<p><a href="/artists/{id}/edit">Edit artist</a></p>
</article>
{upcoming}
{past}"#,
        id = artist.id,
        name = escape(&artist.name),
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = optional_link(artist.website.as_deref()),
        facebook = optional_link(Some(artist.facebook_link.as_str())),
        seeking = seeking_block(
            artist.seeking_venue,
            "performance venues",
            artist.seeking_description.as_deref()
        ),
        image = image(artist.image_link.as_deref(), &artist.name),
        upcoming = show_list("Upcoming Shows", "/venues", &detail.upcoming_shows),
        past = show_list("Past Shows", "/venues", &detail.past_shows),
    );
    layout(&artist.name, None, &body)
}

/// Where an artist form posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistFormTarget {
    Create,
    Edit(i64),
}

pub fn form(form: &ArtistForm, errors: &FieldErrors, target: ArtistFormTarget) -> Html<String> {
    let fields = [
        text_input("name", "Name", &form.name, errors),
        text_input("city", "City", &form.city, errors),
        state_select(&form.state, errors),
        text_input("phone", "Phone", &form.phone, errors),
        genre_select(&form.genres, errors),
        text_input("image_link", "Image link", &form.image_link, errors),
        text_input("facebook_link", "Facebook link", &form.facebook_link, errors),
        text_input("website", "Website", &form.website, errors),
        checkbox("seeking_venue", "Seeking venue", form.seeking_venue, errors),
        textarea(
            "seeking_description",
            "Seeking description",
            &form.seeking_description,
            errors,
        ),
    ]
    .concat();

    let page = match target {
        ArtistFormTarget::Create => {
            form_page("List a new artist", "/artists/create", "Create Artist", &fields)
        }
        ArtistFormTarget::Edit(id) => form_page(
            &format!("Edit artist {}", form.name),
            &format!("/artists/{id}/edit"),
            "Save Artist",
            &fields,
        ),
    };
    let title = match target {
        ArtistFormTarget::Create => "New Artist",
        ArtistFormTarget::Edit(_) => "Edit Artist",
    };
    layout(title, None, &page)
}
