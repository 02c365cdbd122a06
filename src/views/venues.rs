use axum::response::Html;

use super::form::{checkbox, form_page, genre_select, state_select, text_input, textarea};
use super::{
    escape, genre_tags, image, item_list, layout, optional_link, search_page, seeking_block,
    show_list,
};
use crate::aggregate::{LocalityGroup, SearchResults, VenueDetail};
use crate::forms::{FieldErrors, VenueForm};

pub fn list(areas: &[LocalityGroup]) -> Html<String> {
    let sections: String = areas
        .iter()
        .map(|area| {
            format!(
                "<section>\n<h2>{city}, {state}</h2>\n{items}\n</section>\n",
                city = escape(&area.city),
                state = escape(&area.state),
                items = item_list("/venues", &area.venues),
            )
        })
        .collect();
    let body = format!(
        r#"<h1>Venues</h1>
<form method="post" action="/venues/search">
  <input type="search" name="search_term" placeholder="Find a venue" aria-label="Search venues">
</form>
{sections}"#
    );
    layout("Venues", None, &body)
}

pub fn search(results: &SearchResults, term: &str) -> Html<String> {
    search_page("Venues", "/venues", results, term)
}

pub fn detail(detail: &VenueDetail) -> Html<String> {
    let venue = &detail.venue;
    let body = format!(
        r#"<article class="venue" data-venue-id="{id}">
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<p class="genres">{genres}</p>
<p class="address">{address}<br>{city}, {state}</p>
<p class="phone">{phone}</p>
<p class="website">{website}</p>
<p class="facebook">{facebook}</p>
{seeking}
{image}
<p><a href="/venues/{id}/edit">Edit venue</a></p>
<button type="button" id="delete-venue">Delete venue</button>
</article>
{upcoming}
{past}
<script>
document.getElementById("delete-venue").addEventListener("click", function () {{
  fetch("/venues/{id}", {{ method: "DELETE" }})
    .then(function (r) {{ return r.json(); }})
    .then(function (body) {{ if (body.message === "Succeed") {{ window.location = "/"; }} }});
}});
</script>"#,
        id = venue.id,
        name = escape(&venue.name),
        genres = genre_tags(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(&venue.phone),
        website = optional_link(venue.website.as_deref()),
        facebook = optional_link(Some(venue.facebook_link.as_str())),
        seeking = seeking_block(
            venue.seeking_talent,
            "talent",
            venue.seeking_description.as_deref()
        ),
        image = image(venue.image_link.as_deref(), &venue.name),
        upcoming = show_list("Upcoming Shows", "/artists", &detail.upcoming_shows),
        past = show_list("Past Shows", "/artists", &detail.past_shows),
    );
    layout(&venue.name, None, &body)
}

/// Where a venue form posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueFormTarget {
    Create,
    Edit(i64),
}

pub fn form(form: &VenueForm, errors: &FieldErrors, target: VenueFormTarget) -> Html<String> {
    let fields = [
        text_input("name", "Name", &form.name, errors),
        text_input("city", "City", &form.city, errors),
        state_select(&form.state, errors),
        text_input("address", "Address", &form.address, errors),
        text_input("phone", "Phone", &form.phone, errors),
        genre_select(&form.genres, errors),
        text_input("image_link", "Image link", &form.image_link, errors),
        text_input("facebook_link", "Facebook link", &form.facebook_link, errors),
        text_input("website", "Website", &form.website, errors),
        checkbox("seeking_talent", "Seeking talent", form.seeking_talent, errors),
        textarea(
            "seeking_description",
            "Seeking description",
            &form.seeking_description,
            errors,
        ),
    ]
    .concat();

    let (title, heading, action, submit) = match target {
        VenueFormTarget::Create => (
            "New Venue".to_string(),
            "List a new venue".to_string(),
            "/venues/create".to_string(),
            "Create Venue",
        ),
        VenueFormTarget::Edit(id) => (
            "Edit Venue".to_string(),
            format!("Edit venue {}", form.name),
            format!("/venues/{id}/edit"),
            "Save Venue",
        ),
    };
    layout(&title, None, &form_page(&heading, &action, submit, &fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ListedItem;

    #[test]
    fn test_list_groups_by_area() {
        let areas = vec![LocalityGroup {
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            venues: vec![ListedItem {
                id: 1,
                name: "The Musical Hop".to_string(),
                num_upcoming_shows: 2,
            }],
        }];
        let Html(page) = list(&areas);
        assert!(page.contains("<h2>San Francisco, CA</h2>"));
        assert!(page.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
        assert!(page.contains("2 upcoming"));
    }

    #[test]
    fn test_edit_form_posts_to_edit_route() {
        let form_data = VenueForm {
            name: "Hop".to_string(),
            ..VenueForm::default()
        };
        let Html(page) = form(&form_data, &FieldErrors::default(), VenueFormTarget::Edit(3));
        assert!(page.contains(r#"action="/venues/3/edit""#));
        assert!(page.contains("Edit venue Hop"));
    }
}
