use axum::response::Html;

use super::{layout, Flash};

pub fn home(flash: Option<&Flash>) -> Html<String> {
    layout(
        "Home",
        flash,
        r#"<h1>Fyyur</h1>
<p>Find venues and artists, and book shows between them.</p>
<form method="post" action="/venues/search">
  <input type="search" name="search_term" placeholder="Find a venue" aria-label="Search venues">
</form>
<form method="post" action="/artists/search">
  <input type="search" name="search_term" placeholder="Find an artist" aria-label="Search artists">
</form>"#,
    )
}
