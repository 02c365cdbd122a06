//! Server-side HTML pages.
//!
//! Rendering is deliberately thin: each page is a function from the shaped
//! records in [`crate::aggregate`] to `Html<String>`. Every interpolated
//! value goes through [`escape`].

use axum::response::Html;

use crate::aggregate::{ListedItem, SearchResults, ShowSummary};
use crate::models::Genre;

pub mod artists;
pub mod errors;
pub mod form;
pub mod pages;
pub mod shows;
pub mod venues;

/// One-shot notice shown at the top of the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn message(&self) -> &str {
        match self {
            Flash::Success(msg) | Flash::Error(msg) => msg,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Flash::Success(_) => "flash flash-success",
            Flash::Error(_) => "flash flash-error",
        }
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

const NAV: &str = r#"<nav>
  <a href="/">Fyyur</a>
  <a href="/venues">Venues</a>
  <a href="/artists">Artists</a>
  <a href="/shows">Shows</a>
  <a href="/venues/create">Post a venue</a>
  <a href="/artists/create">Post an artist</a>
  <a href="/shows/create">Post a show</a>
</nav>"#;

pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let flash = flash
        .map(|f| {
            format!(
                r#"<div class="{}" role="alert">{}</div>"#,
                f.class(),
                escape(f.message())
            )
        })
        .unwrap_or_default();

    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} | Fyyur</title>
</head>
<body>
{NAV}
{flash}
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

/// Renders an optional image as `<img>`, or nothing.
pub(crate) fn image(link: Option<&str>, alt: &str) -> String {
    link.map(|src| {
        format!(
            r#"<img src="{}" alt="{}">"#,
            escape(src),
            escape(alt)
        )
    })
    .unwrap_or_default()
}

/// Renders an optional link, or a muted placeholder when absent.
pub(crate) fn optional_link(href: Option<&str>) -> String {
    match href {
        Some(href) => format!(r#"<a href="{0}">{0}</a>"#, escape(href)),
        None => "<span class=\"muted\">No link</span>".to_string(),
    }
}

pub(crate) fn item_list(base: &str, items: &[ListedItem]) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                r#"  <li><a href="{base}/{id}">{name}</a> <small>{count} upcoming</small></li>
"#,
                id = item.id,
                name = escape(&item.name),
                count = item.num_upcoming_shows,
            )
        })
        .collect();
    format!("<ul class=\"items\">\n{rows}</ul>")
}

pub(crate) fn search_page(kind: &str, base: &str, results: &SearchResults, term: &str) -> Html<String> {
    let body = format!(
        r#"<h1>Number of search results for "{term}": {count}</h1>
{items}"#,
        term = escape(term),
        count = results.count,
        items = item_list(base, &results.data),
    );
    layout(&format!("Search {kind}"), None, &body)
}

pub(crate) fn show_list(title: &str, base: &str, shows: &[ShowSummary]) -> String {
    let cards: String = shows
        .iter()
        .map(|show| {
            format!(
                r#"  <li>{img}<a href="{base}/{id}">{name}</a> <time>{start}</time></li>
"#,
                img = image(show.image_link.as_deref(), &show.name),
                id = show.id,
                name = escape(&show.name),
                start = escape(&show.start_time),
            )
        })
        .collect();
    format!(
        "<section>\n<h2>{count} {title}</h2>\n<ul class=\"shows\">\n{cards}</ul>\n</section>",
        count = shows.len(),
        title = escape(title),
    )
}

pub(crate) fn genre_tags(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g.as_str())))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn seeking_block(seeking: bool, what: &str, description: Option<&str>) -> String {
    if seeking {
        format!(
            r#"<div class="seeking"><strong>Currently seeking {what}</strong><p>{}</p></div>"#,
            escape(description.unwrap_or_default())
        )
    } else {
        format!(r#"<p class="seeking muted">Not currently seeking {what}</p>"#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"R&B" & 'Soul'</b>"#),
            "&lt;b&gt;&quot;R&amp;B&quot; &amp; &#x27;Soul&#x27;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_layout_renders_flash() {
        let flash = Flash::Success("Venue <Hop> was successfully listed!".to_string());
        let Html(page) = layout("Home", Some(&flash), "<p>body</p>");
        assert!(page.contains("flash-success"));
        assert!(page.contains("Venue &lt;Hop&gt; was successfully listed!"));
        assert!(page.contains("<p>body</p>"));
    }
}
