use axum::response::Html;

use super::layout;

pub fn not_found() -> Html<String> {
    layout(
        "Not Found",
        None,
        "<h1>404</h1>\n<p>Sorry, the page you requested could not be found.</p>",
    )
}

pub fn server_error() -> Html<String> {
    layout(
        "Server Error",
        None,
        "<h1>500</h1>\n<p>Something went wrong on our end. Please try again later.</p>",
    )
}
