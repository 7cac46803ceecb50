//! The browser form, served from `GET /`.

use axum::response::Html;

/// Page markup, compiled into the binary.
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
