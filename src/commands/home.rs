use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Landing page.
pub async fn cmd_home() -> Html<&'static str> {
    Html(INDEX_HTML)
}
