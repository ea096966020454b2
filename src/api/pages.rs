//! HTML pages

use axum::{extract::State, response::Html};

use super::state::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_page.html().to_string())
}
