// GET /config: effective service configuration.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::AppState;

pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    let filter = &state.filter;

    Json(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "max_text_length": state.config.max_text_length,
        "languages": filter.languages(),
        "boundary_terms": filter.boundary().term_count(),
        "token_terms": filter.token().term_count(),
        "whole_word": filter.boundary().whole_word(),
    }))
}
