use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};

use crate::carousel::carousel_script;
use crate::models::AppState;

// Embed the default assets in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../../static/styles.css");
const SEARCH_SCRIPT: &str = include_str!("../../static/search.js");

const JAVASCRIPT: &str = "text/javascript; charset=utf-8";

/// The `--stylesheet` override if one was loaded, otherwise the embedded default.
pub async fn styles_css(State(state): State<AppState>) -> impl IntoResponse {
    let css = state.custom_css.clone().unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], css)
}

pub async fn carousel_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, JAVASCRIPT)], carousel_script())
}

pub async fn search_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, JAVASCRIPT)], SEARCH_SCRIPT)
}
