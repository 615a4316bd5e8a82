use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => internal_error(e),
    }
}

pub fn internal_error(e: askama::Error) -> Response {
    tracing::error!(%e, "Template render error");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
