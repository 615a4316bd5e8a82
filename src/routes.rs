use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::models::AppState;
use crate::handlers;

pub fn build_router(state: AppState) -> Router {
    // Embedded assets, cached by the browser for an hour
    let static_routes = Router::new()
        .route("/styles.css", get(handlers::assets::styles_css))
        .route("/carousel.js", get(handlers::assets::carousel_js))
        .route("/search.js", get(handlers::assets::search_js))
        .layer(
            ServiceBuilder::new().layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            )),
        );

    Router::new()
        .route("/", get(handlers::home::home_get))
        .nest("/static", static_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
