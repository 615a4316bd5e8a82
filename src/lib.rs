//! Recommendation carousel demo server.
//!
//! Serves a single page that asks the recommendation API for products related
//! to an item, one request per selected model, and renders each model's
//! products in a responsive carousel.

pub mod api;
pub mod carousel;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod templates;
pub mod utils;

pub use models::AppState;
pub use routes::build_router;
