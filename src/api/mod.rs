// Recommendation API modules
pub mod client;
pub mod error;
pub mod recommendations;

// Re-export commonly used items
pub use client::{build_http_client, set_silent, RecommendationApi};
pub use error::{FetchError, RecommendationError};
pub use recommendations::{fetch_all_models, fetch_model_result};
