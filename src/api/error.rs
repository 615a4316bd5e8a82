/// Error types for the recommendation API
use thiserror::Error;

/// Why one model's request produced no data. The message ends up in that
/// model's error panel.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never got a complete response
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not JSON
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure of the batch as a whole, as opposed to a single model.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Failed to fetch data: {0}")]
    Task(#[from] tokio::task::JoinError),
}
