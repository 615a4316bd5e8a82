use futures_util::future::join_all;

use crate::models::ModelFetchResult;

use super::client::RecommendationApi;
use super::error::RecommendationError;

/// Fetch one model and fold the outcome into a result record. Never fails:
/// every error becomes that model's message.
pub async fn fetch_model_result(api: &RecommendationApi, model: &str, item_id: &str) -> ModelFetchResult {
    match api.fetch_model(model, item_id).await {
        Ok(payload) => {
            if payload.rejected > 0 {
                tracing::warn!(model, rejected = payload.rejected, "Dropped malformed recommendation entries");
            }
            ModelFetchResult::success(model, payload)
        }
        Err(e) => {
            tracing::warn!(model, item_id, error = %e, "Recommendation request failed");
            ModelFetchResult::failure(model, e.to_string())
        }
    }
}

/// Request every model concurrently and wait for all of them.
///
/// Results come back in the order of `models`. One model failing has no
/// effect on the others; only a task that dies outright fails the batch.
pub async fn fetch_all_models(
    api: &RecommendationApi,
    item_id: &str,
    models: &[String],
) -> Result<Vec<ModelFetchResult>, RecommendationError> {
    let handles = models.iter().map(|model| {
        let api = api.clone();
        let model = model.clone();
        let item_id = item_id.to_string();
        tokio::spawn(async move { fetch_model_result(&api, &model, &item_id).await })
    });

    join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.map_err(RecommendationError::from))
        .collect()
}
