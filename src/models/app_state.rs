use crate::api::RecommendationApi;

#[derive(Clone)]
pub struct AppState {
    pub api: RecommendationApi,
    /// Replacement for the embedded stylesheet, loaded from `--stylesheet`.
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(api: RecommendationApi) -> Self {
        AppState { api, custom_css: None }
    }
}
