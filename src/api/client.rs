use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use yansi::Paint;

use crate::config::{MINIMUM_ITEMS, NUMBER_OF_PLACEMENTS};
use crate::models::RecommendationPayload;
use crate::utils::build_query_string;

use super::error::FetchError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(format!("jewelview/{}", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Handle on the recommendation API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct RecommendationApi {
    pub client: reqwest::Client,
    pub base_url: String,
    pub catalog_id: String,
}

impl RecommendationApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, catalog_id: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        RecommendationApi {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            catalog_id: catalog_id.into(),
        }
    }

    /// API configured from the environment (see [`crate::config`]).
    pub fn from_env(client: reqwest::Client) -> Self {
        Self::new(client, crate::config::get_api_base_url(), crate::config::get_catalog_id())
    }

    pub fn endpoint(&self) -> String {
        format!("{}/c/p/{}/l", self.base_url, self.catalog_id)
    }

    /// Query sent for one model: the model, the seed item and the fixed limits.
    pub fn request_params(model: &str, item_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("model", model.to_string()),
            ("item_id", item_id.to_string()),
            ("minimum_items", MINIMUM_ITEMS.to_string()),
            ("number_of_placements", NUMBER_OF_PLACEMENTS.to_string()),
        ]
    }

    /// Fetch recommendations for one model.
    pub async fn fetch_model(&self, model: &str, item_id: &str) -> Result<RecommendationPayload, FetchError> {
        let url = self.endpoint();
        let params = Self::request_params(model, item_id);

        // --- Curl Logging ---
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let url_for_log = format!("{}?{}", url, build_query_string(&pairs));
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)));
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        let started = Instant::now();
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        tracing::info!(
            model,
            item_id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Recommendation response"
        );
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        let raw: Value = serde_json::from_str(&body)?;

        let summary = match raw.as_array() {
            Some(items) => format!("{} placements", items.len()),
            None => "non-list body".to_string(),
        };
        log_output(format!(
            "Response ({}):\n{}",
            model,
            Paint::new(summary).rgb(100, 100, 100)
        ));

        Ok(RecommendationPayload::from_value(raw))
    }
}
