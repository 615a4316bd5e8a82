use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use serde_json::Value;

use crate::models::product::Product;

/// A successful response body: the raw JSON, kept verbatim for the raw viewer,
/// and the products that could be read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationPayload {
    pub raw: Value,
    pub products: Vec<Product>,
    /// Array elements that were not product-shaped.
    pub rejected: usize,
}

impl RecommendationPayload {
    pub fn from_value(raw: Value) -> Self {
        let mut products = Vec::new();
        let mut rejected = 0;
        if let Some(items) = raw.as_array() {
            for item in items {
                match Product::deserialize(item) {
                    Ok(product) => products.push(product),
                    Err(e) => {
                        rejected += 1;
                        tracing::warn!(%e, "Skipping recommendation entry that is not a product");
                    }
                }
            }
        }
        RecommendationPayload { raw, products, rejected }
    }

    pub fn is_list(&self) -> bool {
        self.raw.is_array()
    }

    /// Elements in the raw array, counting any that were not product-shaped.
    pub fn entry_count(&self) -> usize {
        self.raw.as_array().map_or(0, Vec::len)
    }

    pub fn raw_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(RecommendationPayload),
    Failure(String),
}

/// Outcome of one model's request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFetchResult {
    pub model: String,
    pub outcome: FetchOutcome,
}

impl ModelFetchResult {
    pub fn success(model: impl Into<String>, payload: RecommendationPayload) -> Self {
        ModelFetchResult { model: model.into(), outcome: FetchOutcome::Success(payload) }
    }

    pub fn failure(model: impl Into<String>, message: impl Into<String>) -> Self {
        ModelFetchResult { model: model.into(), outcome: FetchOutcome::Failure(message.into()) }
    }

    pub fn data(&self) -> Option<&RecommendationPayload> {
        match &self.outcome {
            FetchOutcome::Success(payload) => Some(payload),
            FetchOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FetchOutcome::Success(_) => None,
            FetchOutcome::Failure(message) => Some(message),
        }
    }

    /// Products to show in a carousel; empty on failure or for non-list bodies.
    pub fn products(&self) -> &[Product] {
        self.data().map(|p| p.products.as_slice()).unwrap_or(&[])
    }
}

// Serialized as `{ model, data, error }` with exactly one of data/error non-null.
impl Serialize for ModelFetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ModelFetchResult", 3)?;
        s.serialize_field("model", &self.model)?;
        s.serialize_field("data", &self.data().map(|p| &p.raw))?;
        s.serialize_field("error", &self.error())?;
        s.end()
    }
}
