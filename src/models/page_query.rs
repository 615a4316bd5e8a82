use crate::config::{DEFAULT_ITEM_ID, DEFAULT_MODEL};
use crate::utils::split_csv;

/// Query parameters recognized by the home page. Everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub item_id: Option<String>,
    pub model: Option<String>,
}

impl PageQuery {
    /// Build from decoded query pairs. Repeated `model` keys (checkbox form
    /// submissions) are joined with commas; the first `item_id` wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut item_id: Option<String> = None;
        let mut models: Vec<&str> = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                "item_id" if item_id.is_none() => item_id = Some(value.clone()),
                "model" => models.push(value.as_str()),
                _ => {}
            }
        }
        let model = if models.is_empty() { None } else { Some(models.join(",")) };
        PageQuery { item_id, model }
    }

    /// The item id the visitor asked for, if any. Blank counts as absent.
    pub fn requested_item_id(&self) -> Option<&str> {
        self.item_id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn effective_item_id(&self) -> String {
        self.requested_item_id().unwrap_or(DEFAULT_ITEM_ID).to_string()
    }

    /// Models named by the `model` parameter, if it names any.
    pub fn requested_models(&self) -> Option<Vec<String>> {
        let models = split_csv(self.model.as_deref()?);
        if models.is_empty() {
            None
        } else {
            Some(models)
        }
    }

    pub fn models(&self) -> Vec<String> {
        self.requested_models()
            .unwrap_or_else(|| vec![DEFAULT_MODEL.to_string()])
    }
}
