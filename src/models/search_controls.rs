use thiserror::Error;

use crate::config::DEFAULT_MODEL;
use crate::models::model_id::{option_label, ModelId};
use crate::models::page_query::PageQuery;
use crate::utils::build_query_string;

/// Reasons a search cannot be submitted. The message is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchValidationError {
    #[error("Please enter an item ID")]
    MissingItemId,
    #[error("Please select at least one model")]
    NoModelSelected,
}

/// Hidden field the search form carries so a script-less submission can be
/// told apart from a shared link.
pub const FORM_MARKER: &str = "search";

/// One row of the model dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Editable state behind the search form.
///
/// The URL is the source of truth: [`SearchControls::reconcile`] copies the
/// current query into the local state, and only [`SearchControls::submit`]
/// goes the other way by producing a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchControls {
    pub item_id: String,
    pub selected_models: Vec<String>,
    pub dropdown_open: bool,
}

impl Default for SearchControls {
    fn default() -> Self {
        SearchControls {
            item_id: String::new(),
            selected_models: vec![DEFAULT_MODEL.to_string()],
            dropdown_open: false,
        }
    }
}

impl SearchControls {
    pub fn from_query(query: &PageQuery) -> Self {
        let mut controls = SearchControls::default();
        controls.reconcile(query);
        controls
    }

    /// True when the query came straight from the search form, not from a link.
    pub fn is_form_submission(pairs: &[(String, String)]) -> bool {
        pairs.iter().any(|(key, _)| key == FORM_MARKER)
    }

    /// Controls exactly as the form sent them: the typed item id and one
    /// `model` key per checked box. Nothing is defaulted.
    pub fn from_form(pairs: &[(String, String)]) -> Self {
        let mut controls = SearchControls {
            item_id: String::new(),
            selected_models: Vec::new(),
            dropdown_open: false,
        };
        for (key, value) in pairs {
            match key.as_str() {
                "item_id" => controls.item_id = value.clone(),
                "model" if !value.trim().is_empty() && !controls.is_selected(value.trim()) => {
                    controls.toggle_model(value.trim())
                }
                _ => {}
            }
        }
        controls
    }

    /// Overwrite local state with whatever the query specifies; fields the
    /// query leaves out keep their current value.
    pub fn reconcile(&mut self, query: &PageQuery) {
        if let Some(item_id) = query.item_id.as_deref().filter(|s| !s.is_empty()) {
            self.item_id = item_id.to_string();
        }
        if let Some(models) = query.requested_models() {
            self.selected_models = models;
        }
    }

    pub fn toggle_model(&mut self, model: &str) {
        if let Some(pos) = self.selected_models.iter().position(|m| m == model) {
            self.selected_models.remove(pos);
        } else {
            self.selected_models.push(model.to_string());
        }
    }

    pub fn is_selected(&self, model: &str) -> bool {
        self.selected_models.iter().any(|m| m == model)
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Validate and build the URL to navigate to.
    pub fn submit(&self) -> Result<String, SearchValidationError> {
        let item_id = self.item_id.trim();
        if item_id.is_empty() {
            return Err(SearchValidationError::MissingItemId);
        }
        if self.selected_models.is_empty() {
            return Err(SearchValidationError::NoModelSelected);
        }
        let models = self.selected_models.join(",");
        Ok(format!("/?{}", build_query_string(&[("item_id", item_id), ("model", &models)])))
    }

    /// Text on the closed dropdown.
    pub fn selected_label(&self) -> String {
        match self.selected_models.as_slice() {
            [] => "Select models".to_string(),
            [only] => option_label(only),
            many => format!("{} models selected", many.len()),
        }
    }

    /// Known models in dropdown order, then any other selected ids from the URL.
    pub fn options(&self) -> Vec<ModelOptionView> {
        let mut out: Vec<ModelOptionView> = ModelId::ALL
            .iter()
            .map(|m| ModelOptionView {
                value: m.as_str().to_string(),
                label: m.option_label(),
                selected: self.is_selected(m.as_str()),
            })
            .collect();
        for model in &self.selected_models {
            if model.parse::<ModelId>().is_err() {
                out.push(ModelOptionView {
                    value: model.clone(),
                    label: model.clone(),
                    selected: true,
                });
            }
        }
        out
    }
}
