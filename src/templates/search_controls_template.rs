use askama::Template;

use crate::config::DEFAULT_ITEM_ID;
use crate::models::{ModelOptionView, SearchControls, SearchValidationError, FORM_MARKER};

#[derive(Template)]
#[template(path = "search_controls.html")]
pub struct SearchControlsTemplate {
    pub item_id: String,
    pub example_item_id: &'static str,
    pub selected_label: String,
    pub selected_count: usize,
    pub dropdown_open: bool,
    pub options: Vec<ModelOptionView>,
    pub missing_item_message: String,
    pub missing_model_message: String,
    pub form_marker: &'static str,
    pub form_error: Option<String>,
}

impl SearchControlsTemplate {
    pub fn new(controls: &SearchControls, form_error: Option<String>) -> Self {
        SearchControlsTemplate {
            item_id: controls.item_id.clone(),
            example_item_id: DEFAULT_ITEM_ID,
            selected_label: controls.selected_label(),
            selected_count: controls.selected_models.len(),
            dropdown_open: controls.dropdown_open,
            options: controls.options(),
            missing_item_message: SearchValidationError::MissingItemId.to_string(),
            missing_model_message: SearchValidationError::NoModelSelected.to_string(),
            form_marker: FORM_MARKER,
            form_error,
        }
    }
}
