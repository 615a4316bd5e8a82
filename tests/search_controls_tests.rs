use jewelview::models::{PageQuery, SearchControls, SearchValidationError};

fn query(item_id: Option<&str>, model: Option<&str>) -> PageQuery {
    PageQuery {
        item_id: item_id.map(str::to_string),
        model: model.map(str::to_string),
    }
}

#[test]
fn test_defaults() {
    let controls = SearchControls::default();
    assert_eq!(controls.item_id, "");
    assert_eq!(controls.selected_models, vec!["B_prod"]);
    assert!(!controls.dropdown_open);
}

#[test]
fn test_reconcile_overwrites_from_query() {
    let mut controls = SearchControls::default();
    controls.reconcile(&query(Some("123_blue"), Some("L_prod, T_prod")));
    assert_eq!(controls.item_id, "123_blue");
    assert_eq!(controls.selected_models, vec!["L_prod", "T_prod"]);
}

#[test]
fn test_reconcile_keeps_fields_the_query_omits() {
    let mut controls = SearchControls::default();
    controls.item_id = "typed".to_string();
    controls.toggle_model("F_prod");
    controls.reconcile(&query(None, None));
    assert_eq!(controls.item_id, "typed");
    assert_eq!(controls.selected_models, vec!["B_prod", "F_prod"]);

    controls.reconcile(&query(Some(""), Some("")));
    assert_eq!(controls.item_id, "typed");
    assert_eq!(controls.selected_models, vec!["B_prod", "F_prod"]);
}

#[test]
fn test_reconcile_runs_again_on_every_change() {
    let mut controls = SearchControls::from_query(&query(Some("first"), Some("F_prod")));
    controls.reconcile(&query(Some("second"), Some("T_prod")));
    assert_eq!(controls.item_id, "second");
    assert_eq!(controls.selected_models, vec!["T_prod"]);
}

#[test]
fn test_toggle_twice_restores_selection() {
    let mut controls = SearchControls::default();
    let before = controls.selected_models.clone();
    controls.toggle_model("F_prod");
    assert!(controls.is_selected("F_prod"));
    controls.toggle_model("F_prod");
    assert_eq!(controls.selected_models, before);
}

#[test]
fn test_toggle_removes_selected_model() {
    let mut controls = SearchControls::default();
    controls.toggle_model("B_prod");
    assert!(controls.selected_models.is_empty());
    assert_eq!(controls.selected_label(), "Select models");
}

#[test]
fn test_submit_blank_item_id_is_blocked() {
    let mut controls = SearchControls::default();
    controls.item_id = "   ".to_string();
    let err = controls.submit().unwrap_err();
    assert_eq!(err, SearchValidationError::MissingItemId);
    assert_eq!(err.to_string(), "Please enter an item ID");
}

#[test]
fn test_submit_without_models_is_blocked() {
    let mut controls = SearchControls::default();
    controls.item_id = "X".to_string();
    controls.toggle_model("B_prod");
    let err = controls.submit().unwrap_err();
    assert_eq!(err, SearchValidationError::NoModelSelected);
    assert_eq!(err.to_string(), "Please select at least one model");
}

#[test]
fn test_submit_builds_navigation_target() {
    let mut controls = SearchControls::default();
    controls.item_id = " 1177646331_multicolor ".to_string();
    controls.toggle_model("F_prod");
    assert_eq!(
        controls.submit().unwrap(),
        "/?item_id=1177646331_multicolor&model=B_prod%2CF_prod"
    );
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_form_submission_is_recognized_by_marker() {
    assert!(SearchControls::is_form_submission(&pairs(&[("item_id", "X"), ("search", "1")])));
    assert!(!SearchControls::is_form_submission(&pairs(&[("item_id", "X"), ("model", "B_prod")])));
}

#[test]
fn test_from_form_takes_checked_boxes_only() {
    let controls = SearchControls::from_form(&pairs(&[
        ("item_id", " 42_red "),
        ("model", "F_prod"),
        ("model", "T_prod"),
        ("model", "F_prod"),
        ("search", "1"),
    ]));
    assert_eq!(controls.item_id, " 42_red ");
    assert_eq!(controls.selected_models, vec!["F_prod", "T_prod"]);
    assert_eq!(controls.submit().unwrap(), "/?item_id=42_red&model=F_prod%2CT_prod");
}

#[test]
fn test_from_form_without_boxes_selects_nothing() {
    let controls = SearchControls::from_form(&pairs(&[("item_id", "42_red"), ("search", "1")]));
    assert!(controls.selected_models.is_empty());
    assert_eq!(controls.submit().unwrap_err(), SearchValidationError::NoModelSelected);
}

#[test]
fn test_toggle_dropdown_flips() {
    let mut controls = SearchControls::default();
    controls.toggle_dropdown();
    assert!(controls.dropdown_open);
    controls.toggle_dropdown();
    assert!(!controls.dropdown_open);
}

#[test]
fn test_selected_label() {
    let mut controls = SearchControls::default();
    assert_eq!(controls.selected_label(), "B_prod (Similar Items)");
    controls.toggle_model("T_prod");
    assert_eq!(controls.selected_label(), "2 models selected");

    let custom = SearchControls::from_query(&query(None, Some("X_beta")));
    assert_eq!(custom.selected_label(), "X_beta");
}

#[test]
fn test_options_list_known_models_then_unknown_selected() {
    let controls = SearchControls::from_query(&query(None, Some("F_prod,X_beta")));
    let options = controls.options();
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["L_prod", "B_prod", "F_prod", "T_prod", "X_beta"]);
    let selected: Vec<&str> = options.iter().filter(|o| o.selected).map(|o| o.value.as_str()).collect();
    assert_eq!(selected, vec!["F_prod", "X_beta"]);
    assert_eq!(options[0].label, "L_prod (You May Like)");
}
