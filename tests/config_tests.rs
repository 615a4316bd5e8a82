use jewelview::config;
use std::env;
use std::sync::Mutex;

// Tests in this file share process environment variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://repersonalize.jewelml.io/"),
        "https://repersonalize.jewelml.io"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("http://127.0.0.1:9000///"),
        "http://127.0.0.1:9000"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://reco.example.com/  "),
        "https://reco.example.com"
    );
}

#[test]
fn test_sanitize_base_url_empty_falls_back_to_default() {
    assert_eq!(config::sanitize_base_url(""), config::DEFAULT_API_BASE_URL);
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_API_BASE_URL);
}

#[test]
fn test_get_api_base_url_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::set_var("RECOMMENDATION_API_BASE_URL", "http://localhost:4000/");

    assert_eq!(config::get_api_base_url(), "http://localhost:4000");

    env::remove_var("RECOMMENDATION_API_BASE_URL");
}

#[test]
fn test_get_api_base_url_uses_default() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("RECOMMENDATION_API_BASE_URL");

    assert_eq!(config::get_api_base_url(), "https://repersonalize.jewelml.io");
}

#[test]
fn test_get_catalog_id() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::set_var("RECOMMENDATION_CATALOG_ID", "  abc123 ");
    assert_eq!(config::get_catalog_id(), "abc123");

    env::set_var("RECOMMENDATION_CATALOG_ID", "");
    assert_eq!(config::get_catalog_id(), config::DEFAULT_CATALOG_ID);

    env::remove_var("RECOMMENDATION_CATALOG_ID");
    assert_eq!(config::get_catalog_id(), "67fd95260740ccc4ec658d03");
}

#[test]
fn test_fixed_request_limits() {
    assert_eq!(config::MINIMUM_ITEMS, 2);
    assert_eq!(config::NUMBER_OF_PLACEMENTS, 20);
}
