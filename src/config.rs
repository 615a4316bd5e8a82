use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "https://repersonalize.jewelml.io";
pub const DEFAULT_CATALOG_ID: &str = "67fd95260740ccc4ec658d03";
pub const DEFAULT_ITEM_ID: &str = "1177646331_multicolor";
pub const DEFAULT_MODEL: &str = "B_prod";
pub const DEFAULT_CURRENCY: &str = "MXN";

// Fixed request parameters sent with every recommendation call
pub const MINIMUM_ITEMS: u32 = 2;
pub const NUMBER_OF_PLACEMENTS: u32 = 20;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("RECOMMENDATION_API_BASE_URL").unwrap_or_default())
}

pub fn get_catalog_id() -> String {
    let raw = env::var("RECOMMENDATION_CATALOG_ID").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CATALOG_ID.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
