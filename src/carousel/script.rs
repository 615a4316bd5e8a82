use once_cell::sync::Lazy;

use super::breakpoints::{BREAKPOINTS, SPACE_BETWEEN_PX};

const CAROUSEL_SCRIPT_SOURCE: &str = include_str!("../../static/carousel.js");

// Built on first request so pages that never show a carousel never pay for it.
static CAROUSEL_SCRIPT: Lazy<String> = Lazy::new(|| {
    let breakpoints = serde_json::to_string(BREAKPOINTS).unwrap_or_else(|_| "[]".to_string());
    tracing::debug!(%breakpoints, "Building carousel script");
    CAROUSEL_SCRIPT_SOURCE
        .replace("__BREAKPOINTS__", &breakpoints)
        .replace("__SPACE_BETWEEN__", &SPACE_BETWEEN_PX.to_string())
});

/// Browser script that lays out and navigates every carousel on the page.
pub fn carousel_script() -> &'static str {
    CAROUSEL_SCRIPT.as_str()
}
