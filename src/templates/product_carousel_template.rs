use askama::Template;

use crate::carousel::{page_count, ProductCard, BREAKPOINTS, NO_IMAGE_TEXT};
use crate::models::Product;

#[derive(Template)]
#[template(path = "carousel.html")]
pub struct ProductCarouselTemplate {
    pub slides: Vec<ProductCard>,
    pub no_image_text: &'static str,
    /// `min_width:pages` per breakpoint, read by the carousel script.
    pub page_stops: String,
}

impl ProductCarouselTemplate {
    /// One slide per product, in input order.
    pub fn new(products: &[Product]) -> Self {
        ProductCarouselTemplate {
            slides: products.iter().map(ProductCard::from_product).collect(),
            no_image_text: NO_IMAGE_TEXT,
            page_stops: page_stops(products.len()),
        }
    }
}

fn page_stops(total: usize) -> String {
    BREAKPOINTS
        .iter()
        .map(|bp| format!("{}:{}", bp.min_width, page_count(total, bp.min_width)))
        .collect::<Vec<_>>()
        .join(",")
}
