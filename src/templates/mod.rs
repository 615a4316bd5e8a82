// Page templates
pub mod home_template;

// Component templates, rendered to strings and embedded in pages
pub mod product_carousel_template;
pub mod search_controls_template;

pub use home_template::{HomePageTemplate, ModelSectionView, ProductsPanelView};
pub use product_carousel_template::ProductCarouselTemplate;
pub use search_controls_template::SearchControlsTemplate;
