//! Product carousel: responsive breakpoints, per-slide view data and the
//! browser script that drives navigation.

pub mod breakpoints;
pub mod card;
pub mod script;

pub use breakpoints::{page_count, slides_per_group, slides_per_view, Breakpoint, BREAKPOINTS, SPACE_BETWEEN_PX};
pub use card::{PriceDisplay, ProductCard, RatingBadge, NO_IMAGE_TEXT, UNTITLED_PRODUCT};
pub use script::carousel_script;
