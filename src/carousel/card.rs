use crate::config::DEFAULT_CURRENCY;
use crate::models::Product;
use crate::utils::{format_amount, format_plain_number};

pub const NO_IMAGE_TEXT: &str = "No image";
pub const UNTITLED_PRODUCT: &str = "Untitled product";

/// What the price block shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceDisplay {
    /// Sale price with the list price struck through beside it.
    Discounted { sale: f64, list: f64 },
    Single(f64),
    Hidden,
}

impl PriceDisplay {
    /// Zero or negative amounts count as missing.
    pub fn resolve(sale_price: Option<f64>, list_price: Option<f64>) -> Self {
        let positive = |v: Option<f64>| v.filter(|p| *p > 0.0);
        let list = positive(list_price);
        let sale = positive(sale_price).or(list);
        match (sale, list) {
            (Some(sale), Some(list)) if sale != list => PriceDisplay::Discounted { sale, list },
            (Some(sale), _) => PriceDisplay::Single(sale),
            (None, _) => PriceDisplay::Hidden,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingBadge {
    pub rating: f64,
    pub count: f64,
}

impl RatingBadge {
    pub fn resolve(rating: Option<f64>, count: Option<f64>) -> Option<Self> {
        match (rating, count) {
            (Some(rating), Some(count)) if rating > 0.0 && count > 0.0 => Some(RatingBadge { rating, count }),
            _ => None,
        }
    }

    pub fn stars_text(&self) -> String {
        format!("★ {}", format_plain_number(self.rating))
    }

    pub fn count_text(&self) -> String {
        format!("({})", format_plain_number(self.count))
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.stars_text(), self.count_text())
    }
}

/// Everything one slide needs, already resolved from the raw product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: Option<String>,
    pub title: String,
    pub alt: String,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    pub currency: String,
    pub price: PriceDisplay,
    pub rating: Option<RatingBadge>,
}

fn non_blank(v: Option<&String>) -> Option<String> {
    v.map(|s| s.trim()).filter(|s| !s.is_empty()).map(str::to_string)
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let features = product.features();
        let title = non_blank(product.title.as_ref());
        let image_url = non_blank(features.and_then(|f| f.image_url_src.as_ref()))
            .or_else(|| non_blank(product.image_url.as_ref()));
        let currency = non_blank(features.and_then(|f| f.price_currency.as_ref()))
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        ProductCard {
            id: non_blank(product.id.as_ref()),
            alt: title.clone().unwrap_or_else(|| "Product".to_string()),
            title: title.unwrap_or_else(|| UNTITLED_PRODUCT.to_string()),
            image_url,
            brand: non_blank(features.and_then(|f| f.brand.as_ref())),
            currency,
            price: PriceDisplay::resolve(
                features.and_then(|f| f.sale_price),
                features.and_then(|f| f.price),
            ),
            rating: features.and_then(|f| RatingBadge::resolve(f.rating, f.rating_count)),
        }
    }

    /// Prominent price, e.g. `$80 MXN`.
    pub fn current_price_text(&self) -> Option<String> {
        match self.price {
            PriceDisplay::Discounted { sale, .. } | PriceDisplay::Single(sale) => {
                Some(format!("${} {}", format_amount(sale), self.currency))
            }
            PriceDisplay::Hidden => None,
        }
    }

    /// Struck-through list price, only when discounted.
    pub fn original_price_text(&self) -> Option<String> {
        match self.price {
            PriceDisplay::Discounted { list, .. } => Some(format!("${}", format_amount(list))),
            _ => None,
        }
    }
}
