use askama::Template;

/// A model's products, ready to show.
pub struct ProductsPanelView {
    pub count: usize,
    pub carousel_html: String,
    pub raw_json: String,
}

/// One section of the results, per requested model.
/// `error` and `products` are never both set; neither means "no products found".
pub struct ModelSectionView {
    pub model: String,
    pub display_name: String,
    pub error: Option<String>,
    pub products: Option<ProductsPanelView>,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePageTemplate {
    pub api_hostname: String,
    pub search_controls_html: String,
    pub page_error: Option<String>,
    pub item_id: String,
    pub models_label: String,
    pub sections: Vec<ModelSectionView>,
}
