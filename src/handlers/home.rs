use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::api::fetch_all_models;
use crate::models::{
    display_name, AppState, FetchOutcome, ModelFetchResult, PageQuery, SearchControls, SearchValidationError,
};
use crate::templates::{
    HomePageTemplate, ModelSectionView, ProductCarouselTemplate, ProductsPanelView, SearchControlsTemplate,
};
use crate::utils::hostname_from_url;

use super::helpers::{internal_error, render_template};

pub async fn home_get(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    if SearchControls::is_form_submission(&pairs) {
        return search_form_submitted(&state, &pairs).await;
    }
    let query = PageQuery::from_pairs(&pairs);
    let controls = SearchControls::from_query(&query);
    match build_home_page(&state, &query, &controls, None).await {
        Ok(page) => render_template(page),
        Err(e) => internal_error(e),
    }
}

/// The search form posted by a browser without scripts: redirect to the
/// canonical URL, or re-render the controls with the validation message.
async fn search_form_submitted(state: &AppState, pairs: &[(String, String)]) -> Response {
    let mut controls = SearchControls::from_form(pairs);
    match controls.submit() {
        Ok(target) => Redirect::to(&target).into_response(),
        Err(e) => {
            tracing::info!(%e, "Search form rejected");
            if e == SearchValidationError::NoModelSelected {
                controls.toggle_dropdown();
            }
            match build_home_page(state, &PageQuery::default(), &controls, Some(e.to_string())).await {
                Ok(page) => (StatusCode::UNPROCESSABLE_ENTITY, render_template(page)).into_response(),
                Err(e) => internal_error(e),
            }
        }
    }
}

/// Fetch (only when an item id was given) and assemble the page.
pub async fn build_home_page(
    state: &AppState,
    query: &PageQuery,
    controls: &SearchControls,
    form_error: Option<String>,
) -> Result<HomePageTemplate, askama::Error> {
    let search_controls_html = SearchControlsTemplate::new(controls, form_error).render()?;
    let models = query.models();
    let mut page_error = None;
    let mut sections = Vec::new();

    if let Some(item_id) = query.requested_item_id() {
        tracing::info!(item_id, ?models, "Fetching recommendations");
        match fetch_all_models(&state.api, item_id, &models).await {
            Ok(results) => {
                for result in &results {
                    sections.push(section_view(result)?);
                }
            }
            Err(e) => {
                tracing::error!(%e, "Recommendation batch failed");
                page_error = Some(e.to_string());
            }
        }
    }

    Ok(HomePageTemplate {
        api_hostname: hostname_from_url(&state.api.base_url),
        search_controls_html,
        page_error,
        item_id: query.effective_item_id(),
        models_label: models.join(", "),
        sections,
    })
}

/// Error panel, carousel, or the empty panel for one model.
/// Any non-empty list gets the carousel and raw viewer, even when some
/// entries could not be read as products.
pub fn section_view(result: &ModelFetchResult) -> Result<ModelSectionView, askama::Error> {
    let (error, products) = match &result.outcome {
        FetchOutcome::Failure(message) => (Some(message.clone()), None),
        FetchOutcome::Success(payload) if payload.is_list() && payload.entry_count() > 0 => {
            if payload.rejected > 0 {
                tracing::warn!(model = %result.model, rejected = payload.rejected, "Some recommendations were not shown");
            }
            let carousel_html = ProductCarouselTemplate::new(&payload.products).render()?;
            let panel = ProductsPanelView {
                count: payload.products.len(),
                carousel_html,
                raw_json: payload.raw_pretty(),
            };
            (None, Some(panel))
        }
        FetchOutcome::Success(_) => (None, None),
    };
    Ok(ModelSectionView {
        model: result.model.clone(),
        display_name: display_name(&result.model),
        error,
        products,
    })
}
