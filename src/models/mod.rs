pub mod app_state;
pub mod model_id;
pub mod model_result;
pub mod page_query;
pub mod product;
pub mod search_controls;

pub use app_state::AppState;
pub use model_id::{display_name, option_label, ModelId};
pub use model_result::{FetchOutcome, ModelFetchResult, RecommendationPayload};
pub use page_query::PageQuery;
pub use product::{Product, StandardFeatures};
pub use search_controls::{ModelOptionView, SearchControls, SearchValidationError, FORM_MARKER};
