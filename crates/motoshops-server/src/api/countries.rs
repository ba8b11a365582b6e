use axum::{extract::State, response::IntoResponse, Extension, Json};
use motoshops_core::country_summary;

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Every EU country with its shop count, including countries with none.
pub(super) async fn list_countries(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let collection = state.snapshot().await;
    Json(ApiResponse {
        data: country_summary(&collection.shops),
        meta: ResponseMeta::new(req_id.0),
    })
}
