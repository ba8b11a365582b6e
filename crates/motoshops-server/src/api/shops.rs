use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::IntoResponse,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use motoshops_core::{filter_shops, map_pins, map_view, MapView, ShopFilter, ShopRecord};
use serde::Serialize;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub(super) struct ShopListData {
    shops: Vec<ShopRecord>,
    /// Shops matching the filter.
    count: usize,
    /// Shops in the whole collection.
    total: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct ShopMapData {
    view: MapView,
    pins: Vec<ShopRecord>,
}

#[derive(Debug, Serialize)]
pub(super) struct RefreshData {
    shops: usize,
    loaded_at: DateTime<Utc>,
    source: String,
}

pub(super) async fn list_shops(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(filter): Query<ShopFilter>,
) -> impl IntoResponse {
    let collection = state.snapshot().await;
    let shops: Vec<ShopRecord> = filter_shops(&collection.shops, &filter)
        .into_iter()
        .cloned()
        .collect();

    Json(ApiResponse {
        data: ShopListData {
            count: shops.len(),
            total: collection.len(),
            shops,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_shop(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) =
        id.map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.body_text()))?;

    let collection = state.snapshot().await;
    let shop = collection
        .get(id)
        .cloned()
        .ok_or_else(|| {
            ApiError::new(req_id.0.clone(), "not_found", format!("shop {id} not found"))
        })?;

    Ok(Json(ApiResponse {
        data: shop,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn shop_map(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(filter): Query<ShopFilter>,
) -> impl IntoResponse {
    let collection = state.snapshot().await;
    let visible = filter_shops(&collection.shops, &filter);

    Json(ApiResponse {
        data: ShopMapData {
            view: map_view(&visible),
            pins: map_pins(&visible).into_iter().cloned().collect(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn refresh_shops(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let collection = state.refresh().await;
    tracing::info!(
        request_id = %req_id.0,
        shops = collection.len(),
        source = %collection.source,
        "shop collection refreshed"
    );

    Json(ApiResponse {
        data: RefreshData {
            shops: collection.len(),
            loaded_at: collection.loaded_at,
            source: collection.source.clone(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
