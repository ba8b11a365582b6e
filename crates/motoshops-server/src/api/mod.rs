mod countries;
mod shops;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use motoshops_core::ShopCollection;
use motoshops_ingest::IngestionPipeline;
use serde::Serialize;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

/// Shared server state: the ingestion pipeline and the collection it last
/// produced.
///
/// Handlers take a cheap `Arc` snapshot of the collection and filter outside
/// the lock; a refresh swaps in a new collection without touching readers
/// that already hold the old one.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<IngestionPipeline>,
    collection: Arc<RwLock<Arc<ShopCollection>>>,
}

impl AppState {
    pub fn new(pipeline: Arc<IngestionPipeline>, collection: ShopCollection) -> Self {
        Self {
            pipeline,
            collection: Arc::new(RwLock::new(Arc::new(collection))),
        }
    }

    pub(crate) async fn snapshot(&self) -> Arc<ShopCollection> {
        Arc::clone(&*self.collection.read().await)
    }

    /// Re-run ingestion and replace the current collection with the result.
    pub(crate) async fn refresh(&self) -> Arc<ShopCollection> {
        let fresh = Arc::new(self.pipeline.load().await);
        *self.collection.write().await = Arc::clone(&fresh);
        fresh
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    shops: usize,
    loaded_at: DateTime<Utc>,
    source: String,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/shops", get(shops::list_shops))
        .route("/api/v1/shops/map", get(shops::shop_map))
        .route("/api/v1/shops/refresh", post(shops::refresh_shops))
        .route("/api/v1/shops/{id}", get(shops::get_shop))
        .route("/api/v1/countries", get(countries::list_countries))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let collection = state.snapshot().await;
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            shops: collection.len(),
            loaded_at: collection.loaded_at,
            source: collection.source.clone(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
