use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use slips_common::aggregate::{ProductAggregate, SalesSummary, DEFAULT_TOP_PRODUCTS};
use slips_common::daily_sales::DailySalesPoint;
use slips_common::dataset::SalesData;
use slips_common::receipt::{Receipt, ReceiptId};

/// Shared, read-only snapshot handed to every handler.
pub type AppState = Arc<SalesData>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("receipt {0} not found")]
    ReceiptNotFound(ReceiptId),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self {
            ServiceError::ReceiptNotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    receipts: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: u64,
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Deserialize)]
struct TopParams {
    limit: Option<usize>,
}

async fn health_handler(State(data): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        receipts: data.receipts().len(),
    })
}

async fn receipts_handler(
    State(data): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Receipt>> {
    let term = params.q.unwrap_or_default();
    let found: Vec<Receipt> = data.search(&term).into_iter().cloned().collect();
    tracing::debug!(term = %term, matches = found.len(), "receipt search");
    Json(found)
}

async fn receipt_handler(
    State(data): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Receipt>, ServiceError> {
    let id = ReceiptId(id);
    match data.receipt(&id) {
        Some(receipt) => Ok(Json(receipt.clone())),
        None => {
            tracing::debug!(%id, "receipt lookup missed");
            Err(ServiceError::ReceiptNotFound(id))
        }
    }
}

async fn total_handler(State(data): State<AppState>) -> Json<TotalResponse> {
    Json(TotalResponse {
        total: data.total_sales(),
    })
}

async fn summary_handler(State(data): State<AppState>) -> Json<SalesSummary> {
    Json(data.summary())
}

async fn top_handler(
    State(data): State<AppState>,
    Query(params): Query<TopParams>,
) -> Json<Vec<ProductAggregate>> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_PRODUCTS);
    Json(data.top_products(limit))
}

async fn daily_handler(State(data): State<AppState>) -> Json<Vec<DailySalesPoint>> {
    Json(data.daily_sales().to_vec())
}

/// All routes, wired to `data`.
pub fn router(data: SalesData) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/receipts", get(receipts_handler))
        .route("/api/receipts/{id}", get(receipt_handler))
        .route("/api/sales/total", get(total_handler))
        .route("/api/sales/summary", get(summary_handler))
        .route("/api/sales/top", get(top_handler))
        .route("/api/sales/daily", get(daily_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(data))
}
