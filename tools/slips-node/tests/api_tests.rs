use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use slips_common::dataset::SalesData;
use slips_common::product::LineItem;
use slips_common::receipt::{PaymentMethod, Receipt};
use slips_node::api::router;

fn item(id: &str, name: &str, price: u64, quantity: u32) -> LineItem {
    LineItem::new(id, name, price, quantity, "Groceries").unwrap()
}

/// R1: 2 × Milk @ R10. R2: 1 × Milk @ R10, 3 × Bread @ R5.
fn app() -> Router {
    let at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
    let receipts = vec![
        Receipt::new(
            "r1",
            at,
            "Cape Town",
            "Emily",
            vec![item("p1", "Milk 1L", 1_000, 2)],
            PaymentMethod::Cash,
            "SH-48213",
        )
        .unwrap(),
        Receipt::new(
            "r2",
            at,
            "Durban",
            "David",
            vec![
                item("p1", "Milk 1L", 1_000, 1),
                item("p2", "Bread (white)", 500, 3),
            ],
            PaymentMethod::DebitCard,
            "SH-10452",
        )
        .unwrap(),
    ];
    router(SalesData::new(receipts, Vec::new()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_receipt_count() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["receipts"], 2);
}

#[tokio::test]
async fn lists_all_receipts_without_query() {
    let (status, body) = get(app(), "/api/receipts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["receiptNumber"], "SH-48213");
}

#[tokio::test]
async fn search_filters_by_item_name() {
    let (status, body) = get(app(), "/api/receipts?q=BREAD").await;
    assert_eq!(status, StatusCode::OK);
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], "r2");
}

#[tokio::test]
async fn receipt_by_id() {
    let (status, body) = get(app(), "/api/receipts/r2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2_500);
    assert_eq!(body["paymentMethod"], "Debit Card");
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_receipt_is_404() {
    let (status, body) = get(app(), "/api/receipts/r404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "receipt r404 not found");
}

#[tokio::test]
async fn total_sales() {
    let (status, body) = get(app(), "/api/sales/total").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4_500);
}

#[tokio::test]
async fn summary_cards() {
    let (_, body) = get(app(), "/api/sales/summary").await;
    assert_eq!(body["totalSales"], 4_500);
    assert_eq!(body["receiptCount"], 2);
    assert_eq!(body["averagePurchase"], 2_250);
}

#[tokio::test]
async fn top_products_default_and_limit() {
    let (status, body) = get(app(), "/api/sales/top").await;
    assert_eq!(status, StatusCode::OK);
    let top = body.as_array().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["name"], "Milk 1L");
    assert_eq!(top[0]["quantity"], 3);
    assert_eq!(top[0]["revenue"], 3_000);
    assert_eq!(top[1]["name"], "Bread (white)");
    assert_eq!(top[1]["revenue"], 1_500);

    let (_, body) = get(app(), "/api/sales/top?limit=1").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = get(app(), "/api/sales/top?limit=0").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn bad_limit_is_rejected() {
    let (status, _) = get(app(), "/api/sales/top?limit=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn daily_sales_empty_snapshot() {
    let (status, body) = get(app(), "/api/sales/daily").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}
