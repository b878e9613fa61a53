use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use fleetdash::api::rest::router;
use fleetdash::clock::FixedClock;
use fleetdash::dashboard::sample::sample_data;
use fleetdash::dashboard::{DashboardData, DisplaySettings};
use fleetdash::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

fn setup_with(data: DashboardData, settings: DisplaySettings) -> (axum::Router, Arc<AppState>) {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    let state = Arc::new(AppState::new(data, settings, Arc::new(clock)));
    (router(state.clone()), state)
}

fn setup() -> axum::Router {
    setup_with(sample_data(), DisplaySettings::default()).0
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = setup().oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["time"], "Jun 01, 2025 12:00 PM");
}

#[tokio::test]
async fn dashboard_returns_formatted_snapshot() {
    let response = setup().oneshot(get_request("/api/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["summary"]["total_revenue"], "$975,000.00");
    assert_eq!(body["summary"]["outstanding_receivables"], "$10,921.50");
    assert_eq!(body["summary"]["active_trips"], 3);
    assert_eq!(body["trips"].as_array().unwrap().len(), 3);
    assert_eq!(body["trips"][0]["status_label"], "In Transit");
    assert_eq!(body["receivables"][0]["amount"], "$3,250.75");
    assert_eq!(body["loads_by_type"][0]["share"], "65.0%");
    assert_eq!(body["equipment_by_status"]["active"], 2);
    assert_eq!(body["state_loads"][0]["state"], "TX");
}

#[tokio::test]
async fn dashboard_search_filters_panels() {
    let response = setup()
        .oneshot(get_request("/api/dashboard?q=phoenix"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["trips"].as_array().unwrap().len(), 1);
    assert_eq!(body["trips"][0]["id"], "TRIP-78903");
    assert_eq!(body["drivers"].as_array().unwrap().len(), 1);
    assert_eq!(body["drivers"][0]["name"], "Robert Johnson");
    assert!(body["receivables"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn overlong_search_returns_400() {
    let term = "x".repeat(65);
    let response = setup()
        .oneshot(get_request(&format!("/api/dashboard?q={term}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("64"));
}

#[tokio::test]
async fn empty_data_degrades_to_sentinels() {
    let (app, _state) = setup_with(DashboardData::default(), DisplaySettings::default());
    let response = app.oneshot(get_request("/api/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["summary"]["on_time_rate"], "N/A");
    assert_eq!(body["summary"]["total_revenue"], "$0.00");
    assert!(body["trips"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn display_settings_change_currency() {
    let settings = DisplaySettings {
        currency: "GBP".to_string(),
        locale: "en-GB".to_string(),
        ..DisplaySettings::default()
    };
    let (app, _state) = setup_with(sample_data(), settings);
    let response = app.oneshot(get_request("/api/dashboard")).await.unwrap();

    let body = body_json(response).await;
    assert_eq!(body["receivables"][1]["amount"], "£4,780.50");
}

#[tokio::test]
async fn metrics_count_dashboard_requests() {
    let (app, _state) = setup_with(sample_data(), DisplaySettings::default());

    let response = app
        .clone()
        .oneshot(get_request("/api/dashboard"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.contains("text/plain"));

    let body = body_string(response).await;
    assert!(body.contains("dashboard_requests_total{outcome=\"ok\"} 1"));
    assert!(body.contains("dashboard_build_seconds"));
}
