use alpha_clock::clock::TimeDataResponse;
use alpha_clock::services::clock::{ClockService, FixedClock, PreferenceUpdate};
use alpha_clock::services::preferences::{InMemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};
use alpha_clock::services::timezone::{TimezoneCatalog, TimezoneChoice};
use alpha_clock::web::{router, session::SESSION_COOKIE};
use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

fn create_test_server(store: Arc<dyn PreferenceStore>) -> TestServer {
    let instant = Utc.with_ymd_and_hms(2024, 1, 15, 17, 30, 45).unwrap();
    let service = ClockService::new(
        Arc::new(TimezoneCatalog::new()),
        store,
        Arc::new(FixedClock(instant)),
    );
    TestServer::new(router(service)).expect("Failed to create test server")
}

fn session_cookie(id: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, id)).unwrap()
}

const SESSION_ID: &str = "6f1c1a8e-3d2b-4c55-9a57-1f0e2d3c4b5a";

#[tokio::test]
async fn test_time_endpoint_issues_session_cookie() {
    let server = create_test_server(Arc::new(InMemoryPreferenceStore::new()));

    let response = server.get("/time/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie should be set");
    assert!(cookie.starts_with("clock_session="));

    let data: TimeDataResponse = response.json();
    assert_eq!(data.timezone, "UTC");
    assert_eq!(data.digital_time, "2024-01-15 17:30:45");
}

#[tokio::test]
async fn test_time_endpoint_reuses_session_cookie() {
    let server = create_test_server(Arc::new(InMemoryPreferenceStore::new()));

    let response = server
        .get("/time/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_set_timezone_then_poll() {
    let server = create_test_server(Arc::new(InMemoryPreferenceStore::new()));

    let form = HashMap::from([("timezone", "America/New_York")]);
    let response = server
        .post("/set-timezone/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .form(&form)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let result: PreferenceUpdate = response.json();
    assert_eq!(result, PreferenceUpdate::success());

    let data: TimeDataResponse = server
        .get("/time/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .await
        .json();
    assert_eq!(data.timezone, "America/New_York");
    assert_eq!(data.timezone_display, "America/New York");
    assert_eq!(data.digital_time, "2024-01-15 12:30:45");
    assert_eq!(data.hours, 0);
    assert!(!data.is_am);
}

#[tokio::test]
async fn test_set_invalid_timezone_returns_error_status() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let server = create_test_server(store.clone());

    let form = HashMap::from([("timezone", "Not/AReal")]);
    let response = server
        .post("/set-timezone/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .form(&form)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let result: PreferenceUpdate = response.json();
    assert_eq!(result, PreferenceUpdate::error("Invalid timezone"));
    assert_eq!(store.get(SESSION_ID).await.unwrap(), None);
}

#[tokio::test]
async fn test_stale_preference_maps_to_server_error() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    store.set(SESSION_ID, "Atlantis/Capital").await.unwrap();
    let server = create_test_server(store);

    let response = server
        .get("/time/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_index_embeds_clock_data() {
    let server = create_test_server(Arc::new(InMemoryPreferenceStore::new()));

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(!html.contains("__CLOCK_DATA__"));
    assert!(html.contains("\"digital_time\":\"2024-01-15 17:30:45\""));
    assert!(html.contains("\"available_timezones\""));
}

#[tokio::test]
async fn test_timezone_list_endpoint() {
    let server = create_test_server(Arc::new(InMemoryPreferenceStore::new()));

    let choices: Vec<TimezoneChoice> = server.get("/timezones/").await.json();

    assert!(choices.windows(2).all(|w| w[0].id < w[1].id));
    assert!(choices.contains(&TimezoneChoice {
        id: "America/Argentina/Buenos_Aires".to_string(),
        display: "America/Argentina/Buenos Aires".to_string(),
    }));
}

#[tokio::test]
async fn test_sqlite_backed_preference_persists() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let store = SqlitePreferenceStore::new(&db_url).await.unwrap();
    store.run_migrations().await.unwrap();
    let server = create_test_server(Arc::new(store.clone()));

    let form = HashMap::from([("timezone", "Asia/Kolkata")]);
    server
        .post("/set-timezone/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .form(&form)
        .await;

    assert_eq!(store.get(SESSION_ID).await.unwrap().as_deref(), Some("Asia/Kolkata"));

    let health = server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_bare_post_defaults_to_utc() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let server = create_test_server(store.clone());

    let response = server
        .post("/set-timezone/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let result: PreferenceUpdate = response.json();
    assert_eq!(result, PreferenceUpdate::success());
    assert_eq!(store.get(SESSION_ID).await.unwrap().as_deref(), Some("UTC"));
}

#[tokio::test]
async fn test_form_without_timezone_field_defaults_to_utc() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let server = create_test_server(store.clone());

    let form = HashMap::from([("other", "value")]);
    let result: PreferenceUpdate = server
        .post("/set-timezone/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .form(&form)
        .await
        .json();

    assert!(result.is_success());
    assert_eq!(store.get(SESSION_ID).await.unwrap().as_deref(), Some("UTC"));
}

#[tokio::test]
async fn test_store_failure_maps_to_server_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let store = SqlitePreferenceStore::new(&db_url).await.unwrap();
    store.run_migrations().await.unwrap();
    let server = create_test_server(Arc::new(store.clone()));

    store.pool.close().await;

    let response = server
        .get("/time/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");

    let form = HashMap::from([("timezone", "Europe/Paris")]);
    let response = server
        .post("/set-timezone/")
        .add_header(header::COOKIE, session_cookie(SESSION_ID))
        .form(&form)
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
