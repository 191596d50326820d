//! Endpoint tests driving the router directly, no listening socket.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use foodi::{
    app,
    config::Config,
    reports::ReportLog,
    state::AppState,
    store::RestaurantStore,
};

/// Router over an empty store in a fresh temp directory. The directory
/// handle must stay alive for the duration of the test.
fn test_app(dir: &TempDir) -> (Router, Arc<AppState>) {
    let config = Config {
        port: 0,
        data_dir: dir.path().to_path_buf(),
    };
    let state = Arc::new(AppState {
        store: RestaurantStore::open(config.restaurants_path()),
        reports: ReportLog::new(config.reports_path()),
        config,
    });
    (app(state.clone()), state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get("location")
        .map(|v| v.to_str().unwrap().to_string());
    (status, location)
}

#[tokio::test]
async fn find_orders_by_distance() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = test_app(&dir);

    // Offsets from the query point chosen so distances come out roughly
    // 5.5, 1.1, and 3.3 km; insertion order deliberately scrambled.
    for (name, dlat) in [("רחוק", 0.05), ("קרוב", 0.01), ("אמצע", 0.03)] {
        state
            .store
            .insert(
                name.to_string(),
                "בשרים",
                Some(31.78 + dlat),
                Some(35.21),
                String::new(),
            )
            .unwrap();
    }

    let (status, body) = get_json(&app, "/find?lat=31.78&lon=35.21").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["error"].is_null());

    let names: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["קרוב", "אמצע", "רחוק"]);

    let distances: Vec<f64> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["distance_km"].as_f64().unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn find_without_location_is_a_message_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = test_app(&dir);

    for uri in ["/find", "/find?lat=31.78", "/find?lat=abc&lon=35.21"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body["results"].as_array().unwrap().is_empty(), "{uri}");
        assert!(!body["error"].as_str().unwrap().is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn find_filters_by_normalized_cuisine() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = test_app(&dir);

    state
        .store
        .insert("בורגרים".into(), "המבורגר", Some(31.78), Some(35.21), String::new())
        .unwrap();
    state
        .store
        .insert("פסטה".into(), "איטלקי", Some(31.78), Some(35.22), String::new())
        .unwrap();

    // "בורגר" is a synonym; the filter must match the canonical label.
    let (status, body) = get_json(&app, "/find?lat=31.78&lon=35.21&type=%D7%91%D7%95%D7%A8%D7%92%D7%A8").await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "בורגרים");
}

#[tokio::test]
async fn find_skips_unavailable_and_unlocated() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = test_app(&dir);

    state
        .store
        .insert("פתוח".into(), "מזרחי", Some(31.78), Some(35.21), String::new())
        .unwrap();
    let closed = state
        .store
        .insert("סגור".into(), "מזרחי", Some(31.78), Some(35.21), String::new())
        .unwrap();
    state
        .store
        .insert("בלי מיקום".into(), "מזרחי", None, None, String::new())
        .unwrap();
    state.store.toggle_available(closed.id).unwrap();

    let (_, body) = get_json(&app, "/find?lat=31.78&lon=35.21").await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "פתוח");
}

#[tokio::test]
async fn results_start_cold_then_follow_reports() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = test_app(&dir);

    state
        .store
        .insert("נאיה".into(), "אסייתי", Some(31.77), Some(35.19), String::new())
        .unwrap();

    let (_, body) = get_json(&app, "/results").await;
    assert_eq!(body[0]["predicted_wait"], 25.0);
    assert_eq!(body[0]["n_reports_used"], 0);

    let (status, _) = post_form(&app, "/report", "restaurant_id=1&wait_minutes=40").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get_json(&app, "/results").await;
    assert_eq!(body[0]["predicted_wait"], 40.0);
    assert_eq!(body[0]["n_reports_used"], 1);

    // The report also becomes the restaurant's last reported wait.
    let (_, admin) = get_json(&app, "/admin").await;
    assert_eq!(admin[0]["wait_time"], 40);
}

#[tokio::test]
async fn report_for_vanished_restaurant_is_still_logged() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = test_app(&dir);

    let (status, _) = post_form(&app, "/report", "restaurant_id=77&wait_minutes=15").await;
    assert_eq!(status, StatusCode::OK);

    let log = state.reports.load();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].restaurant_id, 77);
}

#[tokio::test]
async fn malformed_report_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = test_app(&dir);

    for body in [
        "restaurant_id=abc&wait_minutes=10",
        "restaurant_id=1&wait_minutes=",
        "wait_minutes=10",
    ] {
        let (status, _) = post_form(&app, "/report", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }
}

#[tokio::test]
async fn admin_insert_normalizes_and_redirects() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = test_app(&dir);

    let (status, location) = post_form(
        &app,
        "/admin",
        "name=%D7%97%D7%93%D7%A9%D7%94&type=%D7%92%D7%A8%D7%99%D7%9C&lat=31.78&lon=35.21&contact=02-1234567",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/admin"));

    let (_, admin) = get_json(&app, "/admin").await;
    assert_eq!(admin[0]["name"], "חדשה");
    // "גריל" normalizes to the canonical meat label.
    assert_eq!(admin[0]["type"], "בשרים");
    assert_eq!(admin[0]["available"], true);
}

#[tokio::test]
async fn toggle_flips_or_404s() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = test_app(&dir);

    state
        .store
        .insert("א".into(), "מזרחי", Some(31.78), Some(35.21), String::new())
        .unwrap();

    let (status, location) = post_form(&app, "/admin/restaurant/1/toggle", "").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/admin"));
    assert!(!state.store.get(1).unwrap().available);

    let (status, _) = post_form(&app, "/admin/restaurant/999/toggle", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn landing_and_report_form_render() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = test_app(&dir);
    state
        .store
        .insert("נאיה".into(), "אסייתי", Some(31.77), Some(35.19), String::new())
        .unwrap();

    for uri in ["/", "/report", "/report?restaurant_id=1"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(!bytes.is_empty(), "{uri}");
    }
}
