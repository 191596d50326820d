//! HTTP handlers. Thin orchestration over the store, report log,
//! predictor, and distance engine.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Json, Redirect},
};
use chrono::Utc;
use serde::Serialize;

use crate::{
    error::AppError,
    geo::haversine,
    normalize::normalize,
    predict::{prediction_bundle, Prediction},
    state::AppState,
    store::Restaurant,
};

const LANDING_PAGE: &str = r#"<!doctype html>
<html dir="rtl" lang="he">
<head><meta charset="utf-8"><title>Foodi</title></head>
<body>
<h1>Foodi</h1>
<ul>
<li><a href="/results">כל המסעדות הזמינות</a></li>
<li><a href="/report">דיווח על זמן המתנה</a></li>
<li><a href="/admin">ניהול</a></li>
</ul>
</body>
</html>
"#;

pub async fn home_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Every available restaurant enriched with its current prediction.
pub async fn results_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Prediction>> {
    let reports = state.reports.load();
    let now = Utc::now();

    let enriched = state
        .store
        .list_available()
        .iter()
        .map(|r| prediction_bundle(&reports, r, now))
        .collect();

    Json(enriched)
}

#[derive(Serialize)]
pub struct SearchResult {
    pub restaurant_id: u32,
    pub name: String,
    pub predicted_wait: f64,
    pub n_reports_used: usize,
    pub distance_km: f64,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize)]
pub struct FindResponse {
    pub results: Vec<SearchResult>,
    pub error: Option<String>,
}

/// Restaurants sorted by distance from the caller, optionally filtered by
/// normalized cuisine. A missing or unparsable location is a user-input
/// problem answered with an empty result set and a message, not an error
/// status.
pub async fn find_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<FindResponse> {
    let lat = params.get("lat").and_then(|s| s.parse::<f64>().ok());
    let lon = params.get("lon").and_then(|s| s.parse::<f64>().ok());
    let cuisine = params.get("type").map(|s| normalize(s)).unwrap_or_default();

    let (Some(lat), Some(lon)) = (lat, lon) else {
        return Json(FindResponse {
            results: Vec::new(),
            error: Some("לא התקבל מיקום. יש ללחוץ על 'אתר אותי'.".to_string()),
        });
    };

    let reports = state.reports.load();
    let now = Utc::now();

    let mut results: Vec<SearchResult> = Vec::new();
    for restaurant in state.store.list_available() {
        let (Some(r_lat), Some(r_lon)) = (restaurant.lat, restaurant.lon) else {
            continue;
        };
        if !cuisine.is_empty() && restaurant.cuisine_type != cuisine {
            continue;
        }

        let distance = haversine(lat, lon, r_lat, r_lon);
        let bundle = prediction_bundle(&reports, &restaurant, now);

        results.push(SearchResult {
            restaurant_id: bundle.restaurant_id,
            name: bundle.name,
            predicted_wait: bundle.predicted_wait,
            n_reports_used: bundle.n_reports_used,
            distance_km: (distance * 100.0).round() / 100.0,
            lat: r_lat,
            lon: r_lon,
        });
    }

    results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    Json(FindResponse {
        results,
        error: None,
    })
}

/// Renders the wait-report form, optionally pre-selecting a restaurant.
pub async fn report_form_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let preselected = params.get("restaurant_id").and_then(|s| s.parse::<u32>().ok());

    let mut options = String::new();
    for restaurant in state.store.list_available() {
        let selected = if preselected == Some(restaurant.id) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            restaurant.id, selected, restaurant.name
        ));
    }

    Html(format!(
        r#"<!doctype html>
<html dir="rtl" lang="he">
<head><meta charset="utf-8"><title>דיווח עומס</title></head>
<body>
<h1>דיווח על זמן המתנה</h1>
<form method="post" action="/report">
<label>מסעדה:
<select name="restaurant_id">
{options}</select>
</label>
<label>זמן המתנה בדקות: <input type="number" name="wait_minutes" min="0"></label>
<button type="submit">שליחה</button>
</form>
</body>
</html>
"#
    ))
}

#[derive(Serialize)]
pub struct ReportAck {
    pub message: String,
    pub restaurant: Option<Restaurant>,
    pub wait_minutes: u32,
}

/// Appends a wait report and records it as the restaurant's last reported
/// wait. A report for an id the table no longer holds is still logged; it
/// simply updates nothing.
pub async fn report_submit_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<ReportAck>, AppError> {
    let restaurant_id = parse_field::<u32>(&form, "restaurant_id")?;
    let wait_minutes = parse_field::<u32>(&form, "wait_minutes")?;

    state.reports.add(restaurant_id, wait_minutes, Utc::now())?;

    let restaurant = state.store.get(restaurant_id);
    if restaurant.is_some() {
        state.store.set_wait_time(restaurant_id, wait_minutes)?;
    }

    Ok(Json(ReportAck {
        message: "תודה על הדיווח!".to_string(),
        restaurant: state.store.get(restaurant_id),
        wait_minutes,
    }))
}

/// All restaurants, available or not.
pub async fn admin_list_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Restaurant>> {
    Json(state.store.all())
}

/// Inserts a restaurant (normalizing its type) and bounces back to the
/// admin list.
pub async fn admin_insert_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let name = form
        .get("name")
        .filter(|n| !n.trim().is_empty())
        .ok_or(AppError::MalformedPayload)?
        .trim()
        .to_string();
    let cuisine_type = form.get("type").map(String::as_str).unwrap_or_default();
    let lat = parse_field::<f64>(&form, "lat")?;
    let lon = parse_field::<f64>(&form, "lon")?;
    let contact = form.get("contact").cloned().unwrap_or_default();

    state
        .store
        .insert(name, cuisine_type, Some(lat), Some(lon), contact)?;

    Ok(Redirect::to("/admin"))
}

/// Flips a restaurant's availability; unknown ids are a client error.
pub async fn toggle_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, AppError> {
    match state.store.toggle_available(id)? {
        Some(_) => Ok(Redirect::to("/admin")),
        None => Err(AppError::RestaurantNotFound),
    }
}

fn parse_field<T: std::str::FromStr>(
    form: &HashMap<String, String>,
    key: &str,
) -> Result<T, AppError> {
    form.get(key)
        .and_then(|raw| raw.trim().parse().ok())
        .ok_or(AppError::MalformedPayload)
}
