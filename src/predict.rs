//! Wait-time prediction from recent crowd reports.
//!
//! A restaurant's predicted wait is the exponentially recency-weighted
//! average of its reports from the last two hours. A report's influence
//! halves every 30 minutes, so the estimate tracks the newest reports as
//! time advances. Nothing is cached; every call recomputes against the
//! current log and clock.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::reports::Report;
use crate::store::Restaurant;

/// Cold-start estimate in minutes when no recent reports exist.
pub const DEFAULT_WAIT: f64 = 25.0;
/// Minutes after which a report's weight is halved.
pub const HALF_LIFE_MIN: f64 = 30.0;
/// Reports older than this many minutes are ignored entirely.
pub const RECENT_WINDOW_MIN: i64 = 120;

/// Derived view served to clients; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub restaurant_id: u32,
    pub name: String,
    pub predicted_wait: f64,
    pub n_reports_used: usize,
}

/// Decay weight for a report `age_minutes` old: 1.0 now, 0.5 at 30
/// minutes, 0.25 at an hour.
fn recency_weight(age_minutes: f64) -> f64 {
    let lambda = 2.0_f64.ln() / HALF_LIFE_MIN;
    (-lambda * age_minutes).exp()
}

/// Weighted prediction for one restaurant: `(minutes, reports used)`.
///
/// Only reports for `restaurant_id` within the recent window count; with
/// none, falls back to [`DEFAULT_WAIT`] and a sample count of 0. The
/// result is rounded to one decimal and, being a weighted average, always
/// lies within the min/max of the contributing waits.
pub fn weighted_prediction(
    reports: &[Report],
    restaurant_id: u32,
    now: DateTime<Utc>,
) -> (f64, usize) {
    let cutoff = now - Duration::minutes(RECENT_WINDOW_MIN);
    let recents: Vec<&Report> = reports
        .iter()
        .filter(|r| r.restaurant_id == restaurant_id && r.created_at >= cutoff)
        .collect();

    if recents.is_empty() {
        return (DEFAULT_WAIT, 0);
    }

    let mut weight_sum = 0.0;
    let mut weighted_wait_sum = 0.0;
    for report in &recents {
        let age_minutes = (now - report.created_at).num_seconds() as f64 / 60.0;
        let weight = recency_weight(age_minutes);
        weight_sum += weight;
        weighted_wait_sum += weight * f64::from(report.wait_minutes);
    }

    let predicted = weighted_wait_sum / weight_sum;
    ((predicted * 10.0).round() / 10.0, recents.len())
}

/// Bundles a restaurant with its current prediction.
pub fn prediction_bundle(reports: &[Report], restaurant: &Restaurant, now: DateTime<Utc>) -> Prediction {
    let (predicted_wait, n_reports_used) = weighted_prediction(reports, restaurant.id, now);
    Prediction {
        restaurant_id: restaurant.id,
        name: restaurant.name.clone(),
        predicted_wait,
        n_reports_used,
    }
}
