//! Restaurant finder with crowd-sourced wait time predictions.
//!
//! Restaurants live in a single table persisted as a JSON snapshot; wait
//! reports accumulate in an append-only JSON log. The predictor combines
//! recent reports into a recency-weighted wait estimate, and search ranks
//! available restaurants by great-circle distance from the caller.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};

use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod geo;
pub mod normalize;
pub mod predict;
pub mod reports;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use config::Config;
use routes::{
    admin_insert_handler, admin_list_handler, find_handler, home_handler, report_form_handler,
    report_submit_handler, results_handler, toggle_handler,
};
use state::AppState;

/// Builds the full route tree over a shared state. Split out so tests can
/// drive the router directly.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(home_handler))
        .route("/results", get(results_handler))
        .route("/find", get(find_handler))
        .route("/report", get(report_form_handler).post(report_submit_handler))
        .route("/admin", get(admin_list_handler).post(admin_insert_handler))
        .route("/admin/restaurant/{id}/toggle", post(toggle_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let config = Config::load();
    let port = config.port;
    let state = AppState::new(config);

    info!("Starting server...");
    let app = app(state);

    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
