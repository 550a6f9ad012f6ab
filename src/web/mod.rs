//! HTTP surface: the clock page, the polling endpoint and the timezone
//! picker.

pub mod routes;
pub mod session;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::services::clock::ClockService;
use crate::services::health::HealthService;

#[derive(Clone)]
pub struct AppState {
    pub clock: ClockService,
}

/// Full application router, health probes included.
pub fn router(clock: ClockService) -> Router {
    let health = HealthService::new(clock.clone());
    let state = AppState { clock };

    Router::new()
        .route("/", get(routes::index))
        .route("/time/", get(routes::time_data))
        .route("/set-timezone/", post(routes::set_timezone))
        .route("/timezones/", get(routes::timezones))
        .with_state(state)
        .merge(health.router)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
