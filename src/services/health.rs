use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use crate::services::clock::ClockService;
use chrono::{DateTime, Utc};

/// Full report served on `/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub store: StoreHealth,
    pub catalog: CatalogHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreHealth {
    pub backend: String,
    pub status: String,
    pub response_time_ms: u64,
}

/// State of the timezone database the clock resolves against.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogHealth {
    pub status: String,
    pub zones: usize,
    pub default_timezone: String,
    /// Whether sessions without a preference can be served at all.
    pub default_listed: bool,
}

pub struct HealthService {
    pub router: Router,
}

#[derive(Clone)]
struct HealthState {
    clock: ClockService,
    start_time: DateTime<Utc>,
}

impl HealthService {
    pub fn new(clock: ClockService) -> Self {
        let state = HealthState {
            clock,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .with_state(state);

        Self { router }
    }
}

fn catalog_health(clock: &ClockService) -> CatalogHealth {
    let zones = clock.timezones().list().len();
    let default_listed = clock.timezones().contains(clock.default_timezone());
    let healthy = zones > 0 && default_listed;

    CatalogHealth {
        status: (if healthy { "healthy" } else { "unhealthy" }).to_string(),
        zones,
        default_timezone: clock.default_timezone().to_string(),
        default_listed,
    }
}

async fn health_check(State(state): State<HealthState>) -> Result<Json<HealthResponse>, StatusCode> {
    let store = state.clock.preferences();
    let start = std::time::Instant::now();

    let store_status = match store.ping().await {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::warn!("Preference store health check failed: {}", e);
            "unhealthy"
        }
    };
    let response_time_ms = start.elapsed().as_millis() as u64;

    let catalog = catalog_health(&state.clock);
    let healthy = store_status == "healthy" && catalog.status == "healthy";

    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    if !healthy {
        tracing::warn!(
            "Health check failed - store: {}, catalog: {} ({} zones, default {})",
            store_status, catalog.status, catalog.zones, catalog.default_timezone
        );
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: StoreHealth {
            backend: store.backend().to_string(),
            status: store_status.to_string(),
            response_time_ms,
        },
        catalog,
        uptime_seconds: uptime,
    }))
}

/// Ready once the store answers and the default timezone resolves.
async fn readiness_check(State(state): State<HealthState>) -> Result<Json<&'static str>, StatusCode> {
    if state.clock.preferences().ping().await.is_err() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    if !catalog_health(&state.clock).default_listed {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok(Json("ready"))
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}
