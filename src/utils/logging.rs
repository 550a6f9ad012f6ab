use tracing::{debug, error, info, warn};

/// Logs an incoming request with consistent format
pub fn log_request(route: &str, session_id: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("REQUEST: {} for session {} - {}", route, session_id, d),
        None => debug!("REQUEST: {} for session {}", route, session_id),
    }
}

/// Logs an accepted timezone preference change
pub fn log_timezone_change(session_id: &str, timezone: &str) {
    info!("TZ_CHANGE: session {} now uses {}", session_id, timezone);
}

/// Logs a rejected timezone with consistent format
pub fn log_validation_error(field: &str, value: &str, error: &str, session_id: &str) {
    warn!(
        "VALIDATION_ERROR: field '{}' value '{}' invalid: {} - session {}",
        field, value, error, session_id
    );
}

/// Logs preference store operations with consistent format
pub fn log_store_operation(operation: &str, backend: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} on {} - {}", operation, backend, d),
        None => debug!("STORE_OP: {} on {}", operation, backend),
    }
}

/// Logs preference store errors with consistent format
pub fn log_store_error(operation: &str, backend: &str, error: &str) {
    error!("STORE_ERROR: {} on {} failed: {}", operation, backend, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
