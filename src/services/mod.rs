/// Snapshot queries and preference updates
pub mod clock;
/// Liveness, readiness and store health endpoints
pub mod health;
/// Session timezone preference storage
pub mod preferences;
/// Canonical timezone list and conversion
pub mod timezone;
