/// Display transforms for timezone names
pub mod display;
/// Structured log helpers with consistent prefixes
pub mod logging;
/// Input validation for request fields
pub mod validation;
