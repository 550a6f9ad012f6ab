use anyhow::{anyhow, Result};
use uuid::Uuid;

/// Longest identifier in the IANA database is well under this.
pub const MAX_TIMEZONE_LEN: usize = 64;

/// Shape check for a submitted timezone before the catalog lookup.
pub fn validate_timezone_input(timezone: &str) -> Result<()> {
    if timezone.is_empty() {
        return Err(anyhow!("Timezone cannot be empty"));
    }

    if timezone.len() > MAX_TIMEZONE_LEN {
        return Err(anyhow!(
            "Timezone cannot be longer than {} characters",
            MAX_TIMEZONE_LEN
        ));
    }

    if timezone.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(anyhow!("Timezone cannot contain whitespace"));
    }

    if timezone.starts_with('/') || timezone.ends_with('/') || timezone.contains("//") {
        return Err(anyhow!("Timezone has an empty path segment"));
    }

    Ok(())
}

/// Session ids are hyphenated UUIDs issued by the server.
pub fn validate_session_id(session_id: &str) -> Result<Uuid> {
    let session_id = session_id.trim();

    if session_id.is_empty() {
        return Err(anyhow!("Session ID cannot be empty"));
    }

    if session_id.len() != 36 {
        return Err(anyhow!("Session ID must be 36 characters long"));
    }

    Uuid::parse_str(session_id).map_err(|e| anyhow!("Session ID is not a UUID: {}", e))
}
