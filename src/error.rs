use thiserror::Error;

/// Errors produced by the clock core and its services.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The identifier is not part of the canonical timezone list.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Label maps only cover numerals that have a name in the table.
    #[error("Unsupported label domain: 1..={0}")]
    UnsupportedLabelDomain(u32),

    /// The preference store could not be read or written.
    #[error("Preference store error: {0}")]
    Store(#[from] sqlx::Error),

    /// The page payload could not be encoded.
    #[error("Failed to render clock data: {0}")]
    Render(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type ClockResult<T> = Result<T, ClockError>;
