use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, ClockResult};
use crate::utils::display::display_name;

/// Fallback when a session has no stored preference.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// One entry of the timezone picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneChoice {
    pub id: String,
    pub display: String,
}

/// Timezone database capability: the canonical list plus conversion.
pub trait TimezoneService: Send + Sync {
    /// Canonical identifiers, in display order.
    fn list(&self) -> &[String];

    /// Wall-clock time of `instant` in `timezone_id`.
    fn convert(&self, instant: DateTime<Utc>, timezone_id: &str) -> ClockResult<NaiveDateTime>;

    fn contains(&self, timezone_id: &str) -> bool {
        self.list().iter().any(|tz| tz == timezone_id)
    }

    /// `(identifier, display name)` pairs for the picker.
    fn choices(&self) -> Vec<TimezoneChoice> {
        self.list()
            .iter()
            .map(|id| TimezoneChoice {
                id: id.clone(),
                display: display_name(id),
            })
            .collect()
    }
}

/// Canonical list backed by the IANA database compiled into `chrono-tz`.
///
/// Only the commonly used zones are listed: `Region/City` style names plus
/// `UTC` and `GMT`. The `Etc/` family and bare legacy abbreviations such as
/// `EST5EDT` are left out of the picker but still convert.
#[derive(Debug, Clone)]
pub struct TimezoneCatalog {
    names: Vec<String>,
}

impl TimezoneCatalog {
    pub fn new() -> Self {
        let mut names: Vec<String> = TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| is_common(name))
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();

        tracing::debug!("Timezone catalog loaded with {} zones", names.len());
        Self { names }
    }

    fn resolve(timezone_id: &str) -> ClockResult<Tz> {
        timezone_id
            .parse::<Tz>()
            .map_err(|_| ClockError::InvalidTimezone(timezone_id.to_string()))
    }
}

impl Default for TimezoneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn is_common(name: &str) -> bool {
    matches!(name, "UTC" | "GMT") || (name.contains('/') && !name.starts_with("Etc/"))
}

impl TimezoneService for TimezoneCatalog {
    fn list(&self) -> &[String] {
        &self.names
    }

    fn convert(&self, instant: DateTime<Utc>, timezone_id: &str) -> ClockResult<NaiveDateTime> {
        let tz = Self::resolve(timezone_id)?;
        Ok(instant.with_timezone(&tz).naive_local())
    }

    fn contains(&self, timezone_id: &str) -> bool {
        self.names
            .binary_search_by(|name| name.as_str().cmp(timezone_id))
            .is_ok()
    }
}
