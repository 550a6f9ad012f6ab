use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::clock::{ClockData, TimeDataResponse};
use crate::error::ClockResult;
use crate::services::preferences::PreferenceStore;
use crate::services::timezone::{TimezoneChoice, TimezoneService, DEFAULT_TIMEZONE};
use crate::utils::logging::{log_timezone_change, log_validation_error};
use crate::utils::validation::validate_timezone_input;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Outcome of a preference update as sent to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PreferenceUpdate {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Data for the full clock page.
#[derive(Debug, Clone, Serialize)]
pub struct ClockPage {
    #[serde(flatten)]
    pub clock: ClockData,
    pub available_timezones: Vec<TimezoneChoice>,
}

/// Clock queries and timezone preference updates for a session.
#[derive(Clone)]
pub struct ClockService {
    timezones: Arc<dyn TimezoneService>,
    preferences: Arc<dyn PreferenceStore>,
    clock: Arc<dyn Clock>,
    default_timezone: String,
}

impl ClockService {
    pub fn new(
        timezones: Arc<dyn TimezoneService>,
        preferences: Arc<dyn PreferenceStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            timezones,
            preferences,
            clock,
            default_timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    /// Timezone used for sessions without a stored preference.
    pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.default_timezone = timezone.into();
        self
    }

    pub fn default_timezone(&self) -> &str {
        &self.default_timezone
    }

    pub fn timezones(&self) -> &Arc<dyn TimezoneService> {
        &self.timezones
    }

    pub fn preferences(&self) -> &Arc<dyn PreferenceStore> {
        &self.preferences
    }

    /// The session's timezone, or the default.
    pub async fn timezone_for(&self, session_id: &str) -> ClockResult<String> {
        Ok(self
            .preferences
            .get(session_id)
            .await?
            .unwrap_or_else(|| self.default_timezone.clone()))
    }

    /// Current clock state for the session, angles in degrees.
    ///
    /// A stored timezone the database no longer knows surfaces as
    /// `InvalidTimezone`.
    pub async fn snapshot(&self, session_id: &str) -> ClockResult<TimeDataResponse> {
        let timezone = self.timezone_for(session_id).await?;
        let data = ClockData::at(self.clock.now_utc(), &timezone, self.timezones.as_ref())?;
        Ok(TimeDataResponse::from(&data))
    }

    /// Clock state plus the picker entries for the index page.
    pub async fn page(&self, session_id: &str) -> ClockResult<ClockPage> {
        let timezone = self.timezone_for(session_id).await?;
        let clock = ClockData::at(self.clock.now_utc(), &timezone, self.timezones.as_ref())?;
        Ok(ClockPage {
            clock,
            available_timezones: self.timezones.choices(),
        })
    }

    /// Stores `timezone` for the session when it is in the canonical list.
    ///
    /// A missing value means `UTC`. Rejected values leave the stored
    /// preference untouched.
    pub async fn update_preference(
        &self,
        session_id: &str,
        timezone: Option<&str>,
    ) -> ClockResult<PreferenceUpdate> {
        let timezone = timezone.unwrap_or(DEFAULT_TIMEZONE);

        if let Err(e) = validate_timezone_input(timezone) {
            log_validation_error("timezone", timezone, &e.to_string(), session_id);
            return Ok(PreferenceUpdate::error("Invalid timezone"));
        }

        if !self.timezones.contains(timezone) {
            log_validation_error("timezone", timezone, "not in canonical list", session_id);
            return Ok(PreferenceUpdate::error("Invalid timezone"));
        }

        self.preferences.set(session_id, timezone).await?;
        log_timezone_change(session_id, timezone);
        Ok(PreferenceUpdate::success())
    }

    pub fn available_timezones(&self) -> Vec<TimezoneChoice> {
        self.timezones.choices()
    }
}
