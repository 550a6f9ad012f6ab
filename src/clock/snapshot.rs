use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::angles::HandAngles;
use super::labels::{label_maps, LabelOrderMap};
use crate::error::ClockResult;
use crate::services::timezone::TimezoneService;
use crate::utils::display::display_name;

/// Format of the digital readout, 24-hour.
pub const DIGITAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock fields of one instant in one timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSample {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub timezone_id: String,
}

impl TimeSample {
    pub fn from_local(local: &NaiveDateTime, timezone_id: &str) -> Self {
        Self {
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            timezone_id: timezone_id.to_string(),
        }
    }

    pub fn is_am(&self) -> bool {
        self.hour < 12
    }
}

/// Everything the clock page needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct ClockData {
    /// `hour % 12`; noon and midnight report 0.
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub digital_time: String,
    pub is_am: bool,
    /// Radians.
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
    pub hour_map: LabelOrderMap,
    pub all_map: LabelOrderMap,
    pub timezone: String,
    pub timezone_display: String,
}

impl ClockData {
    /// Resolves `instant` in `timezone_id` and lays out the dial.
    ///
    /// Fails with `InvalidTimezone` when the catalog does not know the id.
    pub fn at(
        instant: DateTime<Utc>,
        timezone_id: &str,
        timezones: &dyn TimezoneService,
    ) -> ClockResult<Self> {
        let local = timezones.convert(instant, timezone_id)?;
        let sample = TimeSample::from_local(&local, timezone_id);
        let (hour_map, all_map) = label_maps();
        let angles =
            HandAngles::calculate(sample.hour, sample.minute, sample.second, hour_map, all_map);

        Ok(Self {
            hours: sample.hour % 12,
            minutes: sample.minute,
            seconds: sample.second,
            digital_time: local.format(DIGITAL_TIME_FORMAT).to_string(),
            is_am: sample.is_am(),
            hour_angle: angles.hour_angle,
            minute_angle: angles.minute_angle,
            second_angle: angles.second_angle,
            hour_map: hour_map.clone(),
            all_map: all_map.clone(),
            timezone: sample.timezone_id,
            timezone_display: display_name(timezone_id),
        })
    }

    pub fn angles(&self) -> HandAngles {
        HandAngles {
            hour_angle: self.hour_angle,
            minute_angle: self.minute_angle,
            second_angle: self.second_angle,
        }
    }
}

/// Payload of the periodic time query; angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDataResponse {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub digital_time: String,
    pub is_am: bool,
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
    pub timezone: String,
    pub timezone_display: String,
}

impl From<&ClockData> for TimeDataResponse {
    fn from(data: &ClockData) -> Self {
        let degrees = data.angles().to_degrees();
        Self {
            hours: data.hours,
            minutes: data.minutes,
            seconds: data.seconds,
            digital_time: data.digital_time.clone(),
            is_am: data.is_am,
            hour_angle: degrees.hour_angle,
            minute_angle: degrees.minute_angle,
            second_angle: degrees.second_angle,
            timezone: data.timezone.clone(),
            timezone_display: data.timezone_display.clone(),
        }
    }
}
