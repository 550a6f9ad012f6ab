use std::f64::consts::TAU;

use super::labels::LabelOrderMap;

/// Clockwise hand rotations from 12 o'clock, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
}

/// Same rotations, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAnglesDegrees {
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
}

impl HandAngles {
    /// Places each hand on the dial slot of its alphabetically ranked label.
    ///
    /// `hours` is 0-23, `minutes` and `seconds` are 0-59. Anything else is a
    /// caller bug and panics in every build.
    pub fn calculate(
        hours: u32,
        minutes: u32,
        seconds: u32,
        hour_map: &LabelOrderMap,
        all_map: &LabelOrderMap,
    ) -> Self {
        assert!(
            hours < 24 && minutes < 60 && seconds < 60,
            "time out of range: {hours:02}:{minutes:02}:{seconds:02}"
        );

        let hours_12 = match hours % 12 {
            0 => 12,
            h => h,
        };

        // 30 degrees per hour slot, 6 per minute/second slot
        let hour_deg = (f64::from(hour_map[hours_12]) - 3.0 + f64::from(minutes) / 60.0) * 30.0;
        let minute_deg = (f64::from(all_map[minutes + 1]) - 15.0) * 6.0;
        let second_deg = (f64::from(all_map[seconds + 1]) - 15.0) * 6.0;

        Self {
            hour_angle: hour_deg.to_radians(),
            minute_angle: minute_deg.to_radians(),
            second_angle: second_deg.to_radians(),
        }
    }

    /// Each angle wrapped into `[0, 2π)`.
    pub fn normalized(self) -> Self {
        Self {
            hour_angle: self.hour_angle.rem_euclid(TAU),
            minute_angle: self.minute_angle.rem_euclid(TAU),
            second_angle: self.second_angle.rem_euclid(TAU),
        }
    }

    pub fn to_degrees(self) -> HandAnglesDegrees {
        HandAnglesDegrees {
            hour_angle: self.hour_angle.to_degrees(),
            minute_angle: self.minute_angle.to_degrees(),
            second_angle: self.second_angle.to_degrees(),
        }
    }
}
