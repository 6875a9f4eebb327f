use std::time::Duration;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::easing::EasingFunction;

/// Serializable name for the easing curve of a camera flight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FlightEasing {
    /// Constant speed.
    Linear,
    /// Quadratic ease in and out.
    QuadraticInOut,
    /// Cubic ease in and out.
    #[default]
    CubicInOut,
    /// Cubic ease out.
    CubicOut,
}

impl From<FlightEasing> for EasingFunction {
    fn from(easing: FlightEasing) -> Self {
        match easing {
            FlightEasing::Linear => Self::Linear,
            FlightEasing::QuadraticInOut => Self::QuadraticInOut,
            FlightEasing::CubicInOut => Self::CubicInOut,
            FlightEasing::CubicOut => Self::CubicOut,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus", inline)]
#[serde(default)]
/// Camera choreography for focusing a body and returning to the overview.
pub struct FocusOptions {
    /// Camera offset from the focused body, unless the body overrides it.
    #[schemars(skip)]
    pub offset: Vec3,
    /// Camera position of the overview pose (looking at the origin).
    #[schemars(skip)]
    pub overview_position: Vec3,
    /// Length of the fly-to flight in seconds.
    #[schemars(title = "Focus Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub duration_secs: f32,
    /// Length of the return flight in seconds.
    #[schemars(title = "Return Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub return_duration_secs: f32,
    /// Easing curve of both flights.
    #[schemars(title = "Easing")]
    pub easing: FlightEasing,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            offset: Vec3::new(5.0, 3.0, 5.0),
            overview_position: Vec3::new(0.0, 30.0, 50.0),
            duration_secs: 2.0,
            return_duration_secs: 2.0,
            easing: FlightEasing::CubicInOut,
        }
    }
}

impl FocusOptions {
    /// Fly-to duration; negative or non-finite values collapse to zero.
    #[must_use]
    pub fn duration(&self) -> Duration {
        secs(self.duration_secs)
    }

    /// Return-flight duration.
    #[must_use]
    pub fn return_duration(&self) -> Duration {
        secs(self.return_duration_secs)
    }
}

fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_durations_collapse_to_zero() {
        let opts = FocusOptions {
            duration_secs: -1.0,
            return_duration_secs: f32::NAN,
            ..FocusOptions::default()
        };
        assert_eq!(opts.duration(), Duration::ZERO);
        assert_eq!(opts.return_duration(), Duration::ZERO);
        assert_eq!(
            FocusOptions::default().duration(),
            Duration::from_secs(2)
        );
    }
}
