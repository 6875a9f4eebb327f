use std::f32::consts::{PI, TAU};

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Limits", inline)]
#[serde(default)]
/// Static bounds the orbit controls clamp against on every update.
///
/// Unbounded limits are infinite and serialize as TOML `inf`.
pub struct OrbitLimits {
    /// Closest the camera may get to the target (perspective dolly).
    pub min_distance: f32,
    /// Farthest the camera may get from the target (perspective dolly).
    pub max_distance: f32,
    /// Smallest orthographic zoom.
    pub min_zoom: f32,
    /// Largest orthographic zoom.
    pub max_zoom: f32,
    /// Smallest distance of the target from the controls' cursor point.
    pub min_target_radius: f32,
    /// Largest distance of the target from the controls' cursor point.
    pub max_target_radius: f32,
    /// Lower polar bound in radians (0 = looking straight down).
    pub min_polar_angle: f32,
    /// Upper polar bound in radians (π = looking straight up).
    pub max_polar_angle: f32,
    /// Lower azimuth bound in radians. Both azimuth bounds must be finite
    /// for either to apply.
    pub min_azimuth_angle: f32,
    /// Upper azimuth bound in radians.
    pub max_azimuth_angle: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_zoom: 0.0,
            max_zoom: f32::INFINITY,
            min_target_radius: 0.0,
            max_target_radius: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f32::NEG_INFINITY,
            max_azimuth_angle: f32::INFINITY,
        }
    }
}

impl OrbitLimits {
    /// Clamp a camera-to-target distance.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.min(self.max_distance).max(self.min_distance)
    }

    /// Clamp an orthographic zoom factor.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.min(self.max_zoom).max(self.min_zoom)
    }

    /// Clamp a polar angle.
    #[must_use]
    pub fn clamp_polar(&self, phi: f32) -> f32 {
        phi.min(self.max_polar_angle).max(self.min_polar_angle)
    }

    /// Clamp an azimuth angle.
    ///
    /// The angle and both bounds are first wrapped into `[-π, π]`, so a
    /// frame that carries the angle past the seam is still clamped. When
    /// the wrapped range straddles the ±π seam (`min > max`) the angle snaps
    /// to whichever bound is nearer, so the camera never swings the long way
    /// around.
    #[must_use]
    pub fn clamp_azimuth(&self, theta: f32) -> f32 {
        let (mut min, mut max) =
            (self.min_azimuth_angle, self.max_azimuth_angle);
        if !(min.is_finite() && max.is_finite()) {
            return theta;
        }
        let theta = if (-PI..=PI).contains(&theta) {
            theta
        } else {
            (theta + PI).rem_euclid(TAU) - PI
        };

        if min < -PI {
            min += TAU;
        } else if min > PI {
            min -= TAU;
        }
        if max < -PI {
            max += TAU;
        } else if max > PI {
            max -= TAU;
        }

        if min <= max {
            theta.min(max).max(min)
        } else if theta > (min + max) / 2.0 {
            theta.max(min)
        } else {
            theta.min(max)
        }
    }

    /// Clamp the target's distance from `cursor`.
    #[must_use]
    pub fn clamp_target(&self, target: Vec3, cursor: Vec3) -> Vec3 {
        let offset = target - cursor;
        let length = offset.length();
        if length == 0.0 {
            return target;
        }
        let clamped = length
            .min(self.max_target_radius)
            .max(self.min_target_radius);
        cursor + offset * (clamped / length)
    }
}
