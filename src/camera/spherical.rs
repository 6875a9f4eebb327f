//! Spherical coordinates relative to a look-at target.
//!
//! Convention: `phi` is the polar angle measured from the +Y axis, `theta`
//! the azimuth around +Y measured from +Z toward +X.

use glam::Vec3;

/// Smallest polar distance kept from either pole by [`Spherical::make_safe`].
pub const POLE_EPSILON: f32 = 0.000_001;

/// A point expressed as (radius, polar angle, azimuthal angle).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle from +Y in radians, `[0, π]`.
    pub phi: f32,
    /// Azimuthal angle around +Y in radians, `(-π, π]`.
    pub theta: f32,
}

impl Default for Spherical {
    fn default() -> Self {
        Self {
            radius: 1.0,
            phi: 0.0,
            theta: 0.0,
        }
    }
}

impl Spherical {
    /// Create from explicit components.
    #[must_use]
    pub fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert a cartesian offset into spherical form.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    /// Convert back into a cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep `phi` strictly between the poles so the look-at basis never
    /// degenerates.
    pub fn make_safe(&mut self) {
        self.phi = self
            .phi
            .clamp(POLE_EPSILON, std::f32::consts::PI - POLE_EPSILON);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn axis_aligned_offsets() {
        let s = Spherical::from_vec3(Vec3::new(0.0, 0.0, 10.0));
        assert!((s.radius - 10.0).abs() < 1e-6);
        assert!((s.phi - FRAC_PI_2).abs() < 1e-6);
        assert!(s.theta.abs() < 1e-6);

        let s = Spherical::from_vec3(Vec3::new(3.0, 0.0, 0.0));
        assert!((s.theta - FRAC_PI_2).abs() < 1e-6);

        let s = Spherical::from_vec3(Vec3::new(0.0, 4.0, 0.0));
        assert!(s.phi.abs() < 1e-6);
    }

    #[test]
    fn zero_offset_is_degenerate_but_finite() {
        let s = Spherical::from_vec3(Vec3::ZERO);
        assert_eq!(s, Spherical::new(0.0, 0.0, 0.0));
        assert_eq!(s.to_vec3(), Vec3::ZERO);
    }

    #[test]
    fn converts_back_to_the_same_offset() {
        let v = Vec3::new(0.0, 30.0, 50.0);
        let back = Spherical::from_vec3(v).to_vec3();
        assert!((back - v).length() < 1e-4);
    }

    #[test]
    fn make_safe_keeps_away_from_poles() {
        let mut s = Spherical::new(1.0, 0.0, 0.0);
        s.make_safe();
        assert!(s.phi > 0.0);

        let mut s = Spherical::new(1.0, PI, 0.0);
        s.make_safe();
        assert!(s.phi < PI);
    }
}
