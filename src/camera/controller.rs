//! Damped orbit camera controls.
//!
//! Input handlers (see [`super::input`]) only accumulate pending motion:
//! rotation into a [`SphericalDelta`], panning into a world-space offset,
//! dolly into a multiplicative scale. [`OrbitControls::update`] drains that
//! motion once per frame into the camera transform, clamping against
//! [`OrbitLimits`].

use std::f32::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use super::core::{Camera, Projection};
use super::input::Viewport;
use super::spherical::Spherical;
use crate::input::gesture::{ActiveGesture, MouseBindings, TouchBindings};
use crate::input::pointer::PointerSession;
use crate::options::{ControlOptions, OrbitLimits};

/// Change threshold used when reporting whether `update` moved the camera.
const CHANGE_EPSILON: f32 = 0.000_001;

/// cos(70°): below this view/up alignment a cursor zoom re-aims at the
/// target instead of sliding the target along the ground plane.
const TILT_LIMIT: f32 = 0.342_020_14;

/// Pending rotation and dolly, drained by [`OrbitControls::update`].
///
/// `theta`/`phi` decay toward zero under damping; `scale` is consumed in
/// full on every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalDelta {
    /// Pending azimuth change in radians.
    pub theta: f32,
    /// Pending polar change in radians.
    pub phi: f32,
    /// Pending dolly factor (1.0 = none).
    pub scale: f32,
}

impl Default for SphericalDelta {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            scale: 1.0,
        }
    }
}

/// Pose captured by [`OrbitControls::save_state`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct SavedPose {
    target: Vec3,
    position: Vec3,
    zoom: f32,
}

/// Orbit controls: turns gestures into a damped orbit of a camera around
/// `target`.
///
/// The controls mutate a [`Camera`] they do not own; pass it to every
/// handler and to [`update`](Self::update).
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct OrbitControls {
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    /// Center of the target-radius clamp.
    pub cursor: Vec3,
    /// Master switch; a disabled controller ignores all input.
    pub enabled: bool,
    /// Let motion coast to a stop.
    pub enable_damping: bool,
    /// Fraction of pending motion applied per update when damping.
    pub damping_factor: f32,
    /// Allow orbiting.
    pub enable_rotate: bool,
    /// Rotation sensitivity.
    pub rotate_speed: f32,
    /// Allow dolly / zoom.
    pub enable_zoom: bool,
    /// Zoom sensitivity.
    pub zoom_speed: f32,
    /// Allow panning.
    pub enable_pan: bool,
    /// Pan sensitivity.
    pub pan_speed: f32,
    /// Pan in screen space instead of the plane orthogonal to `camera.up`.
    pub screen_space_panning: bool,
    /// Pixels panned per arrow-key press.
    pub key_pan_speed: f32,
    /// Rotation per arrow-key press.
    pub key_rotate_speed: f32,
    /// Dolly toward the cursor instead of the view center.
    pub zoom_to_cursor: bool,
    /// Orbit slowly while idle.
    pub auto_rotate: bool,
    /// Auto-rotation speed (2.0 = 30 s per orbit at 60 fps).
    pub auto_rotate_speed: f32,
    /// Mouse button bindings.
    pub mouse_buttons: MouseBindings,
    /// Touch bindings.
    pub touches: TouchBindings,
    /// Clamping bounds.
    pub limits: OrbitLimits,

    pub(super) spherical: Spherical,
    pub(super) delta: SphericalDelta,
    pub(super) pan_offset: Vec3,
    pub(super) perform_cursor_zoom: bool,
    pub(super) dolly_direction: Vec3,
    pub(super) cursor_ndc: Vec2,

    pub(super) viewport: Option<Viewport>,
    pub(super) listen_to_keys: bool,
    pub(super) control_active: bool,
    pub(super) session: Option<PointerSession>,
    pub(super) gesture: Option<ActiveGesture>,
    pub(super) rotate_start: Vec2,
    pub(super) pan_start: Vec2,
    pub(super) dolly_start: Vec2,

    last_position: Vec3,
    last_orientation: Quat,
    last_target: Vec3,
    saved: SavedPose,
}

impl OrbitControls {
    /// Create controls for `camera`, orbiting the world origin.
    ///
    /// The camera is aimed at the target and its current pose becomes the
    /// saved reset pose.
    #[must_use]
    pub fn new(
        camera: &mut Camera,
        options: &ControlOptions,
        limits: OrbitLimits,
    ) -> Self {
        let target = Vec3::ZERO;
        camera.look_at(target);
        let mut controls = Self {
            target,
            cursor: Vec3::ZERO,
            enabled: true,
            enable_damping: false,
            damping_factor: 0.05,
            enable_rotate: true,
            rotate_speed: 1.0,
            enable_zoom: true,
            zoom_speed: 1.0,
            enable_pan: true,
            pan_speed: 1.0,
            screen_space_panning: true,
            key_pan_speed: 7.0,
            key_rotate_speed: 1.0,
            zoom_to_cursor: false,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            mouse_buttons: MouseBindings::default(),
            touches: TouchBindings::default(),
            limits,
            spherical: Spherical::from_vec3(camera.position - target),
            delta: SphericalDelta::default(),
            pan_offset: Vec3::ZERO,
            perform_cursor_zoom: false,
            dolly_direction: Vec3::ZERO,
            cursor_ndc: Vec2::ZERO,
            viewport: None,
            listen_to_keys: false,
            control_active: false,
            session: None,
            gesture: None,
            rotate_start: Vec2::ZERO,
            pan_start: Vec2::ZERO,
            dolly_start: Vec2::ZERO,
            last_position: camera.position,
            last_orientation: camera.orientation,
            last_target: target,
            saved: SavedPose {
                target,
                position: camera.position,
                zoom: camera.zoom,
            },
        };
        controls.apply_options(options);
        controls
    }

    /// Copy behaviour settings from `options`. Limits and pose are kept.
    pub fn apply_options(&mut self, options: &ControlOptions) {
        self.enable_damping = options.enable_damping;
        self.damping_factor = options.damping_factor;
        self.enable_rotate = options.enable_rotate;
        self.rotate_speed = options.rotate_speed;
        self.enable_zoom = options.enable_zoom;
        self.zoom_speed = options.zoom_speed;
        self.enable_pan = options.enable_pan;
        self.pan_speed = options.pan_speed;
        self.screen_space_panning = options.screen_space_panning;
        self.key_pan_speed = options.key_pan_speed;
        self.key_rotate_speed = options.key_rotate_speed;
        self.zoom_to_cursor = options.zoom_to_cursor;
        self.auto_rotate = options.auto_rotate;
        self.auto_rotate_speed = options.auto_rotate_speed;
        self.listen_to_keys = options.listen_to_keys;
        self.mouse_buttons = options.mouse_buttons;
        self.touches = options.touches;
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Polar angle (from `camera.up`) as of the last update.
    #[must_use]
    pub fn polar_angle(&self) -> f32 {
        self.spherical.phi
    }

    /// Azimuthal angle around `camera.up` as of the last update.
    #[must_use]
    pub fn azimuthal_angle(&self) -> f32 {
        self.spherical.theta
    }

    /// Current camera-to-target distance.
    #[must_use]
    pub fn distance(&self, camera: &Camera) -> f32 {
        camera.position.distance(self.target)
    }

    /// Motion not yet applied to the camera.
    #[must_use]
    pub fn pending(&self) -> SphericalDelta {
        self.delta
    }

    /// Pan not yet applied to the target.
    #[must_use]
    pub fn pending_pan(&self) -> Vec3 {
        self.pan_offset
    }

    // ── Save / reset ────────────────────────────────────────────────────

    /// Remember the current target, position and zoom for [`reset`].
    ///
    /// [`reset`]: Self::reset
    pub fn save_state(&mut self, camera: &Camera) {
        self.saved = SavedPose {
            target: self.target,
            position: camera.position,
            zoom: camera.zoom,
        };
    }

    /// Restore the saved pose and drop all pending motion and gestures.
    pub fn reset(&mut self, camera: &mut Camera) {
        self.target = self.saved.target;
        camera.position = self.saved.position;
        camera.zoom = self.saved.zoom;
        camera.update_projection_matrix();
        self.discard_pending();
        let _ = self.update(camera, None);
        self.gesture = None;
    }

    /// Drop pending rotation, pan and dolly without applying them.
    pub fn discard_pending(&mut self) {
        self.delta = SphericalDelta::default();
        self.pan_offset = Vec3::ZERO;
        self.perform_cursor_zoom = false;
    }

    // ── Motion accumulation ─────────────────────────────────────────────

    /// Queue an azimuth rotation (positive turns the camera to the left).
    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    /// Queue a polar rotation (positive tilts the camera up).
    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    /// Queue a dolly toward the target by `dolly_scale` (< 1 moves closer).
    ///
    /// Returns `false` and disables zoom when the projection cannot dolly.
    pub fn dolly_in(&mut self, camera: &Camera, dolly_scale: f32) -> bool {
        if !self.can_dolly(camera) {
            return false;
        }
        self.delta.scale *= dolly_scale;
        true
    }

    /// Queue a dolly away from the target by `dolly_scale`.
    ///
    /// Returns `false` and disables zoom when the projection cannot dolly.
    pub fn dolly_out(&mut self, camera: &Camera, dolly_scale: f32) -> bool {
        if !self.can_dolly(camera) {
            return false;
        }
        self.delta.scale /= dolly_scale;
        true
    }

    fn can_dolly(&mut self, camera: &Camera) -> bool {
        match camera.projection {
            Projection::Perspective { .. }
            | Projection::Orthographic { .. } => true,
            Projection::Other(_) => {
                log::warn!(
                    "OrbitControls: unsupported camera projection, dolly/zoom disabled"
                );
                self.enable_zoom = false;
                false
            }
        }
    }

    /// Queue a pan of `delta` screen pixels.
    ///
    /// Perspective pans are scaled by target distance and field of view so
    /// the content under the cursor tracks the pointer at any range.
    /// Returns `false` and disables panning when the projection cannot pan.
    pub fn pan(&mut self, camera: &Camera, delta: Vec2) -> bool {
        let Some(viewport) = self.viewport else {
            return false;
        };
        match camera.projection {
            Projection::Perspective { fovy, .. } => {
                let offset = camera.position - self.target;
                let target_distance =
                    offset.length() * (fovy * 0.5).to_radians().tan();
                let height = viewport.height.max(1.0);
                self.pan_left(2.0 * delta.x * target_distance / height, camera);
                self.pan_up(2.0 * delta.y * target_distance / height, camera);
                true
            }
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                ..
            } => {
                let width = viewport.width.max(1.0);
                let height = viewport.height.max(1.0);
                self.pan_left(
                    delta.x * (right - left) / camera.zoom / width,
                    camera,
                );
                self.pan_up(
                    delta.y * (top - bottom) / camera.zoom / height,
                    camera,
                );
                true
            }
            Projection::Other(_) => {
                log::warn!(
                    "OrbitControls: unsupported camera projection, pan disabled"
                );
                self.enable_pan = false;
                false
            }
        }
    }

    fn pan_left(&mut self, distance: f32, camera: &Camera) {
        let right = camera.orientation * Vec3::X;
        self.pan_offset += right * -distance;
    }

    fn pan_up(&mut self, distance: f32, camera: &Camera) {
        let up = if self.screen_space_panning {
            camera.orientation * Vec3::Y
        } else {
            camera.up.cross(camera.orientation * Vec3::X)
        };
        self.pan_offset += up * distance;
    }

    /// Dolly factor for a wheel/drag delta.
    ///
    /// Exponential so that many small trackpad events compound the same
    /// way as one large wheel notch.
    #[must_use]
    pub fn zoom_scale(&self, delta: f32) -> f32 {
        let normalized = (delta * 0.01).abs();
        0.95_f32.powf(self.zoom_speed * normalized)
    }

    fn auto_rotation_angle(&self, delta_seconds: Option<f32>) -> f32 {
        match delta_seconds {
            Some(dt) => TAU / 60.0 * self.auto_rotate_speed * dt,
            None => TAU / 60.0 / 60.0 * self.auto_rotate_speed,
        }
    }

    // ── Per-frame update ────────────────────────────────────────────────

    /// Apply pending motion to `camera`.
    ///
    /// Call once per frame. `delta_seconds` makes auto-rotation frame-rate
    /// independent; `None` assumes 60 fps. Returns `true` when the camera
    /// position, orientation, zoom or the target changed noticeably.
    pub fn update(
        &mut self,
        camera: &mut Camera,
        delta_seconds: Option<f32>,
    ) -> bool {
        let to_y_up = Quat::from_rotation_arc(camera.up.normalize(), Vec3::Y);
        let from_y_up = to_y_up.inverse();

        let offset = to_y_up * (camera.position - self.target);
        self.spherical = Spherical::from_vec3(offset);

        if self.auto_rotate && self.gesture.is_none() {
            self.rotate_left(self.auto_rotation_angle(delta_seconds));
        }

        let gain = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        self.spherical.theta += self.delta.theta * gain;
        self.spherical.phi += self.delta.phi * gain;

        self.spherical.theta = self.limits.clamp_azimuth(self.spherical.theta);
        self.spherical.phi = self.limits.clamp_polar(self.spherical.phi);
        self.spherical.make_safe();

        self.target += self.pan_offset * gain;
        self.target = self.limits.clamp_target(self.target, self.cursor);

        let cursor_zoom = self.zoom_to_cursor && self.perform_cursor_zoom;
        let mut zoom_changed = false;
        if cursor_zoom || camera.projection.is_orthographic() {
            self.spherical.radius =
                self.limits.clamp_distance(self.spherical.radius);
        } else {
            let prev_radius = self.spherical.radius;
            self.spherical.radius = self
                .limits
                .clamp_distance(self.spherical.radius * self.delta.scale);
            zoom_changed = prev_radius != self.spherical.radius;
        }

        let offset = from_y_up * self.spherical.to_vec3();
        camera.position = self.target + offset;
        camera.look_at(self.target);

        if self.enable_damping {
            self.delta.theta *= 1.0 - self.damping_factor;
            self.delta.phi *= 1.0 - self.damping_factor;
            self.pan_offset *= 1.0 - self.damping_factor;
        } else {
            self.delta.theta = 0.0;
            self.delta.phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }

        if cursor_zoom {
            zoom_changed |= self.apply_cursor_zoom(camera, offset.length());
        } else if camera.projection.is_orthographic() {
            let prev_zoom = camera.zoom;
            camera.zoom =
                self.limits.clamp_zoom(camera.zoom / self.delta.scale);
            if prev_zoom != camera.zoom {
                camera.update_projection_matrix();
                zoom_changed = true;
            }
        }

        self.delta.scale = 1.0;
        self.perform_cursor_zoom = false;

        let moved = zoom_changed
            || self.last_position.distance_squared(camera.position)
                > CHANGE_EPSILON
            || 8.0 * (1.0 - self.last_orientation.dot(camera.orientation))
                > CHANGE_EPSILON
            || self.last_target.distance_squared(self.target) > CHANGE_EPSILON;

        if moved {
            self.last_position = camera.position;
            self.last_orientation = camera.orientation;
            self.last_target = self.target;
        }
        moved
    }

    /// Move the camera along the cursor ray and re-place the target.
    /// Returns whether the dolly changed anything.
    fn apply_cursor_zoom(
        &mut self,
        camera: &mut Camera,
        prev_radius: f32,
    ) -> bool {
        let (new_radius, changed) = match camera.projection {
            Projection::Perspective { .. } => {
                let new_radius =
                    self.limits.clamp_distance(prev_radius * self.delta.scale);
                let radius_delta = prev_radius - new_radius;
                camera.position += self.dolly_direction * radius_delta;
                (new_radius, radius_delta != 0.0)
            }
            Projection::Orthographic { .. } => {
                let ndc = self.cursor_ndc.extend(0.0);
                let before = camera.unproject(ndc);
                let prev_zoom = camera.zoom;
                camera.zoom =
                    self.limits.clamp_zoom(camera.zoom / self.delta.scale);
                camera.update_projection_matrix();
                let after = camera.unproject(ndc);
                camera.position += before - after;
                (prev_radius, prev_zoom != camera.zoom)
            }
            Projection::Other(_) => {
                log::warn!(
                    "OrbitControls: unsupported camera projection, zoom to cursor disabled"
                );
                self.zoom_to_cursor = false;
                return false;
            }
        };

        let forward = camera.forward();
        if self.screen_space_panning {
            self.target = camera.position + forward * new_radius;
        } else if camera.up.dot(forward).abs() < TILT_LIMIT {
            camera.look_at(self.target);
        } else {
            // slide the target within the ground plane through it
            let normal = camera.up.normalize();
            let denom = normal.dot(forward);
            if denom != 0.0 {
                let t = normal.dot(self.target - camera.position) / denom;
                if t >= 0.0 {
                    self.target = camera.position + forward * t;
                }
            }
        }
        changed
    }
}
