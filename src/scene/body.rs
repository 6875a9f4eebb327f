use glam::Vec3;

/// Stable handle of a body in a [`BodyRegistry`](super::BodyRegistry).
///
/// Handles are indices into the registry arena and stay valid for the
/// registry's lifetime (bodies are never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(super) u32);

impl BodyHandle {
    /// Arena index of this handle.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Simplified circular motion in the XZ plane around the origin or a
/// parent body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    /// Body this one circles; `None` circles the world origin.
    pub parent: Option<BodyHandle>,
    /// Orbit radius.
    pub radius: f32,
    /// Angular speed in radians per second.
    pub angular_speed: f32,
    /// Current angle along the orbit in radians.
    pub phase: f32,
}

impl CircularOrbit {
    /// Offset from the orbit center at the current phase.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        let (sin, cos) = self.phase.sin_cos();
        Vec3::new(cos * self.radius, 0.0, sin * self.radius)
    }

    /// Advance the phase by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.phase = (self.phase + self.angular_speed * dt)
            .rem_euclid(std::f32::consts::TAU);
    }
}

/// An orbitable scene body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Unique display name.
    pub name: String,
    /// World position.
    pub position: Vec3,
    /// Whether the body is drawn.
    pub visible: bool,
    /// Visual radius, used for framing.
    pub size: f32,
    /// Orbital motion, if the body moves.
    pub orbit: Option<CircularOrbit>,
    /// Self-rotation speed in radians per second.
    pub spin_speed: f32,
    /// Current self-rotation angle about the Y axis.
    pub spin_angle: f32,
    /// Camera offset used when focusing this body instead of the default.
    pub focus_offset: Option<Vec3>,
}

impl Body {
    /// A visible, static, non-spinning body at the origin.
    #[must_use]
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            visible: true,
            size,
            orbit: None,
            spin_speed: 0.0,
            spin_angle: 0.0,
            focus_offset: None,
        }
    }

    /// Give the body a circular orbit.
    #[must_use]
    pub fn with_orbit(mut self, orbit: CircularOrbit) -> Self {
        self.orbit = Some(orbit);
        self
    }

    /// Give the body a self-rotation speed.
    #[must_use]
    pub fn with_spin(mut self, spin_speed: f32) -> Self {
        self.spin_speed = spin_speed;
        self
    }

    /// Override the camera offset used when focusing this body.
    #[must_use]
    pub fn with_focus_offset(mut self, offset: Vec3) -> Self {
        self.focus_offset = Some(offset);
        self
    }

    /// Advance the self-rotation by `dt` seconds.
    pub fn spin(&mut self, dt: f32) {
        self.spin_angle = (self.spin_angle + self.spin_speed * dt)
            .rem_euclid(std::f32::consts::TAU);
    }
}
