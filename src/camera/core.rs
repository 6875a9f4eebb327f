use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

/// Projection model of a [`Camera`].
///
/// The orbit controls know how to dolly and pan perspective and
/// orthographic projections. Anything else is carried through as
/// [`Projection::Other`], which disables those gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
        /// Viewport aspect ratio (width / height).
        aspect: f32,
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
    },
    /// Orthographic projection with an explicit frustum box.
    Orthographic {
        /// Left frustum plane.
        left: f32,
        /// Right frustum plane.
        right: f32,
        /// Top frustum plane.
        top: f32,
        /// Bottom frustum plane.
        bottom: f32,
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
    },
    /// A projection the orbit controls cannot dolly or pan (stereo rigs,
    /// cube cameras, custom matrices).
    Other(Mat4),
}

impl Projection {
    /// Whether this is a perspective projection.
    #[must_use]
    pub fn is_perspective(&self) -> bool {
        matches!(self, Self::Perspective { .. })
    }

    /// Whether this is an orthographic projection.
    #[must_use]
    pub fn is_orthographic(&self) -> bool {
        matches!(self, Self::Orthographic { .. })
    }
}

/// A camera transform: position, orientation, fixed up vector and zoom.
///
/// The camera looks down its local -Z axis. `zoom` scales the frustum and
/// is what the orbit controls change for orthographic cameras.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
    /// Up direction used for look-at and orbiting.
    pub up: Vec3,
    /// Frustum zoom factor.
    pub zoom: f32,
    /// Projection model.
    pub projection: Projection,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a perspective camera at `position` with identity orientation.
    #[must_use]
    pub fn perspective(
        position: Vec3,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self::with_projection(
            position,
            Projection::Perspective {
                fovy,
                aspect,
                znear,
                zfar,
            },
        )
    }

    /// Create an orthographic camera whose frustum is `height` tall and
    /// `height * aspect` wide.
    #[must_use]
    pub fn orthographic(
        position: Vec3,
        height: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let half_h = height * 0.5;
        let half_w = half_h * aspect;
        Self::with_projection(
            position,
            Projection::Orthographic {
                left: -half_w,
                right: half_w,
                top: half_h,
                bottom: -half_h,
                znear,
                zfar,
            },
        )
    }

    /// Create a camera with an arbitrary projection.
    #[must_use]
    pub fn with_projection(position: Vec3, projection: Projection) -> Self {
        let mut camera = Self {
            position,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            zoom: 1.0,
            projection,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Recompute the cached projection matrix. Call after changing
    /// `projection` or `zoom`.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = match self.projection {
            Projection::Perspective {
                fovy,
                aspect,
                znear,
                zfar,
            } => {
                let half = (fovy.to_radians() * 0.5).tan() / self.zoom;
                Mat4::perspective_rh_gl(
                    2.0 * half.atan(),
                    aspect,
                    znear,
                    zfar,
                )
            }
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                znear,
                zfar,
            } => {
                let dx = (right - left) / (2.0 * self.zoom);
                let dy = (top - bottom) / (2.0 * self.zoom);
                let cx = (right + left) * 0.5;
                let cy = (top + bottom) * 0.5;
                Mat4::orthographic_rh_gl(
                    cx - dx,
                    cx + dx,
                    cy - dy,
                    cy + dy,
                    znear,
                    zfar,
                )
            }
            Projection::Other(matrix) => matrix,
        };
    }

    /// Adjust the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        let new_aspect = width as f32 / height as f32;
        match &mut self.projection {
            Projection::Perspective { aspect, .. } => *aspect = new_aspect,
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                ..
            } => {
                let half_w = (*top - *bottom) * 0.5 * new_aspect;
                *left = -half_w;
                *right = half_w;
            }
            Projection::Other(_) => return,
        }
        self.update_projection_matrix();
    }

    /// Cached projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Camera-to-world transform.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Unit vector the camera is looking along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Rotate the camera so its -Z axis points at `target`, keeping `up`.
    pub fn look_at(&mut self, target: Vec3) {
        let mut z = self.position - target;
        if z.length_squared() == 0.0 {
            z = Vec3::Z;
        }
        let z = z.normalize();

        let mut x = self.up.cross(z);
        if x.length_squared() == 0.0 {
            // up and view direction are parallel; nudge the view direction
            let nudged = if self.up.z.abs() == 1.0 {
                Vec3::new(z.x + 0.0001, z.y, z.z)
            } else {
                Vec3::new(z.x, z.y, z.z + 0.0001)
            };
            x = self.up.cross(nudged.normalize());
        }
        let x = x.normalize();
        let y = z.cross(x);

        self.orientation =
            Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize();
    }

    /// Map a normalized-device-coordinate point back into world space.
    #[must_use]
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        let inv = self.world_matrix() * self.projection_matrix.inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, ndc.z, 1.0);
        if p.w == 0.0 {
            return p.truncate();
        }
        p.truncate() / p.w
    }
}
