use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

/// Projection family created for the scene camera.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Perspective camera using `fovy`.
    #[default]
    Perspective,
    /// Orthographic camera using `frustum_height`.
    Orthographic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and starting pose.
pub struct CameraOptions {
    /// Projection family.
    #[schemars(title = "Projection")]
    pub projection: ProjectionKind,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Visible world height of an orthographic frustum at zoom 1.
    #[schemars(skip)]
    pub frustum_height: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Where the camera starts, looking at the origin.
    #[schemars(skip)]
    pub initial_position: Vec3,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionKind::Perspective,
            fovy: 75.0,
            frustum_height: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_position: Vec3::new(0.0, 30.0, 50.0),
        }
    }
}

impl CameraOptions {
    /// Build a camera for a viewport of the given aspect ratio, looking at
    /// the origin.
    #[must_use]
    pub fn build(&self, aspect: f32) -> Camera {
        let mut camera = match self.projection {
            ProjectionKind::Perspective => Camera::perspective(
                self.initial_position,
                self.fovy,
                aspect,
                self.znear,
                self.zfar,
            ),
            ProjectionKind::Orthographic => Camera::orthographic(
                self.initial_position,
                self.frustum_height,
                aspect,
                self.znear,
                self.zfar,
            ),
        };
        camera.look_at(Vec3::ZERO);
        camera
    }
}
