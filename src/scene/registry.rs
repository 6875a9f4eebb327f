use glam::Vec3;
use rustc_hash::FxHashMap;

use super::body::{Body, BodyHandle};
use crate::error::OrreryError;

/// Which bodies move during [`BodyRegistry::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Every body orbits and spins.
    Orbiting,
    /// Orbital motion is suspended; only this body keeps spinning.
    SpinOnly(BodyHandle),
    /// Nothing moves.
    Frozen,
}

/// Arena of scene bodies addressed by [`BodyHandle`].
///
/// Bodies are stored in insertion order. A body's orbit parent must be
/// registered before it, so advancing in order always sees the parent's
/// updated position.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    by_name: FxHashMap<String, BodyHandle>,
}

impl BodyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body. Its position is placed on its orbit immediately.
    ///
    /// # Errors
    ///
    /// [`OrreryError::DuplicateBodyName`] if the name is taken,
    /// [`OrreryError::UnknownBody`] if the orbit parent is not registered.
    pub fn insert(&mut self, mut body: Body) -> Result<BodyHandle, OrreryError> {
        if self.by_name.contains_key(&body.name) {
            return Err(OrreryError::DuplicateBodyName(body.name));
        }
        if let Some(orbit) = &body.orbit {
            let center = match orbit.parent {
                Some(parent) => self.resolve(parent)?.position,
                None => Vec3::ZERO,
            };
            body.position = center + orbit.offset();
        }
        let handle = BodyHandle(self.bodies.len() as u32);
        let _ = self.by_name.insert(body.name.clone(), handle);
        log::debug!("registered body {:?} as #{}", body.name, handle.index());
        self.bodies.push(body);
        Ok(handle)
    }

    /// Body for a handle, if it belongs to this registry.
    #[must_use]
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.index())
    }

    /// Mutable body for a handle.
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.index())
    }

    /// Body for a handle, or [`OrreryError::UnknownBody`].
    ///
    /// # Errors
    ///
    /// Fails when the handle is out of range.
    pub fn resolve(&self, handle: BodyHandle) -> Result<&Body, OrreryError> {
        self.get(handle).ok_or(OrreryError::UnknownBody(handle))
    }

    /// Handle of the body with `name`.
    #[must_use]
    pub fn handle_of(&self, name: &str) -> Option<BodyHandle> {
        self.by_name.get(name).copied()
    }

    /// Handle of the body with `name`, or [`OrreryError::UnknownBodyName`].
    ///
    /// # Errors
    ///
    /// Fails when no body carries the name.
    pub fn resolve_name(&self, name: &str) -> Result<BodyHandle, OrreryError> {
        self.handle_of(name)
            .ok_or_else(|| OrreryError::UnknownBodyName(name.to_owned()))
    }

    /// All handles in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        (0..self.bodies.len()).map(|i| BodyHandle(i as u32))
    }

    /// All bodies with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (BodyHandle(i as u32), b))
    }

    /// Number of bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether no body is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Handles of currently visible bodies.
    #[must_use]
    pub fn visible(&self) -> Vec<BodyHandle> {
        self.iter()
            .filter(|(_, b)| b.visible)
            .map(|(h, _)| h)
            .collect()
    }

    /// Move bodies forward by `dt` seconds.
    pub fn advance(&mut self, dt: f32, motion: Motion) {
        match motion {
            Motion::Frozen => {}
            Motion::SpinOnly(handle) => {
                if let Some(body) = self.get_mut(handle) {
                    body.spin(dt);
                }
            }
            Motion::Orbiting => {
                for i in 0..self.bodies.len() {
                    let center = self.orbit_center(i);
                    let Some(body) = self.bodies.get_mut(i) else {
                        continue;
                    };
                    body.spin(dt);
                    if let (Some(orbit), Some(center)) =
                        (body.orbit.as_mut(), center)
                    {
                        orbit.advance(dt);
                        body.position = center + orbit.offset();
                    }
                }
            }
        }
    }

    fn orbit_center(&self, index: usize) -> Option<Vec3> {
        let orbit = self.bodies.get(index)?.orbit?;
        match orbit.parent {
            Some(parent) => self.get(parent).map(|p| p.position),
            None => Some(Vec3::ZERO),
        }
    }
}
