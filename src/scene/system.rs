//! Declarative scene content.
//!
//! A [`SystemDescription`] lists bodies and their circular orbits and can be
//! loaded from TOML. Bodies without an explicit starting phase get a random
//! one from a seeded RNG, so a given description always lays out the same
//! way.

use std::f32::consts::TAU;
use std::path::Path;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::body::{Body, CircularOrbit};
use super::registry::BodyRegistry;
use crate::error::OrreryError;

/// One body of a [`SystemDescription`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyDescription {
    /// Unique name.
    pub name: String,
    /// Visual radius.
    pub size: f32,
    /// Orbit radius; zero keeps the body fixed at its orbit center.
    pub distance: f32,
    /// Orbital angular speed in radians per second.
    pub orbit_speed: f32,
    /// Self-rotation speed in radians per second.
    pub spin_speed: f32,
    /// Name of the body this one orbits; the origin when absent.
    pub parent: Option<String>,
    /// Starting orbit angle; random when absent.
    pub phase: Option<f32>,
    /// Camera offset when focused, overriding the global default.
    pub focus_offset: Option<Vec3>,
}

impl Default for BodyDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            size: 1.0,
            distance: 0.0,
            orbit_speed: 0.0,
            spin_speed: 0.0,
            parent: None,
            phase: None,
            focus_offset: None,
        }
    }
}

impl BodyDescription {
    fn planet(name: &str, size: f32, distance: f32, period_secs: f32) -> Self {
        Self {
            name: name.to_owned(),
            size,
            distance,
            orbit_speed: TAU / period_secs,
            spin_speed: 0.5,
            ..Self::default()
        }
    }
}

/// A list of bodies plus the RNG seed for unspecified phases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SystemDescription {
    /// Seed for random starting phases.
    pub seed: u64,
    /// Bodies in registration order; parents must precede children.
    #[serde(rename = "body")]
    pub bodies: Vec<BodyDescription>,
}

impl Default for SystemDescription {
    fn default() -> Self {
        Self::solar()
    }
}

impl SystemDescription {
    /// The built-in solar system: a static sun, eight planets and the moon.
    #[must_use]
    pub fn solar() -> Self {
        let mut bodies = vec![BodyDescription {
            name: "Sun".to_owned(),
            size: 5.0,
            spin_speed: 0.1,
            focus_offset: Some(Vec3::new(12.0, 6.0, 12.0)),
            ..BodyDescription::default()
        }];
        bodies.extend([
            BodyDescription::planet("Mercury", 0.4, 10.0, 24.0),
            BodyDescription::planet("Venus", 0.9, 15.0, 40.0),
            BodyDescription::planet("Earth", 1.0, 20.0, 60.0),
            BodyDescription::planet("Mars", 0.5, 25.0, 90.0),
            BodyDescription::planet("Jupiter", 2.5, 35.0, 180.0),
            BodyDescription::planet("Saturn", 2.0, 45.0, 260.0),
            BodyDescription::planet("Uranus", 1.5, 55.0, 360.0),
            BodyDescription::planet("Neptune", 1.4, 65.0, 480.0),
        ]);
        bodies.push(BodyDescription {
            name: "Moon".to_owned(),
            size: 0.27,
            distance: 2.0,
            orbit_speed: TAU / 8.0,
            parent: Some("Earth".to_owned()),
            focus_offset: Some(Vec3::new(2.0, 1.0, 2.0)),
            ..BodyDescription::default()
        });
        Self { seed: 7, bodies }
    }

    /// Parse a description from TOML (`[[body]]` tables).
    ///
    /// # Errors
    ///
    /// [`OrreryError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Load a description from a TOML file.
    ///
    /// # Errors
    ///
    /// I/O failure or malformed TOML.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build a registry from this description.
    ///
    /// # Errors
    ///
    /// Duplicate names, or a parent that is not listed before its child.
    pub fn build(&self) -> Result<BodyRegistry, OrreryError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut registry = BodyRegistry::new();
        for desc in &self.bodies {
            let parent = desc
                .parent
                .as_deref()
                .map(|name| registry.resolve_name(name))
                .transpose()?;
            // draw for every body so adding a phase to one body does not
            // reshuffle the rest
            let random_phase: f32 = rng.random_range(0.0..TAU);

            let mut body = Body::new(desc.name.clone(), desc.size)
                .with_spin(desc.spin_speed);
            if desc.distance > 0.0 || parent.is_some() {
                body = body.with_orbit(CircularOrbit {
                    parent,
                    radius: desc.distance,
                    angular_speed: desc.orbit_speed,
                    phase: desc.phase.unwrap_or(random_phase),
                });
            }
            if let Some(offset) = desc.focus_offset {
                body = body.with_focus_offset(offset);
            }
            let _ = registry.insert(body)?;
        }
        log::info!("built system with {} bodies", registry.len());
        Ok(registry)
    }
}
