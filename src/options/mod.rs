//! Centralized controller/choreography options with TOML preset support.
//!
//! All tweakable settings (camera, orbit controls, limits, focus flights,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! host can ship presets next to its scene descriptions.

mod camera;
mod controls;
mod focus;
mod keybindings;
mod limits;

use std::path::Path;

pub use camera::{CameraOptions, ProjectionKind};
pub use controls::ControlOptions;
pub use focus::{FlightEasing, FocusOptions};
pub use keybindings::KeybindingOptions;
pub use limits::OrbitLimits;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and starting pose.
    pub camera: CameraOptions,
    /// Orbit control behaviour.
    pub controls: ControlOptions,
    /// Orbit clamping bounds.
    #[schemars(skip)]
    pub limits: OrbitLimits,
    /// Focus / unfocus flights.
    pub focus: FocusOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
damping_factor = 0.1

[limits]
min_distance = 2.0
max_distance = 80.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.controls.damping_factor, 0.1);
        assert_eq!(opts.limits.max_distance, 80.0);
        // Everything else should be default
        assert!(opts.controls.enable_damping);
        assert_eq!(opts.limits.max_polar_angle, std::f32::consts::PI);
        assert_eq!(opts.focus, FocusOptions::default());
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[controls\n").unwrap_err();
        assert!(matches!(err, OrreryError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::ShowAll));
        assert_eq!(opts.keybindings.lookup("Tab"), Some(KeyAction::CycleFocus));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "orrery-options-{}",
            std::process::id()
        ));
        let path = dir.join("wide.toml");
        let mut opts = Options::default();
        opts.camera.fovy = 90.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.camera.fovy, 90.0);
        assert_eq!(Options::list_presets(&dir), vec!["wide".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("focus"));

        // Skipped sections should be absent
        assert!(!props.contains_key("limits"));
        assert!(!props.contains_key("keybindings"));

        // Controls should have exposed fields but not skipped ones
        let controls = &props["controls"]["properties"];
        assert!(controls.get("damping_factor").is_some());
        assert!(controls.get("auto_rotate").is_some());
        assert!(controls.get("mouse_buttons").is_none());
        assert!(controls.get("key_pan_speed").is_none());
    }
}
