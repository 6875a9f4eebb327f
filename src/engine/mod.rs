//! Orbit camera controls and focus choreography for solar-system scenes.

pub mod command;
mod input;

use std::time::Duration;

use self::command::OrreryCommand;
use crate::animation::Tweener;
use crate::camera::{Camera, OrbitControls, Viewport};
use crate::error::OrreryError;
use crate::focus::{
    CameraDriver, CameraProperty, FocusEvent, FocusSequencer, FocusState,
    Stage,
};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::scene::{BodyHandle, BodyRegistry, SystemDescription};

/// The orrery: a body registry viewed through orbit controls, with animated
/// focus transitions.
///
/// # Frame loop
///
/// Forward input through [`handle_input`](Self::handle_input) as it
/// arrives, then call [`frame`](Self::frame) once per animation frame. The
/// frame pump advances body motion, runs focus flights, and updates the
/// orbit controls, in that order. Exactly one of the flight and the
/// controls writes the camera in any frame.
///
/// # Focus
///
/// [`focus`](Self::focus), [`unfocus`](Self::unfocus) and
/// [`cycle_focus`](Self::cycle_focus) start transitions; completion is
/// reported through [`drain_focus_events`](Self::drain_focus_events).
#[derive(Debug)]
pub struct Orrery {
    camera: Camera,
    controls: OrbitControls,
    registry: BodyRegistry,
    tweener: Tweener<CameraProperty>,
    sequencer: FocusSequencer,
    input: InputProcessor,
    options: Options,
}

impl Orrery {
    /// Build an orrery for `system` with a viewport of the given aspect
    /// ratio.
    ///
    /// # Errors
    ///
    /// Fails when the system description does not build.
    pub fn new(
        options: Options,
        system: &SystemDescription,
        aspect: f32,
    ) -> Result<Self, OrreryError> {
        let registry = system.build()?;
        let mut camera = options.camera.build(aspect);
        let mut controls =
            OrbitControls::new(&mut camera, &options.controls, options.limits);
        controls.save_state(&camera);
        Ok(Self {
            camera,
            controls,
            registry,
            tweener: Tweener::new(),
            sequencer: FocusSequencer::new(options.focus.clone()),
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            options,
        })
    }

    /// Build an orrery showing the built-in solar system.
    ///
    /// # Errors
    ///
    /// Never in practice; kept fallible like [`new`](Self::new).
    pub fn solar(options: Options, aspect: f32) -> Result<Self, OrreryError> {
        Self::new(options, &SystemDescription::solar(), aspect)
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The orbit controls.
    #[must_use]
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    /// Mutable orbit controls, for tweaking limits or speeds at runtime.
    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    /// The body registry.
    #[must_use]
    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    /// Current focus state.
    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.sequencer.state()
    }

    /// Who writes the camera this frame.
    #[must_use]
    pub fn camera_driver(&self) -> CameraDriver {
        self.sequencer.driver()
    }

    /// Options the orrery was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    // ── Viewport ────────────────────────────────────────────────────────

    /// Attach the controls to an element covering `viewport`.
    pub fn connect(&mut self, viewport: Option<Viewport>) {
        self.controls.connect(viewport);
    }

    /// Detach the controls.
    pub fn disconnect(&mut self) {
        self.controls.disconnect();
    }

    /// Adjust camera aspect and control viewport after a resize.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.width < 1.0 || viewport.height < 1.0 {
            return;
        }
        self.camera
            .resize(viewport.width as u32, viewport.height as u32);
        self.controls.set_viewport(viewport);
    }

    // ── Frame pump ──────────────────────────────────────────────────────

    /// Advance one frame of `dt` seconds. Returns whether the camera or any
    /// body moved.
    ///
    /// Errors are logged, never propagated, so a bad frame cannot stop the
    /// render loop.
    pub fn frame(&mut self, dt: f32) -> bool {
        match self.try_frame(dt) {
            Ok(changed) => changed,
            Err(e) => {
                log::error!("frame skipped: {e}");
                false
            }
        }
    }

    /// Advance one frame of `dt` seconds.
    ///
    /// # Errors
    ///
    /// [`OrreryError::InvalidFrameDelta`] for a negative or non-finite
    /// delta; nothing is advanced in that case.
    pub fn try_frame(&mut self, dt: f32) -> Result<bool, OrreryError> {
        let step = Duration::try_from_secs_f32(dt)
            .map_err(|_| OrreryError::InvalidFrameDelta(dt))?;

        let motion = self.sequencer.motion();
        self.registry.advance(dt, motion);
        let mut changed = dt > 0.0;

        let events = self.tweener.tick(step);
        if !events.is_empty() {
            changed = true;
            let (sequencer, mut stage) = self.split();
            for event in &events {
                sequencer.on_tween_event(event, &mut stage);
            }
        }

        match self.sequencer.driver() {
            CameraDriver::Controls => {
                changed |= self.controls.update(&mut self.camera, Some(dt));
            }
            CameraDriver::Tween => self.controls.discard_pending(),
        }
        Ok(changed)
    }

    // ── Focus ───────────────────────────────────────────────────────────

    /// Isolate `body` and fly to it.
    ///
    /// # Errors
    ///
    /// Unknown or hidden body; the scene is left untouched.
    pub fn focus(&mut self, body: BodyHandle) -> Result<(), OrreryError> {
        let (sequencer, mut stage) = self.split();
        sequencer.focus(body, &mut stage)
    }

    /// Isolate the body called `name` and fly to it.
    ///
    /// # Errors
    ///
    /// Unknown name or hidden body.
    pub fn focus_named(&mut self, name: &str) -> Result<(), OrreryError> {
        let body = self.registry.resolve_name(name)?;
        self.focus(body)
    }

    /// Fly back to the overview. No-op when already there.
    pub fn unfocus(&mut self) {
        let (sequencer, mut stage) = self.split();
        sequencer.unfocus(&mut stage);
    }

    /// Focus the next overview-visible body, or return to the overview
    /// after the last one.
    ///
    /// # Errors
    ///
    /// Propagates focus errors.
    pub fn cycle_focus(&mut self) -> Result<(), OrreryError> {
        let candidates = self.sequencer.candidates(&self.registry);
        let next = match self.sequencer.focused() {
            None => candidates.first().copied(),
            Some(current) => candidates
                .iter()
                .position(|&h| h == current)
                .and_then(|i| candidates.get(i + 1))
                .copied(),
        };
        match next {
            Some(body) => self.focus(body),
            None => {
                self.unfocus();
                Ok(())
            }
        }
    }

    /// Take all focus notifications since the last call.
    pub fn drain_focus_events(&mut self) -> Vec<FocusEvent> {
        self.sequencer.drain_events()
    }

    // ── Commands ────────────────────────────────────────────────────────

    /// Execute a command.
    ///
    /// # Errors
    ///
    /// Focus commands fail for unknown or hidden bodies.
    pub fn execute(&mut self, command: OrreryCommand) -> Result<(), OrreryError> {
        log::debug!("execute {command:?}");
        match command {
            OrreryCommand::Focus { body } => self.focus(body),
            OrreryCommand::FocusNamed { name } => self.focus_named(&name),
            OrreryCommand::ShowAll => {
                self.unfocus();
                Ok(())
            }
            OrreryCommand::CycleFocus => self.cycle_focus(),
            OrreryCommand::ToggleAutoRotate => {
                self.controls.auto_rotate = !self.controls.auto_rotate;
                log::info!("auto-rotate {}", self.controls.auto_rotate);
                Ok(())
            }
            OrreryCommand::ResetView => {
                if self.sequencer.driver() == CameraDriver::Controls {
                    self.controls.reset(&mut self.camera);
                } else {
                    log::debug!("reset ignored during focus flight");
                }
                Ok(())
            }
        }
    }

    fn split(&mut self) -> (&mut FocusSequencer, Stage<'_>) {
        (
            &mut self.sequencer,
            Stage {
                camera: &mut self.camera,
                controls: &mut self.controls,
                registry: &mut self.registry,
                tweener: &mut self.tweener,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn orrery() -> Orrery {
        let mut orrery = Orrery::solar(Options::default(), 1.0).unwrap();
        orrery.connect(Some(Viewport::sized(600.0, 600.0)));
        orrery
    }

    fn run(orrery: &mut Orrery, seconds: f32) {
        let frames = (seconds * 60.0).ceil() as usize;
        for _ in 0..frames {
            let _ = orrery.frame(1.0 / 60.0);
        }
    }

    #[test]
    fn starts_in_overview_looking_at_origin() {
        let orrery = orrery();
        assert_eq!(orrery.focus_state(), FocusState::Overview);
        assert_eq!(orrery.camera().position, Vec3::new(0.0, 30.0, 50.0));
        let forward = orrery.camera().forward();
        let expected = (-orrery.camera().position).normalize();
        assert!((forward - expected).length() < 1e-5);
    }

    #[test]
    fn bodies_orbit_in_overview() {
        let mut orrery = orrery();
        let earth = orrery.registry().handle_of("Earth").unwrap();
        let before = orrery.registry().get(earth).unwrap().position;
        assert!(orrery.frame(1.0));
        let after = orrery.registry().get(earth).unwrap().position;
        assert!(before.distance(after) > 0.1);
    }

    #[test]
    fn invalid_delta_is_reported_and_skipped() {
        let mut orrery = orrery();
        assert!(matches!(
            orrery.try_frame(-1.0),
            Err(OrreryError::InvalidFrameDelta(_))
        ));
        assert!(!orrery.frame(f32::NAN));
    }

    #[test]
    fn focus_flight_owns_camera_until_it_lands() {
        let mut orrery = orrery();
        orrery.focus_named("Jupiter").unwrap();
        assert_eq!(orrery.camera_driver(), CameraDriver::Tween);

        // input during the flight is dropped
        orrery.controls_mut().rotate_left(1.0);
        let _ = orrery.frame(1.0 / 60.0);
        assert_eq!(orrery.controls().pending().theta, 0.0);

        run(&mut orrery, 2.5);
        let jupiter = orrery.registry().handle_of("Jupiter").unwrap();
        assert_eq!(orrery.focus_state(), FocusState::Focused(jupiter));
        assert_eq!(orrery.camera_driver(), CameraDriver::Controls);
        assert_eq!(
            orrery.drain_focus_events(),
            vec![FocusEvent::Focused(jupiter)]
        );
        // camera sits at the default offset from the recentred body
        let offset = orrery.camera().position - orrery.controls().target;
        assert!((offset - Vec3::new(5.0, 3.0, 5.0)).length() < 1e-2);
    }

    #[test]
    fn focused_body_spins_while_others_stay_hidden() {
        let mut orrery = orrery();
        let saturn = orrery.registry().handle_of("Saturn").unwrap();
        orrery.focus(saturn).unwrap();
        run(&mut orrery, 3.0);
        let body = orrery.registry().get(saturn).unwrap();
        assert_eq!(body.position, Vec3::ZERO);
        assert!(body.spin_angle > 0.0);
        assert_eq!(orrery.registry().visible(), vec![saturn]);
    }

    #[test]
    fn cycle_focus_walks_bodies_then_returns() {
        let mut orrery = orrery();
        let sun = orrery.registry().handle_of("Sun").unwrap();
        let mercury = orrery.registry().handle_of("Mercury").unwrap();
        orrery.execute(OrreryCommand::CycleFocus).unwrap();
        assert_eq!(orrery.focus_state(), FocusState::Focusing(sun));
        orrery.execute(OrreryCommand::CycleFocus).unwrap();
        assert_eq!(orrery.focus_state(), FocusState::Focusing(mercury));

        let last = orrery.registry().handle_of("Moon").unwrap();
        orrery.focus(last).unwrap();
        orrery.execute(OrreryCommand::CycleFocus).unwrap();
        assert!(matches!(orrery.focus_state(), FocusState::Unfocusing(_)));
    }

    #[test]
    fn show_all_restores_overview() {
        let mut orrery = orrery();
        orrery.focus_named("Earth").unwrap();
        run(&mut orrery, 2.5);
        orrery.execute(OrreryCommand::ShowAll).unwrap();
        run(&mut orrery, 2.5);
        assert_eq!(orrery.focus_state(), FocusState::Overview);
        assert_eq!(orrery.registry().visible().len(), orrery.registry().len());
        assert!((orrery.camera().position - Vec3::new(0.0, 30.0, 50.0)).length() < 0.5);
    }

    #[test]
    fn unknown_names_fail_without_side_effects() {
        let mut orrery = orrery();
        let err = orrery
            .execute(OrreryCommand::FocusNamed {
                name: "Vulcan".into(),
            })
            .unwrap_err();
        assert!(matches!(err, OrreryError::UnknownBodyName(_)));
        assert_eq!(orrery.focus_state(), FocusState::Overview);
    }

    #[test]
    fn toggle_auto_rotate_flips_controls() {
        let mut orrery = orrery();
        let before = orrery.controls().auto_rotate;
        orrery.execute(OrreryCommand::ToggleAutoRotate).unwrap();
        assert_eq!(orrery.controls().auto_rotate, !before);
    }
}
