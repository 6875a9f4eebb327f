//! Focus / unfocus choreography.
//!
//! ```text
//!            focus(b)                 flight done
//! Overview ──────────▶ Focusing(b) ─────────────▶ Focused(b)
//!    ▲                    │  ▲                        │
//!    │ flight done        │  │ focus(c)               │ unfocus()
//!    │                    ▼  │                        ▼
//!    └──────────────── Unfocusing(b) ◀────────────────┘
//! ```
//!
//! Leaving the overview captures a [`FocusSnapshot`]; returning to it
//! restores that snapshot and discards it. A focus request while a flight
//! is running interrupts it: the flight is killed, the previously isolated
//! body is put back from the snapshot, and the new flight starts from the
//! live camera position. Requests are validated before anything is mutated.

use glam::Vec3;

use super::snapshot::FocusSnapshot;
use crate::animation::{EasingFunction, TweenEvent, TweenId, Tweener, Vec3Tween};
use crate::camera::{Camera, OrbitControls};
use crate::error::OrreryError;
use crate::options::FocusOptions;
use crate::scene::{BodyHandle, BodyRegistry, Motion};

/// Phase of the focus state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// All bodies visible and orbiting.
    #[default]
    Overview,
    /// Flying toward an isolated body.
    Focusing(BodyHandle),
    /// Camera parked at an isolated body; orbit gestures circle it.
    Focused(BodyHandle),
    /// Flying back to the overview pose; the body stays isolated until
    /// the flight lands.
    Unfocusing(BodyHandle),
}

/// Who writes the camera position this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraDriver {
    /// The orbit controls (`update` runs, input deltas apply).
    Controls,
    /// A focus flight (controls are bypassed, pending input is dropped).
    Tween,
}

/// Camera properties a focus flight animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraProperty {
    /// World-space eye position.
    Position,
}

/// Transition notifications, drained by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// The fly-to flight landed on this body.
    Focused(BodyHandle),
    /// The return flight landed and the scene was restored.
    Restored,
}

/// Mutable pieces of the world a transition touches.
pub struct Stage<'a> {
    /// Camera being flown.
    pub camera: &'a mut Camera,
    /// Orbit controls whose target follows the focus.
    pub controls: &'a mut OrbitControls,
    /// Bodies to isolate and restore.
    pub registry: &'a mut BodyRegistry,
    /// Tween engine running the flights.
    pub tweener: &'a mut Tweener<CameraProperty>,
}

/// Drives focus and unfocus transitions.
#[derive(Debug, Clone, Default)]
pub struct FocusSequencer {
    state: FocusState,
    snapshot: Option<FocusSnapshot>,
    options: FocusOptions,
    flight: Option<TweenId>,
    events: Vec<FocusEvent>,
}

impl FocusSequencer {
    /// Create a sequencer in the overview state.
    #[must_use]
    pub fn new(options: FocusOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Body being flown to or parked at.
    #[must_use]
    pub fn focused(&self) -> Option<BodyHandle> {
        match self.state {
            FocusState::Focusing(b) | FocusState::Focused(b) => Some(b),
            FocusState::Overview | FocusState::Unfocusing(_) => None,
        }
    }

    /// Body currently isolated in the scene, including during the return
    /// flight.
    #[must_use]
    pub fn isolated(&self) -> Option<BodyHandle> {
        match self.state {
            FocusState::Focusing(b)
            | FocusState::Focused(b)
            | FocusState::Unfocusing(b) => Some(b),
            FocusState::Overview => None,
        }
    }

    /// Who owns the camera right now.
    #[must_use]
    pub fn driver(&self) -> CameraDriver {
        if self.flight.is_some() {
            CameraDriver::Tween
        } else {
            CameraDriver::Controls
        }
    }

    /// How scene bodies should move this frame.
    #[must_use]
    pub fn motion(&self) -> Motion {
        self.isolated().map_or(Motion::Orbiting, Motion::SpinOnly)
    }

    /// Snapshot held while away from the overview.
    #[must_use]
    pub fn snapshot(&self) -> Option<&FocusSnapshot> {
        self.snapshot.as_ref()
    }

    /// Focus options in use.
    #[must_use]
    pub fn options(&self) -> &FocusOptions {
        &self.options
    }

    /// Replace the focus options; running flights keep their old timing.
    pub fn set_options(&mut self, options: FocusOptions) {
        self.options = options;
    }

    /// Take all pending notifications.
    pub fn drain_events(&mut self) -> Vec<FocusEvent> {
        std::mem::take(&mut self.events)
    }

    /// Bodies that can be focused: those visible in the overview.
    #[must_use]
    pub fn candidates(&self, registry: &BodyRegistry) -> Vec<BodyHandle> {
        match &self.snapshot {
            Some(snapshot) => snapshot
                .iter()
                .filter(|r| r.visible)
                .map(|r| r.handle)
                .collect(),
            None => registry.visible(),
        }
    }

    /// Isolate `body` and fly the camera to it.
    ///
    /// Focusing the body already being focused is a no-op.
    ///
    /// # Errors
    ///
    /// [`OrreryError::UnknownBody`] for a foreign handle,
    /// [`OrreryError::BodyHidden`] for a body hidden in the overview. On
    /// error nothing is changed.
    pub fn focus(
        &mut self,
        body: BodyHandle,
        stage: &mut Stage<'_>,
    ) -> Result<(), OrreryError> {
        let target = stage.registry.resolve(body)?;
        let overview_visible = self
            .snapshot
            .as_ref()
            .and_then(|s| s.record(body))
            .map_or(target.visible, |r| r.visible);
        if !overview_visible {
            return Err(OrreryError::BodyHidden(target.name.clone()));
        }
        if self.focused() == Some(body) {
            log::debug!("focus({}) ignored: already focused", target.name);
            return Ok(());
        }
        let name = target.name.clone();
        let offset = target.focus_offset.unwrap_or(self.options.offset);

        // validated; from here on nothing fails
        let _ = stage.tweener.kill_tweens_of(CameraProperty::Position);
        self.flight = None;
        if let Some(snapshot) = &self.snapshot {
            if let Some(prev) = self.isolated() {
                log::debug!("interrupting focus on #{}", prev.index());
                let _ = snapshot.restore_body(stage.registry, prev);
            }
        } else {
            self.snapshot = Some(FocusSnapshot::capture(stage.registry));
        }

        isolate(stage.registry, body);
        let center = stage
            .registry
            .get(body)
            .map_or(Vec3::ZERO, |b| b.position);

        stage.controls.target = center;
        stage.controls.discard_pending();
        self.start_flight(
            stage,
            center + offset,
            self.options.duration(),
        );
        self.state = FocusState::Focusing(body);
        log::info!("focusing {name}");
        Ok(())
    }

    /// Fly back to the overview pose, restoring the scene on landing.
    ///
    /// No-op in the overview or while already returning.
    pub fn unfocus(&mut self, stage: &mut Stage<'_>) {
        let body = match self.state {
            FocusState::Overview | FocusState::Unfocusing(_) => return,
            FocusState::Focusing(b) | FocusState::Focused(b) => b,
        };
        let _ = stage.tweener.kill_tweens_of(CameraProperty::Position);
        stage.controls.target = Vec3::ZERO;
        stage.controls.discard_pending();
        self.start_flight(
            stage,
            self.options.overview_position,
            self.options.return_duration(),
        );
        self.state = FocusState::Unfocusing(body);
        log::info!("returning to overview");
    }

    /// Apply a tween event. Events of flights this sequencer no longer
    /// owns are ignored.
    pub fn on_tween_event(
        &mut self,
        event: &TweenEvent<CameraProperty>,
        stage: &mut Stage<'_>,
    ) {
        let (id, value, done) = match *event {
            TweenEvent::Updated { id, value, .. } => (id, value, false),
            TweenEvent::Completed { id, value, .. } => (id, value, true),
        };
        if self.flight != Some(id) {
            return;
        }
        stage.camera.position = value;
        stage.camera.look_at(stage.controls.target);
        if done {
            self.flight = None;
            self.land(stage);
        }
    }

    fn start_flight(
        &mut self,
        stage: &mut Stage<'_>,
        destination: Vec3,
        duration: std::time::Duration,
    ) {
        let tween = Vec3Tween::new(
            stage.camera.position,
            destination,
            duration,
            EasingFunction::from(self.options.easing),
        );
        self.flight =
            Some(stage.tweener.to(CameraProperty::Position, tween));
    }

    fn land(&mut self, stage: &mut Stage<'_>) {
        match self.state {
            FocusState::Focusing(body) => {
                self.state = FocusState::Focused(body);
                self.events.push(FocusEvent::Focused(body));
                log::info!("focused #{}", body.index());
            }
            FocusState::Unfocusing(_) => {
                if let Some(snapshot) = self.snapshot.take() {
                    snapshot.restore(stage.registry);
                }
                self.state = FocusState::Overview;
                self.events.push(FocusEvent::Restored);
                log::info!("overview restored");
            }
            FocusState::Overview | FocusState::Focused(_) => {}
        }
    }
}

/// Hide every body except `body` and move it to the origin.
fn isolate(registry: &mut BodyRegistry, body: BodyHandle) {
    let handles: Vec<BodyHandle> = registry.handles().collect();
    for handle in handles {
        if let Some(b) = registry.get_mut(handle) {
            b.visible = handle == body;
            if handle == body {
                b.position = Vec3::ZERO;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::options::{ControlOptions, OrbitLimits};
    use crate::scene::SystemDescription;

    struct World {
        camera: Camera,
        controls: OrbitControls,
        registry: BodyRegistry,
        tweener: Tweener<CameraProperty>,
        sequencer: FocusSequencer,
    }

    impl World {
        fn new() -> Self {
            let mut camera = Camera::perspective(
                Vec3::new(0.0, 30.0, 50.0),
                75.0,
                1.0,
                0.1,
                1000.0,
            );
            let controls = OrbitControls::new(
                &mut camera,
                &ControlOptions::default(),
                OrbitLimits::default(),
            );
            let mut registry = SystemDescription::solar().build().unwrap();
            let pluto = crate::scene::Body::new("Pluto", 0.2);
            let pluto = registry.insert(pluto).unwrap();
            registry.get_mut(pluto).unwrap().visible = false;
            Self {
                camera,
                controls,
                registry,
                tweener: Tweener::new(),
                sequencer: FocusSequencer::new(FocusOptions::default()),
            }
        }

        fn handle(&self, name: &str) -> BodyHandle {
            self.registry.handle_of(name).unwrap()
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

        fn focus(&mut self, body: BodyHandle) -> Result<(), OrreryError> {
            let (sequencer, mut stage) = self.split();
            sequencer.focus(body, &mut stage)
        }

        fn unfocus(&mut self) {
            let (sequencer, mut stage) = self.split();
            sequencer.unfocus(&mut stage);
        }

        fn tick(&mut self, dt: Duration) {
            let events = self.tweener.tick(dt);
            let (sequencer, mut stage) = self.split();
            for event in &events {
                sequencer.on_tween_event(event, &mut stage);
            }
        }

        fn settle(&mut self) {
            for _ in 0..200 {
                self.tick(Duration::from_millis(16));
            }
        }

        fn visible_count(&self) -> usize {
            self.registry.visible().len()
        }
    }

    #[test]
    fn focus_then_unfocus_restores_scene_exactly() {
        let mut world = World::new();
        let before = FocusSnapshot::capture(&world.registry);
        let earth = world.handle("Earth");

        world.focus(earth).unwrap();
        world.settle();
        assert_eq!(world.sequencer.state(), FocusState::Focused(earth));
        world.unfocus();
        world.settle();

        assert_eq!(world.sequencer.state(), FocusState::Overview);
        assert_eq!(FocusSnapshot::capture(&world.registry), before);
        assert!(world.sequencer.snapshot().is_none());
        assert_eq!(
            world.sequencer.drain_events(),
            vec![FocusEvent::Focused(earth), FocusEvent::Restored]
        );
    }

    #[test]
    fn flight_lands_at_offset_from_focused_body() {
        let mut world = World::new();
        let mars = world.handle("Mars");
        world.focus(mars).unwrap();
        assert_eq!(world.sequencer.driver(), CameraDriver::Tween);
        assert_eq!(world.controls.target, Vec3::ZERO);

        world.settle();
        let body_pos = world.registry.get(mars).unwrap().position;
        assert!((world.camera.position - (body_pos + Vec3::new(5.0, 3.0, 5.0))).length() < 1e-4);
        assert_eq!(world.controls.target, body_pos);
        assert_eq!(world.sequencer.driver(), CameraDriver::Controls);
    }

    #[test]
    fn only_focused_body_is_visible() {
        let mut world = World::new();
        let venus = world.handle("Venus");
        world.focus(venus).unwrap();
        assert_eq!(world.visible_count(), 1);
        world.tick(Duration::from_millis(500));
        assert_eq!(world.visible_count(), 1);
        world.settle();
        assert_eq!(world.registry.visible(), vec![venus]);
    }

    #[test]
    fn refocus_mid_flight_keeps_original_snapshot() {
        let mut world = World::new();
        let before = FocusSnapshot::capture(&world.registry);
        let earth = world.handle("Earth");
        let saturn = world.handle("Saturn");

        world.focus(earth).unwrap();
        world.tick(Duration::from_millis(700));
        world.focus(saturn).unwrap();
        assert_eq!(world.registry.visible(), vec![saturn]);
        // earth went back to where it was
        assert_eq!(
            world.registry.get(earth).unwrap().position,
            before.record(earth).unwrap().position
        );
        assert_eq!(world.tweener.len(), 1);

        world.settle();
        assert_eq!(
            world.sequencer.drain_events(),
            vec![FocusEvent::Focused(saturn)]
        );
        world.unfocus();
        world.settle();
        assert_eq!(FocusSnapshot::capture(&world.registry), before);
    }

    #[test]
    fn focus_during_return_flight_restarts() {
        let mut world = World::new();
        let earth = world.handle("Earth");
        let moon = world.handle("Moon");
        world.focus(earth).unwrap();
        world.settle();
        world.unfocus();
        world.tick(Duration::from_millis(300));
        world.focus(moon).unwrap();
        assert_eq!(world.sequencer.state(), FocusState::Focusing(moon));
        world.settle();
        assert_eq!(world.sequencer.state(), FocusState::Focused(moon));
        assert_eq!(world.visible_count(), 1);
    }

    #[test]
    fn invalid_requests_change_nothing() {
        let mut world = World::new();
        let before = FocusSnapshot::capture(&world.registry);
        let pluto = world.handle("Pluto");

        assert!(matches!(
            world.focus(pluto),
            Err(OrreryError::BodyHidden(n)) if n == "Pluto"
        ));
        let foreign = {
            let mut other = BodyRegistry::new();
            for i in 0..20 {
                let _ = other.insert(crate::scene::Body::new(format!("b{i}"), 1.0));
            }
            other.handle_of("b19").unwrap()
        };
        assert!(matches!(world.focus(foreign), Err(OrreryError::UnknownBody(_))));

        assert_eq!(world.sequencer.state(), FocusState::Overview);
        assert_eq!(FocusSnapshot::capture(&world.registry), before);
        assert!(world.tweener.is_empty());
    }

    #[test]
    fn repeated_focus_and_idle_unfocus_are_noops() {
        let mut world = World::new();
        world.unfocus();
        assert_eq!(world.sequencer.state(), FocusState::Overview);

        let earth = world.handle("Earth");
        world.focus(earth).unwrap();
        world.tick(Duration::from_millis(100));
        let camera_before = world.camera.position;
        world.focus(earth).unwrap();
        assert_eq!(world.camera.position, camera_before);
        assert_eq!(world.sequencer.state(), FocusState::Focusing(earth));
    }

    #[test]
    fn body_offset_overrides_default() {
        let mut world = World::new();
        let moon = world.handle("Moon");
        world.focus(moon).unwrap();
        world.settle();
        assert!((world.camera.position - Vec3::new(2.0, 1.0, 2.0)).length() < 1e-4);
    }
}
