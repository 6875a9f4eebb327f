//! Standalone interactive window backed by winit.
//!
//! The window carries no renderer: it runs the orrery's frame pump against
//! real window input and reports the focus state, camera distance and FPS
//! in its title bar, which is enough to drive and inspect the controls from
//! a desktop session.
//!
//! ```no_run
//! # use orrery::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("Orrery")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    camera::Viewport,
    error::OrreryError,
    focus::{FocusEvent, FocusState},
    input::winit_adapter::WinitAdapter,
    options::Options,
    scene::SystemDescription,
    util::frame_timing::FrameTiming,
    Orrery,
};

/// How often the title bar is refreshed.
const TITLE_INTERVAL: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
#[derive(Debug)]
pub struct ViewerBuilder {
    options: Option<Options>,
    system: Option<SystemDescription>,
    title: String,
    target_fps: u32,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            system: None,
            title: "Orrery".into(),
            target_fps: 60,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Show this system instead of the built-in solar system.
    #[must_use]
    pub fn with_system(mut self, system: SystemDescription) -> Self {
        self.system = Some(system);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Cap the frame rate (0 = unlimited).
    #[must_use]
    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            system: self.system.unwrap_or_else(SystemDescription::solar),
            title: self.title,
            target_fps: self.target_fps,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving an [`Orrery`].
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
#[derive(Debug)]
pub struct Viewer {
    options: Options,
    system: SystemDescription,
    title: String,
    target_fps: u32,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// [`OrreryError::Viewer`] when the event loop cannot start or exits
    /// abnormally.
    pub fn run(self) -> Result<(), OrreryError> {
        let event_loop =
            EventLoop::new().map_err(|e| OrreryError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            orrery: None,
            adapter: WinitAdapter::new(),
            timing: FrameTiming::new(self.target_fps),
            last_title: Instant::now(),
            options: Some(self.options),
            system: self.system,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| OrreryError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    orrery: Option<Orrery>,
    adapter: WinitAdapter,
    timing: FrameTiming,
    last_title: Instant,
    options: Option<Options>,
    system: SystemDescription,
    title: String,
}

fn viewport_of(inner: winit::dpi::PhysicalSize<u32>) -> Viewport {
    Viewport::sized(inner.width.max(1) as f32, inner.height.max(1) as f32)
}

impl ViewerApp {
    fn frame(&mut self) {
        let (Some(window), Some(orrery)) = (&self.window, &mut self.orrery)
        else {
            return;
        };
        if !self.timing.should_render() {
            window.request_redraw();
            return;
        }

        let dt = self.timing.end_frame();
        let _ = orrery.frame(dt);

        for event in orrery.drain_focus_events() {
            match event {
                FocusEvent::Focused(handle) => {
                    let name = orrery
                        .registry()
                        .get(handle)
                        .map_or("?", |body| body.name.as_str());
                    log::info!("focused on {name}");
                }
                FocusEvent::Restored => log::info!("back to overview"),
            }
        }

        let now = Instant::now();
        if now.duration_since(self.last_title) >= TITLE_INTERVAL {
            let fps = self.timing.fps();
            window.set_title(&status_line(&self.title, orrery, fps));
            self.last_title = now;
        }
        window.request_redraw();
    }
}

fn status_line(prefix: &str, orrery: &Orrery, fps: f32) -> String {
    let name = |handle| {
        orrery
            .registry()
            .get(handle)
            .map_or_else(String::new, |body| body.name.clone())
    };
    let state = match orrery.focus_state() {
        FocusState::Overview => "overview".to_owned(),
        FocusState::Focusing(h) => format!("flying to {}", name(h)),
        FocusState::Focused(h) => name(h),
        FocusState::Unfocusing(h) => format!("leaving {}", name(h)),
    };
    let distance = orrery.controls().distance(orrery.camera());
    format!("{prefix} | {state} | r={distance:.1} | {fps:.0} fps")
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.5) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.5) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let viewport = viewport_of(window.inner_size());
        let options = self.options.take().unwrap_or_default();
        let mut orrery = match Orrery::new(
            options,
            &self.system,
            viewport.width / viewport.height,
        ) {
            Ok(o) => o,
            Err(e) => {
                log::error!("Failed to build the orrery: {e}");
                event_loop.exit();
                return;
            }
        };
        orrery.connect(Some(viewport));
        log::info!(
            "{} bodies, press Tab to cycle focus and Escape to return",
            orrery.registry().len()
        );

        window.request_redraw();
        self.window = Some(window);
        self.orrery = Some(orrery);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            if let Some(orrery) = &mut self.orrery {
                orrery.disconnect();
            }
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(orrery) = &mut self.orrery {
                    orrery.resize(viewport_of(size));
                }
            }
            WindowEvent::RedrawRequested => self.frame(),
            other => {
                let Some(input) = self.adapter.translate(&other) else {
                    return;
                };
                if let Some(orrery) = &mut self.orrery {
                    let response = orrery.handle_input(&input);
                    log::trace!("{input:?} -> {response:?}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_names_the_focused_body() {
        let mut orrery = Orrery::solar(Options::default(), 1.5).unwrap();
        let line = status_line("Orrery", &orrery, 59.6);
        assert!(line.starts_with("Orrery | overview |"));
        assert!(line.ends_with("60 fps"));

        orrery.focus_named("Mars").unwrap();
        assert!(status_line("Orrery", &orrery, 60.0).contains("flying to Mars"));
    }
}
