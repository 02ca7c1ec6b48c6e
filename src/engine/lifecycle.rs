//! Launch/stop lifecycle and the frame loop driver
//!
//! The controller is the only holder of the running [`Session`]. It talks to
//! the outside world through two seams: a [`FrameScheduler`] that re-invokes
//! [`Lifecycle::on_tick`], and a [`Host`] that owns the overlay, the drawing
//! surface, listeners and theme lookup.

use super::layout::{self, Viewport};
use super::session::{NextTick, Session};
use crate::error::LaunchError;
use crate::renderer::{self, Surface, Theme};
use crate::sim::Phase;

/// Cooperative scheduling primitive behind the frame loop
pub trait FrameScheduler {
    /// Call back on the next display refresh
    fn request_frame(&mut self);
    /// Call back once after `delay_ms`
    fn request_wakeup(&mut self, delay_ms: f64);
    /// Drop any pending callback; a no-op when nothing is pending
    fn cancel(&mut self);
}

/// Everything the engine needs from the host page
pub trait Host {
    type Surface: Surface;

    fn viewport(&self) -> Viewport;
    /// Current palette, read fresh on every paint
    fn theme(&self) -> Theme;
    /// Create or reuse the overlay and size its surface
    fn show_overlay(&mut self, width: u32, height: u32) -> Result<(), LaunchError>;
    fn resize_surface(&mut self, width: u32, height: u32);
    fn surface(&mut self) -> Option<&mut Self::Surface>;
    fn attach_listeners(&mut self);
    fn detach_listeners(&mut self);
    fn hide_overlay(&mut self);
    /// Exit signal: give the page its window shell back
    fn restore_shell(&mut self);
}

pub struct Lifecycle<S: FrameScheduler, H: Host> {
    scheduler: S,
    host: H,
    session: Option<Session>,
}

impl<S: FrameScheduler, H: Host> Lifecycle<S, H> {
    pub fn new(scheduler: S, host: H) -> Self {
        Self {
            scheduler,
            host,
            session: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Start a fresh match at `now` (ms); does nothing if one is already running
    ///
    /// On error nothing is left behind: no session, no listeners, no frame.
    pub fn launch(&mut self, now: f64, seed: u64) -> Result<(), LaunchError> {
        if self.session.is_some() {
            log::debug!("Launch ignored, a match is already running");
            return Ok(());
        }

        let size = layout::court_size(&self.host.viewport());
        self.host.show_overlay(size.width, size.height)?;

        self.session = Some(Session::new(seed, size.into(), now));
        self.host.attach_listeners();
        self.scheduler.request_frame();

        log::info!(
            "Pong launched on a {}x{} court (seed {})",
            size.width,
            size.height,
            seed
        );
        Ok(())
    }

    /// One scheduled callback: step, paint, then schedule the next one
    pub fn on_tick(&mut self, now: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let step = session.step(now);
        if step.paint {
            let theme = self.host.theme();
            if let Some(surface) = self.host.surface() {
                session.paint(now, &theme, surface);
            }
        }

        match step.next {
            NextTick::Frame => self.scheduler.request_frame(),
            NextTick::WakeAfter(ms) => self.scheduler.request_wakeup(ms),
            NextTick::Halt => self.stop(),
        }
    }

    /// Re-layout after a viewport change
    pub fn resize(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let size = layout::court_size(&self.host.viewport());
        self.host.resize_surface(size.width, size.height);
        session.resize(size.into());

        // Resizing wipes the surface and an ended match gets no more frames
        if let Phase::Ended { outcome, .. } = session.phase() {
            let theme = self.host.theme();
            if let Some(surface) = self.host.surface() {
                renderer::draw_game_over(outcome, &theme, surface);
            }
        }
    }

    pub fn pointer_moved(&mut self, court_x: f32) {
        if let Some(session) = self.session.as_mut() {
            session.pointer_moved(court_x);
        }
    }

    pub fn key_changed(&mut self, key: &str, pressed: bool) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.key_changed(key, pressed))
    }

    /// Tear down: cancel the loop, detach listeners, hide, hand the shell back
    ///
    /// Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.scheduler.cancel();
        let Some(session) = self.session.take() else {
            return;
        };

        self.host.detach_listeners();
        self.host.hide_overlay();
        self.host.restore_shell();

        let state = session.state();
        log::info!(
            "Pong stopped after {} frames ({} - {})",
            state.frame,
            state.score.opponent,
            state.score.player
        );
    }
}
