//! One running match
//!
//! A session owns the game state and the pending input intents. It applies the
//! time-driven phase changes (countdown expiry, banner timeout) and runs the
//! per-frame simulation step; the lifecycle decides how the next step is
//! scheduled.

use super::layout::CourtSize;
use crate::consts::GAME_OVER_DELAY_MS;
use crate::renderer::{self, Surface, Theme};
use crate::sim::{Court, FrameEvents, GameState, Intents, Phase, tick};

/// What the frame loop should do after a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NextTick {
    /// Run again on the next display refresh
    Frame,
    /// Sleep, then run once more after this many ms
    WakeAfter(f64),
    /// Session reached `Stopped`; tear down
    Halt,
}

/// Result of one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub next: NextTick,
    pub events: FrameEvents,
    /// Whether this step produced something to paint
    pub paint: bool,
}

impl From<CourtSize> for Court {
    fn from(size: CourtSize) -> Self {
        Court::new(size.width as f32, size.height as f32)
    }
}

pub struct Session {
    state: GameState,
    intents: Intents,
}

impl Session {
    /// Fresh match on `court`, counting down from `now` (ms)
    pub fn new(seed: u64, court: Court, now: f64) -> Self {
        Self {
            state: GameState::new(seed, court, now),
            intents: Intents::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios and tooling
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn intents(&self) -> &Intents {
        &self.intents
    }

    /// Latest pointer position in court units
    pub fn pointer_moved(&mut self, court_x: f32) {
        if self.state.phase.is_live() {
            self.intents.pointer_at(court_x);
        }
    }

    /// Returns false for keys the game doesn't use
    pub fn key_changed(&mut self, key: &str, pressed: bool) -> bool {
        self.intents.key_changed(key, pressed)
    }

    pub fn resize(&mut self, court: Court) {
        log::debug!("Court resized to {}x{}", court.width, court.height);
        self.state.resize(court);
    }

    /// Apply wall-clock phase transitions due at `now`
    fn advance_clock(&mut self, now: f64) {
        match self.state.phase {
            Phase::Countdown { until } if now >= until => {
                self.state.phase = Phase::Playing;
                log::info!("Countdown over, serving");
            }
            Phase::Ended { outcome, since } if now >= since + GAME_OVER_DELAY_MS => {
                self.state.phase = Phase::Stopped;
                log::info!(
                    "Match over: {} ({} - {})",
                    outcome.message(),
                    self.state.score.opponent,
                    self.state.score.player
                );
            }
            _ => {}
        }
    }

    /// Run one frame step at `now` without painting
    pub fn step(&mut self, now: f64) -> Step {
        self.advance_clock(now);

        match self.state.phase {
            Phase::Stopped => {
                return Step {
                    next: NextTick::Halt,
                    events: FrameEvents::default(),
                    paint: false,
                };
            }
            Phase::Ended { since, .. } => {
                // Woken early; the banner is already up
                return Step {
                    next: NextTick::WakeAfter(since + GAME_OVER_DELAY_MS - now),
                    events: FrameEvents::default(),
                    paint: false,
                };
            }
            Phase::Countdown { .. } | Phase::Playing => {}
        }

        let events = tick(&mut self.state, &mut self.intents, now);
        let next = if events.ended.is_some() {
            self.intents.clear();
            NextTick::WakeAfter(GAME_OVER_DELAY_MS)
        } else {
            NextTick::Frame
        };

        Step {
            next,
            events,
            paint: true,
        }
    }

    /// Paint the current state
    pub fn paint(&self, now: f64, theme: &Theme, surface: &mut impl Surface) {
        renderer::render(&self.state, now, theme, surface);
    }

    /// Step, then paint if the step asks for it
    pub fn frame(&mut self, now: f64, theme: &Theme, surface: &mut impl Surface) -> Step {
        let step = self.step(now);
        if step.paint {
            self.paint(now, theme, surface);
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::Outcome;

    #[test]
    fn test_countdown_expires_at_deadline() {
        let mut session = Session::new(1, Court::new(800.0, 500.0), 100.0);
        session.step(3099.0);
        assert!(matches!(session.phase(), Phase::Countdown { .. }));
        session.step(3100.0);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn test_ended_waits_then_halts() {
        let mut session = Session::new(1, Court::new(800.0, 500.0), 0.0);
        session.state_mut().phase = Phase::Ended {
            outcome: Outcome::Win,
            since: 5000.0,
        };

        let step = session.step(5400.0);
        assert_eq!(step.next, NextTick::WakeAfter(600.0));
        assert!(!step.paint);

        let step = session.step(6000.0);
        assert_eq!(step.next, NextTick::Halt);
        assert_eq!(session.phase(), Phase::Stopped);
    }

    #[test]
    fn test_frame_paints_live_phases() {
        let mut session = Session::new(1, Court::new(800.0, 500.0), 0.0);
        let mut surface = RecordingSurface::new(800.0, 500.0);
        let step = session.frame(10.0, &Theme::default(), &mut surface);
        assert_eq!(step.next, NextTick::Frame);
        assert!(!surface.commands.is_empty());
    }

    #[test]
    fn test_pointer_ignored_after_match() {
        let mut session = Session::new(1, Court::new(800.0, 500.0), 0.0);
        session.state_mut().phase = Phase::Stopped;
        session.pointer_moved(10.0);
        assert_eq!(session.intents().pointer_x, None);
    }
}
