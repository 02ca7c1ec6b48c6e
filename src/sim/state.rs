//! Game state and core simulation types
//!
//! The whole match lives in [`GameState`]; one running session owns exactly one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, clamp_span};
use crate::consts::*;

/// Which side a paddle plays for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Bottom paddle, driven by pointer/touch/keys
    Player,
    /// Top paddle, driven by the AI
    Opponent,
}

/// Match result shown on the game-over banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "YOU WIN",
            Outcome::Lose => "YOU LOSE",
        }
    }
}

/// Match-level state machine
///
/// `Countdown -> Playing -> Ended -> Stopped`, never backwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball and AI frozen until the wall-clock deadline (ms)
    Countdown { until: f64 },
    Playing,
    /// Banner up; `since` is the wall-clock time the match ended (ms)
    Ended { outcome: Outcome, since: f64 },
    /// Terminal, session is torn down
    Stopped,
}

impl Phase {
    /// Countdown or Playing: the frame loop is running
    pub fn is_live(&self) -> bool {
        matches!(self, Phase::Countdown { .. } | Phase::Playing)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }
}

/// Direction of the next serve along the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServeDirection {
    TowardOpponent,
    TowardPlayer,
}

impl ServeDirection {
    /// Serve toward whoever just won the point
    pub fn toward(role: Role) -> Self {
        match role {
            Role::Player => ServeDirection::TowardPlayer,
            Role::Opponent => ServeDirection::TowardOpponent,
        }
    }

    /// Sign of the vertical velocity component
    pub fn sign(&self) -> f32 {
        match self {
            ServeDirection::TowardOpponent => -1.0,
            ServeDirection::TowardPlayer => 1.0,
        }
    }
}

/// Logical court dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle length for this court width
    pub fn paddle_length(&self) -> f32 {
        (self.width * PADDLE_LENGTH_RATIO).round().max(PADDLE_MIN_LENGTH)
    }

    /// Paddle thickness for this court height
    pub fn paddle_thickness(&self) -> f32 {
        (self.height * PADDLE_THICKNESS_RATIO)
            .round()
            .max(PADDLE_MIN_THICKNESS)
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new(DEFAULT_COURT_WIDTH, DEFAULT_COURT_HEIGHT)
    }
}

/// A paddle sliding along the court's width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, always within `[0, court.width - length]`
    pub position: f32,
    pub length: f32,
    pub thickness: f32,
    pub role: Role,
}

impl Paddle {
    /// A paddle sized for `court` and centered on it
    pub fn centered(role: Role, court: &Court) -> Self {
        let length = court.paddle_length();
        Self {
            position: clamp_span((court.width - length) / 2.0, length, court.width),
            length,
            thickness: court.paddle_thickness(),
            role,
        }
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.position + self.length / 2.0
    }

    /// Place the left edge at `x`, clamped to the court
    pub fn set_position(&mut self, x: f32, court_width: f32) {
        self.position = clamp_span(x, self.length, court_width);
    }

    /// Shift by `dx`, clamped to the court
    pub fn nudge(&mut self, dx: f32, court_width: f32) {
        self.set_position(self.position + dx, court_width);
    }

    /// Bounding box: opponent near the top edge, player near the bottom
    pub fn rect(&self, court: &Court) -> Rect {
        let y = match self.role {
            Role::Opponent => PADDLE_INSET,
            Role::Player => court.height - PADDLE_INSET - self.thickness,
        };
        Rect::new(self.position, y, self.length, self.thickness)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

/// Points per side; only ever increases, one at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub opponent: u32,
    pub player: u32,
}

impl Score {
    /// Award one point and return the scorer's new total
    pub fn award(&mut self, scorer: Role) -> u32 {
        let slot = match scorer {
            Role::Player => &mut self.player,
            Role::Opponent => &mut self.opponent,
        };
        *slot += 1;
        *slot
    }

    pub fn winner(&self, threshold: u32) -> Option<Role> {
        if self.player >= threshold {
            Some(Role::Player)
        } else if self.opponent >= threshold {
            Some(Role::Opponent)
        } else {
            None
        }
    }
}

/// Complete match state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub seed: u64,
    pub court: Court,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: Phase,
    /// Frames stepped so far
    pub frame: u64,
    #[serde(skip)]
    rng: Pcg32,
}

impl GameState {
    /// Fresh match on `court`, counting down from `now` (ms)
    pub fn new(seed: u64, court: Court, now: f64) -> Self {
        let mut state = Self {
            seed,
            court,
            player: Paddle::centered(Role::Player, &court),
            opponent: Paddle::centered(Role::Opponent, &court),
            ball: Ball::new(court.center()),
            score: Score::default(),
            phase: Phase::Countdown {
                until: now + COUNTDOWN_MS,
            },
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        };

        let direction = if state.rng.random_bool(0.5) {
            ServeDirection::TowardOpponent
        } else {
            ServeDirection::TowardPlayer
        };
        state.reset_ball(direction);

        state
    }

    /// Re-serve from the center, up to `SERVE_MAX_ANGLE` off the vertical
    pub fn reset_ball(&mut self, direction: ServeDirection) {
        let angle = self.rng.random_range(-SERVE_MAX_ANGLE..=SERVE_MAX_ANGLE);
        self.ball.pos = self.court.center();
        self.ball.vel = Vec2::new(
            BALL_BASE_SPEED * angle.sin(),
            direction.sign() * BALL_BASE_SPEED * angle.cos(),
        );
    }

    /// Resize both paddles to the current court and center them
    pub fn reset_paddles(&mut self) {
        self.player = Paddle::centered(Role::Player, &self.court);
        self.opponent = Paddle::centered(Role::Opponent, &self.court);
    }

    /// Adopt new court dimensions mid-match
    pub fn resize(&mut self, court: Court) {
        self.court = court;
        self.reset_paddles();
        if matches!(self.phase, Phase::Countdown { .. }) {
            self.ball.pos = court.center();
        } else {
            let r = self.ball.radius;
            self.ball.pos.x = self.ball.pos.x.clamp(r, (court.width - r).max(r));
        }
    }

    pub fn paddle(&self, role: Role) -> &Paddle {
        match role {
            Role::Player => &self.player,
            Role::Opponent => &self.opponent,
        }
    }
}
