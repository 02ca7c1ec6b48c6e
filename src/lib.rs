//! Close Pong - the mini-game behind a portfolio page's window-close button
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state, input intents, AI, collisions)
//! - `renderer`: 2D painter over an abstract drawing surface
//! - `engine`: Session lifecycle, frame scheduling, viewport layout
//! - `platform`: Browser bindings (canvas, listeners, requestAnimationFrame)
//! - `settings`: Host-provided configuration

pub mod engine;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::{FrameScheduler, Host, Lifecycle, NextTick, Session};
pub use error::LaunchError;
pub use settings::Settings;

/// Game rule constants. Fixed by design; none of these are host-configurable.
pub mod consts {
    /// Points needed to end the match
    pub const WIN_SCORE: u32 = 5;
    /// Countdown before the first serve (ms)
    pub const COUNTDOWN_MS: f64 = 3000.0;
    /// How long the game-over banner stays up before teardown (ms)
    pub const GAME_OVER_DELAY_MS: f64 = 1000.0;

    /// Court size used until the first layout pass
    pub const DEFAULT_COURT_WIDTH: f32 = 800.0;
    pub const DEFAULT_COURT_HEIGHT: f32 = 500.0;

    /// Gap between each end edge and the back of its paddle
    pub const PADDLE_INSET: f32 = 20.0;
    pub const PADDLE_LENGTH_RATIO: f32 = 0.18;
    pub const PADDLE_MIN_LENGTH: f32 = 60.0;
    pub const PADDLE_THICKNESS_RATIO: f32 = 0.018;
    pub const PADDLE_MIN_THICKNESS: f32 = 6.0;

    pub const BALL_RADIUS: f32 = 6.0;
    /// Serve speed (units per frame)
    pub const BALL_BASE_SPEED: f32 = 6.0;
    /// Maximum serve angle off the vertical (radians)
    pub const SERVE_MAX_ANGLE: f32 = 0.3;

    /// Vertical speed multiplier applied on every paddle hit (uncapped)
    pub const PADDLE_SPEEDUP: f32 = 1.03;
    /// Horizontal velocity added per unit of relative paddle offset
    pub const DEFLECTION_GAIN: f32 = 3.0;
    pub const MAX_HORIZONTAL_SPEED: f32 = 8.0;
    /// Distance past an end edge before a missed ball counts as a point
    pub const SCORE_MARGIN: f32 = 10.0;

    /// Keyboard nudge per frame
    pub const KEY_STEP: f32 = 8.0;
    pub const AI_SPEED: f32 = BALL_BASE_SPEED;
    pub const AI_DEAD_ZONE: f32 = 6.0;
}
