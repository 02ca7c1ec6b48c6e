//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One fixed step per displayed frame
//! - Seeded RNG only
//! - Wall-clock time passed in, never read
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod geometry;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::Contacts;
pub use geometry::Rect;
pub use input::{Intents, KeyIntent, device_to_court_x};
pub use state::{Ball, Court, GameState, Outcome, Paddle, Phase, Role, Score, ServeDirection};
pub use tick::{FrameEvents, tick};
