//! Engine lifecycle
//!
//! Platform-free: owns the running session, decides when frames run, and
//! drives the host through traits so tests can step it with synthetic time.

pub mod layout;
pub mod lifecycle;
pub mod session;

pub use layout::{CourtSize, Viewport, court_size};
pub use lifecycle::{FrameScheduler, Host, Lifecycle};
pub use session::{NextTick, Session, Step};
