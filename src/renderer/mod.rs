//! 2D rendering module
//!
//! Paints the court through the [`Surface`] trait so the same painter drives the
//! browser canvas and the headless/test recorder.

pub mod draw;
pub mod surface;
pub mod theme;

pub use draw::{countdown_label, draw_frame, draw_game_over, render};
pub use surface::{DrawCommand, RecordingSurface, Surface, TextAlign, TextBaseline, TextStyle};
pub use theme::Theme;
