//! Browser platform layer
//!
//! Only built for wasm32. Binds the engine to:
//! - a canvas 2D context (drawing)
//! - requestAnimationFrame and setTimeout (frame loop)
//! - DOM listeners for pointer, touch, keys and viewport resize
//! - the host page's window shell, close button and theme toggle

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod engine;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod scheduler;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use engine::{PongEngine, start};
#[cfg(target_arch = "wasm32")]
pub use host::DomHost;
#[cfg(target_arch = "wasm32")]
pub use scheduler::RafScheduler;

#[cfg(target_arch = "wasm32")]
pub(crate) type WebLifecycle = crate::engine::Lifecycle<RafScheduler, DomHost>;
