//! requestAnimationFrame / setTimeout backed frame scheduler

use std::cell::RefCell;
use std::rc::Weak;

use wasm_bindgen::prelude::*;

use super::WebLifecycle;
use crate::engine::FrameScheduler;

/// The one outstanding callback, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Frame(i32),
    Timeout(i32),
}

pub struct RafScheduler {
    engine: Weak<RefCell<WebLifecycle>>,
    pending: Option<Pending>,
}

impl RafScheduler {
    pub fn new(engine: Weak<RefCell<WebLifecycle>>) -> Self {
        Self {
            engine,
            pending: None,
        }
    }

    /// Callback that runs one engine tick at the current wall-clock time
    fn tick_callback(&self) -> JsValue {
        let engine = self.engine.clone();
        Closure::once_into_js(move || {
            let Some(engine) = engine.upgrade() else {
                return;
            };
            // Callbacks never nest, so a held borrow means something is wrong
            let Ok(mut engine) = engine.try_borrow_mut() else {
                log::warn!("Frame skipped, engine busy");
                return;
            };
            engine.on_tick(js_sys::Date::now());
        })
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.tick_callback();
        match window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => self.pending = Some(Pending::Frame(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn request_wakeup(&mut self, delay_ms: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.tick_callback();
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.ceil() as i32,
        ) {
            Ok(id) => self.pending = Some(Pending::Timeout(id)),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        match pending {
            Pending::Frame(id) => {
                let _ = window.cancel_animation_frame(id);
            }
            Pending::Timeout(id) => window.clear_timeout_with_handle(id),
        }
    }
}
