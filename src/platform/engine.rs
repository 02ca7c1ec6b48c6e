//! JS-facing engine handle and page bootstrap

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::WebLifecycle;
use super::host::{DomHost, document, js_err};
use super::scheduler::RafScheduler;
use crate::engine::Lifecycle;
use crate::error::LaunchError;
use crate::settings::Settings;

/// Optional `<script type="application/json">` carrying [`Settings`]
const SETTINGS_ELEMENT_ID: &str = "pong-settings";

/// Owns one engine instance; at most one match runs per handle
#[wasm_bindgen]
pub struct PongEngine {
    inner: Rc<RefCell<WebLifecycle>>,
    settings: Settings,
}

#[wasm_bindgen]
impl PongEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> PongEngine {
        Self::with_settings(Settings::from_host(settings_json.as_deref()))
    }

    /// Start a match. Returns false if the page lacks what the game needs.
    pub fn launch(&self) -> bool {
        let Ok(mut engine) = self.inner.try_borrow_mut() else {
            log::warn!("Launch ignored, engine busy");
            return false;
        };
        let now = js_sys::Date::now();
        match engine.launch(now, self.settings.seed_or(now)) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Pong not launched: {}", e);
                false
            }
        }
    }

    /// Tear down immediately; safe to call at any time
    pub fn stop(&self) {
        match self.inner.try_borrow_mut() {
            Ok(mut engine) => engine.stop(),
            Err(_) => log::warn!("Stop ignored, engine busy"),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner
            .try_borrow()
            .map(|engine| engine.is_running())
            .unwrap_or(true)
    }
}

impl PongEngine {
    pub fn with_settings(settings: Settings) -> Self {
        let host_settings = settings.clone();
        let inner = Rc::new_cyclic(|weak| {
            RefCell::new(Lifecycle::new(
                RafScheduler::new(weak.clone()),
                DomHost::new(host_settings, weak.clone()),
            ))
        });
        Self { inner, settings }
    }
}

/// Hook the close button: hide the shell and launch a match on click
///
/// If the launch fails the shell is shown again.
fn wire_close_button(settings: Settings) -> Result<(), LaunchError> {
    let document = document()?;
    let find = |selector: &str| {
        document
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or_else(|| LaunchError::MissingAnchor(selector.to_string()))
    };
    let shell = find(&settings.shell_selector)?;
    let button = find(&settings.close_selector)?;

    let engine = PongEngine::with_settings(settings);
    let on_click = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        let _ = shell.class_list().add_1("closed");
        if !engine.launch() {
            let _ = shell.class_list().remove_1("closed");
        }
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_err)?;
    // Lives as long as the page
    on_click.forget();
    Ok(())
}

fn page_settings() -> Option<String> {
    document()
        .ok()?
        .get_element_by_id(SETTINGS_ELEMENT_ID)?
        .text_content()
}

/// Page entry: logging, panic hook, then wire the close button
pub fn start() {
    console_error_panic_hook::set_once();

    let json = page_settings();
    let settings = Settings::from_host(json.as_deref());
    if console_log::init_with_level(settings.log_level()).is_err() {
        log::debug!("Logger already installed");
    }

    log::info!("Close Pong ready");
    if let Err(e) = wire_close_button(settings) {
        log::warn!("Close button not wired: {}", e);
    }
}
