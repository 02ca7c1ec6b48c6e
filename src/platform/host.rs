//! DOM-backed host: overlay, canvas, theme, listeners and the window shell

use std::cell::RefCell;
use std::rc::Weak;

use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlCanvasElement, HtmlElement,
    KeyboardEvent, MouseEvent, TouchEvent, Window,
};

use super::WebLifecycle;
use super::canvas::CanvasSurface;
use crate::engine::{Host, Viewport};
use crate::error::LaunchError;
use crate::renderer::Theme;
use crate::settings::Settings;
use crate::sim::device_to_court_x;

pub(crate) fn js_err(e: JsValue) -> LaunchError {
    LaunchError::Js(format!("{:?}", e))
}

pub(crate) fn window() -> Result<Window, LaunchError> {
    web_sys::window().ok_or(LaunchError::NoWindow)
}

pub(crate) fn document() -> Result<Document, LaunchError> {
    window()?.document().ok_or(LaunchError::NoDocument)
}

/// Run `f` against the engine if it is still alive and not already borrowed
fn with_engine(engine: &Weak<RefCell<WebLifecycle>>, f: impl FnOnce(&mut WebLifecycle)) {
    let Some(engine) = engine.upgrade() else {
        return;
    };
    let Ok(mut engine) = engine.try_borrow_mut() else {
        return;
    };
    f(&mut engine);
}

/// Client x to court x for this canvas
fn court_x(canvas: &HtmlCanvasElement, client_x: i32) -> Option<f32> {
    let rect = canvas.get_bounding_client_rect();
    device_to_court_x(
        client_x as f64,
        rect.left(),
        rect.width(),
        canvas.width() as f64,
    )
}

/// Listeners attached for one session; removed together on stop
struct Listeners {
    window: Window,
    canvas: HtmlCanvasElement,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    key_down: Closure<dyn FnMut(KeyboardEvent)>,
    key_up: Closure<dyn FnMut(KeyboardEvent)>,
    resize: Closure<dyn FnMut(Event)>,
}

impl Listeners {
    fn attach(
        window: Window,
        canvas: HtmlCanvasElement,
        engine: &Weak<RefCell<WebLifecycle>>,
    ) -> Result<Self, JsValue> {
        // Mouse move - absolute position
        let mouse_move = {
            let engine = engine.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(x) = court_x(&canvas, event.client_x()) {
                    with_engine(&engine, |e| e.pointer_moved(x));
                }
            })
        };

        // Touch move - first touch point only
        let touch_move = {
            let engine = engine.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                if let Some(x) = court_x(&canvas, touch.client_x()) {
                    with_engine(&engine, |e| e.pointer_moved(x));
                }
            })
        };

        let key_down = {
            let engine = engine.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                with_engine(&engine, |e| {
                    e.key_changed(&event.key(), true);
                });
            })
        };

        let key_up = {
            let engine = engine.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                with_engine(&engine, |e| {
                    e.key_changed(&event.key(), false);
                });
            })
        };

        let resize = {
            let engine = engine.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                with_engine(&engine, |e| e.resize());
            })
        };

        canvas.add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())?;
        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            touch_move.as_ref().unchecked_ref(),
            &passive,
        )?;
        window.add_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("keyup", key_up.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

        Ok(Self {
            window,
            canvas,
            mouse_move,
            touch_move,
            key_down,
            key_up,
            resize,
        })
    }

    fn detach(self) {
        let _ = self.canvas.remove_event_listener_with_callback(
            "mousemove",
            self.mouse_move.as_ref().unchecked_ref(),
        );
        let _ = self.canvas.remove_event_listener_with_callback(
            "touchmove",
            self.touch_move.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.key_down.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", self.key_up.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
    }
}

pub struct DomHost {
    settings: Settings,
    engine: Weak<RefCell<WebLifecycle>>,
    overlay: Option<Element>,
    surface: Option<CanvasSurface>,
    theme_toggle: Option<HtmlElement>,
    listeners: Option<Listeners>,
}

impl DomHost {
    pub fn new(settings: Settings, engine: Weak<RefCell<WebLifecycle>>) -> Self {
        Self {
            settings,
            engine,
            overlay: None,
            surface: None,
            theme_toggle: None,
            listeners: None,
        }
    }

    /// Find the overlay, or build `overlay > wrap > canvas` under `<body>`
    fn ensure_overlay(&self, document: &Document) -> Result<Element, LaunchError> {
        if let Some(overlay) = document.get_element_by_id(&self.settings.overlay_id) {
            return Ok(overlay);
        }

        let body = document
            .body()
            .ok_or_else(|| LaunchError::MissingAnchor("body".into()))?;
        let overlay = document.create_element("div").map_err(js_err)?;
        overlay.set_id(&self.settings.overlay_id);
        overlay.set_class_name("pong-overlay");
        let wrap = document.create_element("div").map_err(js_err)?;
        wrap.set_class_name("pong-wrap");
        let canvas = document.create_element("canvas").map_err(js_err)?;
        canvas.set_id(&self.settings.canvas_id);

        wrap.append_child(&canvas).map_err(js_err)?;
        overlay.append_child(&wrap).map_err(js_err)?;
        body.append_child(&overlay).map_err(js_err)?;
        Ok(overlay)
    }

    fn find_canvas(&self, document: &Document) -> Result<HtmlCanvasElement, LaunchError> {
        let missing = || LaunchError::MissingAnchor(format!("#{}", self.settings.canvas_id));
        document
            .get_element_by_id(&self.settings.canvas_id)
            .ok_or_else(missing)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| missing())
    }

    /// Move the page's theme toggle on top of the overlay, pinned top-right
    fn pin_theme_toggle(&mut self, document: &Document, overlay: &Element) {
        let Some(toggle) = document
            .query_selector(&self.settings.theme_toggle_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let _ = overlay.append_child(&toggle);
        let _ = toggle.class_list().add_1("in-pong");
        let style = toggle.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", "16px");
        let _ = style.set_property("right", "16px");
        let _ = style.set_property("z-index", "10001");
        self.theme_toggle = Some(toggle);
    }

    /// Put the theme toggle back and let the page re-place it
    fn release_theme_toggle(&mut self) {
        let Some(toggle) = self.theme_toggle.take() else {
            return;
        };

        let _ = toggle.class_list().remove_1("in-pong");
        let style = toggle.style();
        for prop in ["position", "top", "right", "z-index"] {
            let _ = style.remove_property(prop);
        }
        if let Some(body) = document().ok().and_then(|d| d.body()) {
            let _ = body.append_child(&toggle);
        }
        if let (Ok(window), Ok(event)) = (window(), Event::new("resize")) {
            let _ = window.dispatch_event(&event);
        }
    }
}

impl Host for DomHost {
    type Surface = CanvasSurface;

    fn viewport(&self) -> Viewport {
        let Ok(window) = window() else {
            return Viewport {
                width: crate::consts::DEFAULT_COURT_WIDTH as f64,
                height: crate::consts::DEFAULT_COURT_HEIGHT as f64,
                narrow: false,
            };
        };
        let dimension =
            |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let narrow = window
            .match_media(&self.settings.narrow_media_query())
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        Viewport {
            width: dimension(window.inner_width()),
            height: dimension(window.inner_height()),
            narrow,
        }
    }

    fn theme(&self) -> Theme {
        let style = window().ok().and_then(|w| {
            let root = w.document()?.document_element()?;
            w.get_computed_style(&root).ok().flatten()
        });
        match style {
            Some(style) => Theme::from_lookup(|name| style.get_property_value(name).ok()),
            None => Theme::default(),
        }
    }

    fn show_overlay(&mut self, width: u32, height: u32) -> Result<(), LaunchError> {
        let document = document()?;
        let overlay = self.ensure_overlay(&document)?;
        let canvas = self.find_canvas(&document)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(LaunchError::NoContext)?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| LaunchError::NoContext)?;

        let surface = CanvasSurface::new(canvas, ctx);
        surface.set_size(width, height);
        overlay.class_list().add_1("show").map_err(js_err)?;
        self.pin_theme_toggle(&document, &overlay);

        self.surface = Some(surface);
        self.overlay = Some(overlay);
        Ok(())
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        if let Some(surface) = &self.surface {
            surface.set_size(width, height);
        }
    }

    fn surface(&mut self) -> Option<&mut CanvasSurface> {
        self.surface.as_mut()
    }

    fn attach_listeners(&mut self) {
        if self.listeners.is_some() {
            return;
        }
        let (Ok(window), Some(surface)) = (window(), self.surface.as_ref()) else {
            return;
        };
        match Listeners::attach(window, surface.canvas().clone(), &self.engine) {
            Ok(listeners) => self.listeners = Some(listeners),
            Err(e) => log::warn!("Input listeners not attached: {:?}", e),
        }
    }

    fn detach_listeners(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            listeners.detach();
        }
    }

    fn hide_overlay(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            let _ = overlay.class_list().remove_1("show");
        }
        self.surface = None;
        self.release_theme_toggle();
    }

    fn restore_shell(&mut self) {
        let Ok(document) = document() else {
            return;
        };
        match document.query_selector(&self.settings.shell_selector) {
            Ok(Some(shell)) => {
                let _ = shell.class_list().remove_1("closed");
            }
            _ => log::warn!("No shell `{}` to restore", self.settings.shell_selector),
        }
    }
}
