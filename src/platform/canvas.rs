//! Canvas 2D backing for the painter

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::renderer::{Surface, TextStyle};

const FONT_FAMILY: &str = "ui-monospace, monospace";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_dashed_line(&mut self, from: (f32, f32), to: (f32, f32), dash: [f32; 2], color: &str) {
        let pattern = js_sys::Array::of2(
            &JsValue::from_f64(dash[0] as f64),
            &JsValue::from_f64(dash[1] as f64),
        );
        self.ctx.set_stroke_style_str(color);
        let _ = self.ctx.set_line_dash(&pattern);
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.stroke();
        let _ = self.ctx.set_line_dash(&js_sys::Array::new());
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            cx as f64,
            cy as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle<'_>) {
        self.ctx.save();
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_font(&format!("{}px {}", style.font_px, FONT_FAMILY));
        self.ctx.set_text_align(style.align.as_str());
        self.ctx.set_text_baseline(style.baseline.as_str());
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
        self.ctx.restore();
    }
}
