// Surface backed by an HTML canvas and its 2D rendering context.

use crate::color::Color;
use crate::surface::Surface;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the 2d context from the canvas, None if the canvas can't provide one
    pub fn new(canvas: HtmlCanvasElement) -> Result<Option<Self>, JsValue> {
        let context = match canvas.get_context("2d")? {
            Some(context) => context.dyn_into::<CanvasRenderingContext2d>()?,
            None => return Ok(None),
        };
        Ok(Some(CanvasSurface { canvas, context }))
    }

    /// Top-left corner of the canvas in client coordinates.
    pub fn client_origin(&self) -> Vector2<f64> {
        let rect = self.canvas.get_bounding_client_rect();
        [rect.left(), rect.top()]
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color) {
        self.context.set_stroke_style_str(&color.to_css());
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }

    fn set_glow(&mut self, blur: f64, color: Color) {
        self.context.set_shadow_blur(blur);
        self.context.set_shadow_color(&color.to_css());
    }

    fn clear_glow(&mut self) {
        self.context.set_shadow_blur(0.0);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), JsValue> {
        self.context.set_fill_style_str(&color.to_css());
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}
