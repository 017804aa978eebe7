//! Canvas 2D renderer for the browser build

use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use crate::sim::state::Color;

/// Draws onto an `HtmlCanvasElement` through its 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl Renderer for CanvasRenderer {
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color, alpha: f64) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
        self.ctx.restore();
    }

    fn fill_overlay(&mut self, color: Color, alpha: f64, size: DVec2) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(0.0, 0.0, size.x, size.y);
        self.ctx.restore();
    }
}
