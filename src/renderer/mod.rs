//! Rendering collaborator
//!
//! The simulation only ever asks for two things: a filled circle and a
//! translucent full-canvas overlay. The browser build draws them with
//! Canvas 2D; headless runs and tests count them.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::DVec2;

use crate::sim::state::Color;

/// Drawing surface the updater renders into
pub trait Renderer {
    /// Fill a circle at `center`
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color, alpha: f64);

    /// Cover the whole canvas with `color` at the given opacity
    fn fill_overlay(&mut self, color: Color, alpha: f64, size: DVec2);
}

/// Draw a circle, skipping shapes that would not be visible
///
/// Canvas rejects negative radii, and zero-radius or fully transparent
/// circles draw nothing anyway.
pub fn draw_circle(
    renderer: &mut dyn Renderer,
    center: DVec2,
    radius: f64,
    color: Color,
    alpha: f64,
) {
    if radius <= 0.0 || alpha <= 0.0 {
        return;
    }
    renderer.fill_circle(center, radius, color, alpha.min(1.0));
}

/// Renderer that draws nothing and keeps counts
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    pub circles_drawn: u64,
    pub overlays_drawn: u64,
}

impl Renderer for HeadlessRenderer {
    fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: Color, _alpha: f64) {
        self.circles_drawn += 1;
    }

    fn fill_overlay(&mut self, _color: Color, _alpha: f64, _size: DVec2) {
        self.overlays_drawn += 1;
    }
}
