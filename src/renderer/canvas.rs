//! Canvas 2D surface (browser only)

use web_sys::CanvasRenderingContext2d;

use super::Surface;

/// [`Surface`] backed by a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        if let Err(e) = self.ctx.translate(x as f64, y as f64) {
            log::warn!("translate failed: {:?}", e);
        }
    }

    fn rotate(&mut self, angle: f32) {
        if let Err(e) = self.ctx.rotate(angle as f64) {
            log::warn!("rotate failed: {:?}", e);
        }
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
    }
}
