//! Drawing of the particle field onto a 2D surface.

use crate::field::{Heart, Ribbon};
use crate::pointer::Viewport;

/// Subset of a 2D canvas context the background needs.
///
/// Mirrors the browser `CanvasRenderingContext2d` calls one for one so the
/// wasm build can pass the real context straight through.
pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
}

pub const HEART_COLOR: &str = "#8B0000";
pub const HEART_ALPHA: f64 = 0.85;
pub const RIBBON_COLOR: &str = "#fff";
pub const RIBBON_ALPHA: f64 = 0.7;
pub const RIBBON_WIDTH: f64 = 2.0;

/// Stateless painter. Hearts are drawn first so ribbons sit on top.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clears the whole viewport and paints one frame.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        viewport: Viewport,
        hearts: &[Heart],
        ribbons: &[Ribbon],
    ) {
        surface.clear_rect(0.0, 0.0, viewport.w(), viewport.h());
        for heart in hearts {
            self.draw_heart(surface, heart);
        }
        for ribbon in ribbons {
            self.draw_ribbon(surface, ribbon);
        }
    }

    /// Two mirrored lobes hanging from `(x, y)`, point at `y + size`.
    pub fn draw_heart<S: Surface + ?Sized>(&self, surface: &mut S, heart: &Heart) {
        let (x, y, s) = (heart.x, heart.y, heart.size());
        let half = s / 2.0;
        let notch = y + s / 4.0;

        surface.save();
        surface.begin_path();
        surface.move_to(x, notch);
        surface.bezier_curve_to(x, y, x - half, y, x - half, notch);
        surface.bezier_curve_to(x - half, y + half, x, y + s * 0.8, x, y + s);
        surface.bezier_curve_to(x, y + s * 0.8, x + half, y + half, x + half, notch);
        surface.bezier_curve_to(x + half, y, x, y, x, notch);
        surface.close_path();
        surface.set_fill_color(HEART_COLOR);
        surface.set_global_alpha(HEART_ALPHA);
        surface.fill();
        surface.set_global_alpha(1.0);
        surface.restore();
    }

    pub fn draw_ribbon<S: Surface + ?Sized>(&self, surface: &mut S, ribbon: &Ribbon) {
        let (cx, cy) = ribbon.control_point();
        let (tx, ty) = ribbon.tip();

        surface.save();
        surface.set_stroke_color(RIBBON_COLOR);
        surface.set_global_alpha(RIBBON_ALPHA);
        surface.set_line_width(RIBBON_WIDTH);
        surface.begin_path();
        surface.move_to(ribbon.x, ribbon.y);
        surface.quadratic_curve_to(cx, cy, tx, ty);
        surface.stroke();
        surface.set_global_alpha(1.0);
        surface.restore();
    }
}
