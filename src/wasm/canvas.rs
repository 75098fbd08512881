use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::render::Surface;

impl Surface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    #[allow(deprecated)]
    fn set_fill_color(&mut self, color: &str) {
        CanvasRenderingContext2d::set_fill_style(self, &JsValue::from_str(color));
    }

    #[allow(deprecated)]
    fn set_stroke_color(&mut self, color: &str) {
        CanvasRenderingContext2d::set_stroke_style(self, &JsValue::from_str(color));
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        CanvasRenderingContext2d::bezier_curve_to(self, cp1x, cp1y, cp2x, cp2y, x, y);
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        CanvasRenderingContext2d::quadratic_curve_to(self, cpx, cpy, x, y);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
}
