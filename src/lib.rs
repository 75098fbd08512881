//! Animated hearts-and-ribbons page background.
//!
//! The physics and drawing live in plain Rust modules so they can be driven
//! headlessly; the browser glue under `wasm` is only compiled for wasm32.

pub mod animation;
pub mod config;
pub mod field;
pub mod pointer;
pub mod render;

pub use animation::{AnimationLoop, LoopState};
pub use field::{Heart, ParticleField, Ribbon};
pub use pointer::{PointerEvent, PointerPosition, Viewport};
pub use render::{Renderer, Surface};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod canvas;
    mod input;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(crate::config::CANVAS_ID)
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        render::start(canvas)?;
        Ok(())
    }
}
