use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use super::input;
use crate::animation::AnimationLoop;
use crate::config::FieldConfig;
use crate::field::ParticleField;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Fresh seed per page load.
fn seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = js_sys::Date::now() as u64;
    (high << 32) ^ low
}

fn request_frame(slot: &FrameSlot) -> Result<i32, JsValue> {
    let window = window().ok_or("no window")?;
    let slot = slot.borrow();
    let callback = slot.as_ref().ok_or("frame callback missing")?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Start the background: size the canvas, hook up input and run the
/// animation loop for the lifetime of the page.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let mut ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2D canvas not supported")?
        .dyn_into()?;

    let initial = input::window_viewport(&window).ok_or("window size unavailable")?;
    input::fit_canvas(&canvas, initial);
    let viewport = Rc::new(Cell::new(initial));
    let pointer = Rc::new(Cell::new(initial.center()));
    input::listen(&window, &canvas, pointer.clone(), viewport.clone())?;

    let config = FieldConfig::default();
    let field = ParticleField::new(config, initial, SmallRng::seed_from_u64(seed()));
    log::info!(
        "background started on {}x{} canvas with {} hearts and {} ribbons",
        initial.width,
        initial.height,
        field.hearts().len(),
        field.ribbons().len(),
    );
    let mut animation = AnimationLoop::new(field);
    animation.start();

    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: FrameSlot = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !animation.frame(&pointer.get(), viewport.get(), &mut ctx) {
            return;
        }

        // schedule next
        if let Err(err) = request_frame(&f) {
            log::error!("requestAnimationFrame failed, stopping: {:?}", err);
            animation.stop();
        }
    }) as Box<dyn FnMut()>));

    request_frame(&g)?;

    Ok(())
}
