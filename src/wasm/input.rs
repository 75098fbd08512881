//! Window listeners feeding the shared pointer and viewport cells.
//!
//! Listeners live for the page lifetime, so every closure is `forget`-ed
//! after registration.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use crate::pointer::{PointerEvent, PointerPosition, Viewport};

/// Current inner size of the window, if the browser reports one.
pub fn window_viewport(window: &Window) -> Option<Viewport> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(w as u32, h as u32))
}

/// Sizes the canvas backing store to `viewport`.
pub fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width);
    canvas.set_height(viewport.height);
}

fn first_touch(e: &TouchEvent) -> Option<(f64, f64)> {
    e.touches()
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}

fn touch_listener(
    pointer: Rc<Cell<PointerPosition>>,
    to_event: fn(Option<(f64, f64)>) -> PointerEvent,
) -> Closure<dyn FnMut(TouchEvent)> {
    Closure::wrap(Box::new(move |e: TouchEvent| {
        let mut p = pointer.get();
        p.apply(to_event(first_touch(&e)));
        pointer.set(p);
    }) as Box<dyn FnMut(TouchEvent)>)
}

fn register<T: ?Sized + WasmClosure>(window: &Window, name: &str, closure: Closure<T>) -> Result<(), JsValue> {
    window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn listen(
    window: &Window,
    canvas: &HtmlCanvasElement,
    pointer: Rc<Cell<PointerPosition>>,
    viewport: Rc<Cell<Viewport>>,
) -> Result<(), JsValue> {
    // Resize canvas to fit window
    let resize = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            let Some(next) = web_sys::window().as_ref().and_then(window_viewport) else {
                return;
            };
            fit_canvas(&canvas, next);
            viewport.set(next);
            log::debug!("viewport resized to {}x{}", next.width, next.height);
        }) as Box<dyn FnMut()>)
    };
    register(window, "resize", resize)?;

    let mouse = {
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let mut p = pointer.get();
            p.apply(PointerEvent::Move {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
            pointer.set(p);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    register(window, "mousemove", mouse)?;

    register(window, "touchstart", touch_listener(pointer.clone(), PointerEvent::TouchStart))?;
    register(window, "touchmove", touch_listener(pointer.clone(), PointerEvent::TouchMove))?;

    let lift = Closure::wrap(Box::new(move || {
        let mut p = pointer.get();
        p.apply(PointerEvent::TouchEnd);
        pointer.set(p);
    }) as Box<dyn FnMut()>);
    register(window, "touchend", lift)?;

    Ok(())
}
