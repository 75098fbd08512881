use crate::config::OFFSCREEN_POINTER;

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.width as f64
    }

    #[inline]
    pub fn h(&self) -> f64 {
        self.height as f64
    }

    /// Closed bounds check: points on the edge are still inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        !(x < 0.0 || x > self.w() || y < 0.0 || y > self.h())
    }

    pub fn center(&self) -> PointerPosition {
        PointerPosition::new(self.w() / 2.0, self.h() / 2.0)
    }
}

/// Last known pointer location. Owned by the driver and read once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parked far outside any viewport so nothing is repelled.
    pub fn offscreen() -> Self {
        Self::new(OFFSCREEN_POINTER.0, OFFSCREEN_POINTER.1)
    }

    /// Folds one host input event into the tracked position.
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => *self = Self::new(x, y),
            PointerEvent::TouchStart(Some((x, y))) | PointerEvent::TouchMove(Some((x, y))) => {
                *self = Self::new(x, y)
            }
            // empty touch list
            PointerEvent::TouchStart(None) | PointerEvent::TouchMove(None) => {}
            PointerEvent::TouchEnd => *self = Self::offscreen(),
        }
    }
}

/// Pointer input as delivered by the host. Touch variants carry the first
/// touch point, if the event had one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    TouchStart(Option<(f64, f64)>),
    TouchMove(Option<(f64, f64)>),
    TouchEnd,
}
