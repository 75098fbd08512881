use rand::Rng;

use crate::field::ParticleField;
use crate::pointer::{PointerPosition, Viewport};
use crate::render::{Renderer, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Update-then-render, one step per display frame.
///
/// The loop does not own a clock. Whoever drives it (requestAnimationFrame in
/// the browser, a plain `for` in tests) calls [`AnimationLoop::frame`] and
/// schedules the next call only while it returns `true`.
pub struct AnimationLoop<R> {
    field: ParticleField<R>,
    renderer: Renderer,
    state: LoopState,
    frames: u64,
}

impl<R: Rng> AnimationLoop<R> {
    pub fn new(field: ParticleField<R>) -> Self {
        Self {
            field,
            renderer: Renderer::new(),
            state: LoopState::Idle,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.state != LoopState::Running {
            log::debug!("animation loop started after {} frames", self.frames);
        }
        self.state = LoopState::Running;
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("animation loop stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames drawn since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    /// Advances the field and draws it. Returns whether the caller should
    /// request another frame; a loop that is not running does nothing.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        pointer: &PointerPosition,
        viewport: Viewport,
        surface: &mut S,
    ) -> bool {
        if !self.is_running() {
            return false;
        }
        self.field.advance(pointer, viewport);
        self.renderer
            .draw(surface, viewport, self.field.hearts(), self.field.ribbons());
        self.frames += 1;
        true
    }

    /// Runs up to `n` frames back to back with a fixed pointer and viewport.
    /// Returns how many were drawn.
    pub fn run_frames<S: Surface + ?Sized>(
        &mut self,
        n: u64,
        pointer: &PointerPosition,
        viewport: Viewport,
        surface: &mut S,
    ) -> u64 {
        let mut drawn = 0;
        while drawn < n && self.frame(pointer, viewport, surface) {
            drawn += 1;
        }
        drawn
    }
}
