//! Particle state for the background: hearts and ribbons drifting away from
//! the pointer.
//!
//! Each frame a particle within the repel radius receives a push directed
//! away from the pointer, moves by its velocity, then loses a fixed fraction
//! of its speed. A particle that leaves the viewport is re-seeded in place at
//! a random spot instead of being clamped or bounced.

use rand::Rng;
use std::f64::consts::TAU;

use crate::config::{FieldConfig, HeartConfig, RibbonConfig};
use crate::pointer::{PointerPosition, Viewport};

/// `a + u * (b - a)` with `u` in `[0, 1)`.
///
/// Total even when `b < a`, which happens for hearts on viewports narrower
/// than twice the margin.
#[inline]
fn random_between<R: Rng>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + rng.gen::<f64>() * (b - a)
}

/// Velocity impulse pushing a particle at `(x, y)` away from `pointer`.
///
/// Falls off linearly from `strength` at the pointer to zero at `radius`.
/// Returns `(0, 0)` at or beyond the radius. At zero distance the direction
/// is `atan2(0, 0) = 0`, so the push goes along +x at full strength.
pub fn repulsion(x: f64, y: f64, pointer: &PointerPosition, radius: f64, strength: f64) -> (f64, f64) {
    let dx = x - pointer.x;
    let dy = y - pointer.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist >= radius {
        return (0.0, 0.0);
    }
    let angle = dy.atan2(dx);
    let force = (radius - dist) / radius;
    (angle.cos() * force * strength, angle.sin() * force * strength)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    size: f64,
}

impl Heart {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, size: f64) -> Self {
        Self { x, y, vx, vy, size }
    }

    fn spawn<R: Rng>(rng: &mut R, cfg: &HeartConfig, viewport: Viewport) -> Self {
        let size = random_between(rng, cfg.size_min, cfg.size_max);
        let mut heart = Self::new(0.0, 0.0, 0.0, 0.0, size);
        heart.respawn(rng, cfg, viewport);
        heart
    }

    fn respawn<R: Rng>(&mut self, rng: &mut R, cfg: &HeartConfig, viewport: Viewport) {
        self.x = random_between(rng, cfg.margin, viewport.w() - cfg.margin);
        self.y = random_between(rng, cfg.margin, viewport.h() - cfg.margin);
        self.vx = random_between(rng, -cfg.spawn_speed, cfg.spawn_speed);
        self.vy = random_between(rng, -cfg.spawn_speed, cfg.spawn_speed);
    }

    /// Fixed at creation.
    pub fn size(&self) -> f64 {
        self.size
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ribbon {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Radians.
    pub angle: f64,
    pub spin: f64,
    length: f64,
}

impl Ribbon {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, angle: f64, spin: f64, length: f64) -> Self {
        Self { x, y, vx, vy, angle, spin, length }
    }

    fn spawn<R: Rng>(rng: &mut R, cfg: &RibbonConfig, viewport: Viewport) -> Self {
        let length = random_between(rng, cfg.length_min, cfg.length_max);
        let spin = random_between(rng, -cfg.spin, cfg.spin);
        let mut ribbon = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, spin, length);
        ribbon.respawn(rng, cfg, viewport);
        ribbon
    }

    // Spin is left alone: it keeps decaying across respawns.
    fn respawn<R: Rng>(&mut self, rng: &mut R, cfg: &RibbonConfig, viewport: Viewport) {
        self.x = random_between(rng, 0.0, viewport.w());
        self.y = random_between(rng, 0.0, viewport.h());
        self.vx = random_between(rng, -cfg.spawn_speed, cfg.spawn_speed);
        self.vy = random_between(rng, -cfg.spawn_speed, cfg.spawn_speed);
        self.angle = random_between(rng, 0.0, TAU);
    }

    /// Fixed at creation.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Far end of the ribbon.
    pub fn tip(&self) -> (f64, f64) {
        (
            self.x + self.length * self.angle.cos(),
            self.y + self.length * self.angle.sin(),
        )
    }

    /// Quadratic control point: half length out, bent 0.5 rad off the axis.
    pub fn control_point(&self) -> (f64, f64) {
        let half = self.length / 2.0;
        let bent = self.angle + 0.5;
        (self.x + half * bent.cos(), self.y + half * bent.sin())
    }
}

/// Owns every heart and ribbon plus the generator used to seed them.
pub struct ParticleField<R> {
    config: FieldConfig,
    hearts: Vec<Heart>,
    ribbons: Vec<Ribbon>,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    /// Seeds `config.hearts.count` hearts and `config.ribbons.count` ribbons
    /// at random inside `viewport`.
    pub fn new(config: FieldConfig, viewport: Viewport, mut rng: R) -> Self {
        let hearts = (0..config.hearts.count)
            .map(|_| Heart::spawn(&mut rng, &config.hearts, viewport))
            .collect();
        let ribbons = (0..config.ribbons.count)
            .map(|_| Ribbon::spawn(&mut rng, &config.ribbons, viewport))
            .collect();
        Self { config, hearts, ribbons, rng }
    }

    /// Builds a field around particles placed by the caller.
    pub fn with_particles(config: FieldConfig, hearts: Vec<Heart>, ribbons: Vec<Ribbon>, rng: R) -> Self {
        Self { config, hearts, ribbons, rng }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn ribbons(&self) -> &[Ribbon] {
        &self.ribbons
    }

    /// Steps every particle by one frame.
    pub fn advance(&mut self, pointer: &PointerPosition, viewport: Viewport) {
        let radius = self.config.repel_radius;

        let cfg = &self.config.hearts;
        for heart in &mut self.hearts {
            let (ix, iy) = repulsion(heart.x, heart.y, pointer, radius, cfg.repel_strength);
            heart.vx += ix;
            heart.vy += iy;

            heart.x += heart.vx;
            heart.y += heart.vy;
            heart.vx *= cfg.friction;
            heart.vy *= cfg.friction;

            if !viewport.contains(heart.x, heart.y) {
                log::trace!("heart left viewport at ({:.1}, {:.1})", heart.x, heart.y);
                heart.respawn(&mut self.rng, cfg, viewport);
            }
        }

        let cfg = &self.config.ribbons;
        for ribbon in &mut self.ribbons {
            let (ix, iy) = repulsion(ribbon.x, ribbon.y, pointer, radius, cfg.repel_strength);
            ribbon.vx += ix;
            ribbon.vy += iy;

            ribbon.x += ribbon.vx;
            ribbon.y += ribbon.vy;
            ribbon.angle += ribbon.spin;
            ribbon.vx *= cfg.friction;
            ribbon.vy *= cfg.friction;
            ribbon.spin *= cfg.spin_friction;

            if !viewport.contains(ribbon.x, ribbon.y) {
                log::trace!("ribbon left viewport at ({:.1}, {:.1})", ribbon.x, ribbon.y);
                ribbon.respawn(&mut self.rng, cfg, viewport);
            }
        }
    }
}
