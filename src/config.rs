//! Tuning constants for the background field.
//!
//! Nothing here is configurable at runtime. The `Default` impls carry the
//! values the page ships with; tests build fields with smaller counts.

/// Id of the full-window canvas the background draws into.
pub const CANVAS_ID: &str = "bg-canvas";

/// Distance from the pointer inside which particles are pushed away.
pub const REPEL_RADIUS: f64 = 120.0;

/// Where the pointer is parked after a finger is lifted.
pub const OFFSCREEN_POINTER: (f64, f64) = (-1000.0, -1000.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartConfig {
    pub count: usize,
    /// Hearts spawn inside the viewport shrunk by this much on every side.
    pub margin: f64,
    pub size_min: f64,
    pub size_max: f64,
    /// Per-axis spawn velocity is drawn from `[-spawn_speed, spawn_speed)`.
    pub spawn_speed: f64,
    pub repel_strength: f64,
    pub friction: f64,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            count: 18,
            margin: 40.0,
            size_min: 18.0,
            size_max: 32.0,
            spawn_speed: 0.5,
            repel_strength: 1.2,
            friction: 0.92,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonConfig {
    pub count: usize,
    pub length_min: f64,
    pub length_max: f64,
    pub spawn_speed: f64,
    /// Angular velocity is drawn from `[-spin, spin)` once, at creation.
    pub spin: f64,
    pub repel_strength: f64,
    pub friction: f64,
    pub spin_friction: f64,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            count: 12,
            length_min: 60.0,
            length_max: 120.0,
            spawn_speed: 0.3,
            spin: 0.01,
            repel_strength: 0.8,
            friction: 0.93,
            spin_friction: 0.98,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub repel_radius: f64,
    pub hearts: HeartConfig,
    pub ribbons: RibbonConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            repel_radius: REPEL_RADIUS,
            hearts: HeartConfig::default(),
            ribbons: RibbonConfig::default(),
        }
    }
}
