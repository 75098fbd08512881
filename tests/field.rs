use std::f64::consts::TAU;

use heartfield_wasm::config::FieldConfig;
use heartfield_wasm::field::repulsion;
use heartfield_wasm::{Heart, ParticleField, PointerPosition, Ribbon, Viewport};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const EPS: f64 = 1e-12;

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

fn single_heart(heart: Heart) -> ParticleField<SmallRng> {
    ParticleField::with_particles(FieldConfig::default(), vec![heart], vec![], rng(7))
}

fn single_ribbon(ribbon: Ribbon) -> ParticleField<SmallRng> {
    ParticleField::with_particles(FieldConfig::default(), vec![], vec![ribbon], rng(7))
}

fn assert_heart_spawned(h: &Heart, vp: Viewport) {
    assert!(h.x >= 40.0 && h.x <= vp.w() - 40.0, "x={}", h.x);
    assert!(h.y >= 40.0 && h.y <= vp.h() - 40.0, "y={}", h.y);
    assert!(h.vx >= -0.5 && h.vx <= 0.5, "vx={}", h.vx);
    assert!(h.vy >= -0.5 && h.vy <= 0.5, "vy={}", h.vy);
}

#[test]
fn new_field_has_default_counts_and_ranges() {
    let vp = Viewport::new(800, 600);
    let field = ParticleField::new(FieldConfig::default(), vp, rng(1));

    assert_eq!(field.hearts().len(), 18);
    assert_eq!(field.ribbons().len(), 12);

    for h in field.hearts() {
        assert_heart_spawned(h, vp);
        assert!(h.size() >= 18.0 && h.size() < 32.0, "size={}", h.size());
    }
    for r in field.ribbons() {
        assert!(r.x >= 0.0 && r.x <= 800.0);
        assert!(r.y >= 0.0 && r.y <= 600.0);
        assert!(r.vx.abs() <= 0.3 && r.vy.abs() <= 0.3);
        assert!(r.angle >= 0.0 && r.angle < TAU);
        assert!(r.spin.abs() <= 0.01);
        assert!(r.length() >= 60.0 && r.length() < 120.0);
    }
}

#[test]
fn sizes_and_lengths_never_change() {
    let vp = Viewport::new(640, 480);
    let mut field = ParticleField::new(FieldConfig::default(), vp, rng(2));
    let sizes: Vec<f64> = field.hearts().iter().map(Heart::size).collect();
    let lengths: Vec<f64> = field.ribbons().iter().map(Ribbon::length).collect();

    // Sweep the pointer through the field so plenty of particles get pushed out.
    for i in 0..600 {
        let t = i as f64 / 600.0;
        let pointer = PointerPosition::new(t * 640.0, 240.0 + (t * TAU).sin() * 200.0);
        field.advance(&pointer, vp);
    }

    let sizes_after: Vec<f64> = field.hearts().iter().map(Heart::size).collect();
    let lengths_after: Vec<f64> = field.ribbons().iter().map(Ribbon::length).collect();
    assert_eq!(sizes, sizes_after);
    assert_eq!(lengths, lengths_after);
}

#[test]
fn particles_stay_inside_viewport_after_every_frame() {
    let vp = Viewport::new(500, 400);
    let mut field = ParticleField::new(FieldConfig::default(), vp, rng(3));
    let pointer = PointerPosition::new(250.0, 200.0);

    for _ in 0..300 {
        field.advance(&pointer, vp);
        for h in field.hearts() {
            assert!(vp.contains(h.x, h.y), "heart escaped to ({}, {})", h.x, h.y);
        }
        for r in field.ribbons() {
            assert!(vp.contains(r.x, r.y), "ribbon escaped to ({}, {})", r.x, r.y);
        }
    }
}

#[test]
fn no_push_outside_repel_radius() {
    let mut field = single_heart(Heart::new(100.0, 100.0, 0.3, -0.2, 20.0));
    // Exactly on the radius boundary.
    let pointer = PointerPosition::new(220.0, 100.0);
    field.advance(&pointer, Viewport::new(800, 600));

    let h = field.hearts()[0];
    assert!((h.x - 100.3).abs() < EPS);
    assert!((h.y - 99.8).abs() < EPS);
    assert!((h.vx - 0.3 * 0.92).abs() < EPS);
    assert!((h.vy + 0.2 * 0.92).abs() < EPS);
}

#[test]
fn offscreen_pointer_pushes_nothing() {
    let mut field = single_ribbon(Ribbon::new(0.0, 0.0, 0.1, 0.1, 0.0, 0.0, 80.0));
    field.advance(&PointerPosition::offscreen(), Viewport::new(800, 600));

    let r = field.ribbons()[0];
    assert!((r.vx - 0.1 * 0.93).abs() < EPS);
    assert!((r.vy - 0.1 * 0.93).abs() < EPS);
}

#[test]
fn pointer_on_top_of_heart_pushes_at_full_strength() {
    let mut field = single_heart(Heart::new(400.0, 300.0, 0.0, 0.0, 24.0));
    field.advance(&PointerPosition::new(400.0, 300.0), Viewport::new(800, 600));

    let h = field.hearts()[0];
    assert!(h.vx.is_finite() && h.vy.is_finite());
    assert!((h.x - 401.2).abs() < EPS);
    assert!((h.vx - 1.2 * 0.92).abs() < EPS);
    assert_eq!(h.vy, 0.0);
}

#[test]
fn repulsion_falls_off_linearly_and_points_away() {
    let pointer = PointerPosition::new(0.0, 0.0);

    let (ix, iy) = repulsion(0.0, 60.0, &pointer, 120.0, 0.8);
    assert!(ix.abs() < EPS);
    assert!((iy - 0.4).abs() < EPS);

    let (ix, iy) = repulsion(-30.0, 0.0, &pointer, 120.0, 1.2);
    assert!((ix + 0.9).abs() < EPS);
    assert!(iy.abs() < EPS);

    assert_eq!(repulsion(0.0, 121.0, &pointer, 120.0, 1.2), (0.0, 0.0));
}

#[test]
fn sustained_proximity_keeps_accelerating() {
    let mut field = single_heart(Heart::new(400.0, 300.0, 0.0, 0.0, 24.0));
    let pointer = PointerPosition::new(380.0, 300.0);
    let vp = Viewport::new(800, 600);

    let mut last_x = 400.0;
    for _ in 0..5 {
        field.advance(&pointer, vp);
        let h = field.hearts()[0];
        assert!(h.x > last_x);
        assert!(h.vx > 0.0);
        last_x = h.x;
    }
}

#[test]
fn ribbon_spins_and_spin_decays() {
    let mut field = single_ribbon(Ribbon::new(300.0, 300.0, 0.0, 0.0, 1.0, 0.01, 90.0));
    field.advance(&PointerPosition::offscreen(), Viewport::new(800, 600));

    let r = field.ribbons()[0];
    assert!((r.angle - 1.01).abs() < EPS);
    assert!((r.spin - 0.0098).abs() < EPS);
    assert_eq!((r.x, r.y), (300.0, 300.0));
}

#[test]
fn heart_leaving_right_edge_respawns_inside_margin() {
    let vp = Viewport::new(800, 600);
    let mut field = single_heart(Heart::new(801.0, 300.0, 0.0, 0.0, 20.0));
    field.advance(&PointerPosition::offscreen(), vp);

    let h = field.hearts()[0];
    assert_heart_spawned(&h, vp);
    assert_eq!(h.size(), 20.0);
}

#[test]
fn ribbon_respawn_keeps_length_and_spin() {
    let vp = Viewport::new(800, 600);
    let mut field = single_ribbon(Ribbon::new(-5.0, 10.0, 0.0, 0.0, 0.3, 0.01, 70.0));
    field.advance(&PointerPosition::offscreen(), vp);

    let r = field.ribbons()[0];
    assert!(vp.contains(r.x, r.y));
    assert!(r.vx.abs() <= 0.3 && r.vy.abs() <= 0.3);
    assert!(r.angle >= 0.0 && r.angle < TAU);
    assert_eq!(r.length(), 70.0);
    assert!((r.spin - 0.0098).abs() < EPS);
}

#[test]
fn shrinking_viewport_respawns_on_next_advance() {
    let big = Viewport::new(800, 600);
    let small = Viewport::new(400, 300);
    let mut field = single_heart(Heart::new(780.0, 580.0, 0.0, 0.0, 20.0));

    field.advance(&PointerPosition::offscreen(), big);
    assert_eq!((field.hearts()[0].x, field.hearts()[0].y), (780.0, 580.0));

    // The field only sees the new bounds when it next advances.
    field.advance(&PointerPosition::offscreen(), small);
    assert_heart_spawned(&field.hearts()[0], small);
}

#[test]
fn same_seed_same_field() {
    let vp = Viewport::new(1024, 768);
    let pointer = PointerPosition::new(512.0, 384.0);
    let mut a = ParticleField::new(FieldConfig::default(), vp, rng(99));
    let mut b = ParticleField::new(FieldConfig::default(), vp, rng(99));

    for _ in 0..120 {
        a.advance(&pointer, vp);
        b.advance(&pointer, vp);
    }
    assert_eq!(a.hearts(), b.hearts());
    assert_eq!(a.ribbons(), b.ribbons());
}

#[test]
fn tiny_viewport_does_not_panic() {
    let vp = Viewport::new(50, 30);
    let mut field = ParticleField::new(FieldConfig::default(), vp, rng(5));
    for _ in 0..200 {
        field.advance(&PointerPosition::new(25.0, 15.0), vp);
    }
    for h in field.hearts() {
        assert!(h.x.is_finite() && h.y.is_finite());
    }
}
