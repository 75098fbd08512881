use heartfield_wasm::{PointerEvent, PointerPosition, Viewport};

#[test]
fn mouse_and_touch_replace_position() {
    let mut p = Viewport::new(800, 600).center();
    assert_eq!(p, PointerPosition::new(400.0, 300.0));

    p.apply(PointerEvent::Move { x: 12.0, y: 34.0 });
    assert_eq!(p, PointerPosition::new(12.0, 34.0));

    p.apply(PointerEvent::TouchStart(Some((50.0, 60.0))));
    assert_eq!(p, PointerPosition::new(50.0, 60.0));

    p.apply(PointerEvent::TouchMove(Some((51.0, 62.0))));
    assert_eq!(p, PointerPosition::new(51.0, 62.0));
}

#[test]
fn touch_without_points_is_ignored() {
    let mut p = PointerPosition::new(5.0, 6.0);
    p.apply(PointerEvent::TouchStart(None));
    p.apply(PointerEvent::TouchMove(None));
    assert_eq!(p, PointerPosition::new(5.0, 6.0));
}

#[test]
fn lifting_finger_parks_pointer_offscreen() {
    let mut p = PointerPosition::new(200.0, 200.0);
    p.apply(PointerEvent::TouchEnd);
    assert_eq!(p, PointerPosition::new(-1000.0, -1000.0));
    assert!(!Viewport::new(3840, 2160).contains(p.x, p.y));
}

#[test]
fn viewport_edges_count_as_inside() {
    let vp = Viewport::new(400, 300);
    assert!(vp.contains(0.0, 0.0));
    assert!(vp.contains(400.0, 300.0));
    assert!(!vp.contains(400.5, 10.0));
    assert!(!vp.contains(10.0, -0.1));
}
