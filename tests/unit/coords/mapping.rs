use super::*;

fn res(w: f64, h: f64) -> Resolution {
    Resolution::new(w, h).unwrap()
}

fn corners_and_center() -> [Vec2; 5] {
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.5, 0.5),
    ]
}

#[test]
fn cover_is_identity_for_matching_aspect() {
    let pairs = [
        (res(1.0, 1.0), res(1.0, 1.0)),
        (res(1920.0, 1080.0), res(3840.0, 2160.0)),
        (res(300.0, 600.0), res(150.0, 300.0)),
    ];
    for (surface, image) in pairs {
        for u in [Vec2::new(0.0, 0.0), Vec2::new(0.3, 0.7), Vec2::new(1.0, 1.0)] {
            assert_eq!(cover_uv(u, surface, image), u);
        }
    }
}

#[test]
fn cover_wide_surface_square_image_stays_in_unit_square() {
    let surface = res(16.0, 9.0);
    let image = res(1.0, 1.0);
    for u in corners_and_center() {
        let uv = cover_uv(u, surface, image);
        assert!((0.0..=1.0).contains(&uv.x), "{u:?} -> {uv:?}");
        assert!((0.0..=1.0).contains(&uv.y), "{u:?} -> {uv:?}");
        assert_eq!(uv.x, u.x);
    }

    let bottom = cover_uv(Vec2::new(0.0, 0.0), surface, image);
    let top = cover_uv(Vec2::new(0.0, 1.0), surface, image);
    assert!((bottom.y - 0.21875).abs() < 1e-12);
    assert!((top.y - 0.78125).abs() < 1e-12);

    let center = cover_uv(Vec2::new(0.5, 0.5), surface, image);
    assert!((center - Vec2::new(0.5, 0.5)).hypot() < 1e-12);
}

#[test]
fn cover_tall_surface_crops_width() {
    let surface = res(9.0, 16.0);
    let image = res(1.0, 1.0);
    let left = cover_uv(Vec2::new(0.0, 0.25), surface, image);
    let right = cover_uv(Vec2::new(1.0, 0.25), surface, image);
    assert!((left.x - 0.21875).abs() < 1e-12);
    assert!((right.x - 0.78125).abs() < 1e-12);
    assert_eq!(left.y, 0.25);
}

#[test]
fn centered_uv_normalizes_by_chosen_axis() {
    let wide = res(200.0, 100.0);
    assert_eq!(
        centered_uv(Vec2::new(1.0, 1.0), wide, AxisNorm::Dominant),
        Vec2::new(0.5, 0.25)
    );
    assert_eq!(
        centered_uv(Vec2::new(0.5, 0.5), wide, AxisNorm::Dominant),
        Vec2::ZERO
    );

    let tall = res(100.0, 200.0);
    assert_eq!(
        centered_uv(Vec2::new(1.0, 1.0), tall, AxisNorm::Dominant),
        Vec2::new(0.25, 0.5)
    );
    assert_eq!(
        centered_uv(Vec2::new(0.5, 1.0), tall, AxisNorm::SurfaceWidth),
        Vec2::new(0.0, 1.0)
    );
}

#[test]
fn scaled_uv_keeps_bottom_left_origin() {
    let wide = res(200.0, 100.0);
    assert_eq!(
        scaled_uv(Vec2::new(1.0, 1.0), wide, AxisNorm::Dominant),
        Vec2::new(1.0, 0.5)
    );
    assert_eq!(
        scaled_uv(Vec2::ZERO, wide, AxisNorm::Dominant),
        Vec2::ZERO
    );
}

#[test]
fn ripple_is_still_at_the_center_and_radial_elsewhere() {
    let c = Vec2::new(0.5, 0.5);
    assert_eq!(ripple_uv(c, 3.0), c);

    let p = Vec2::new(0.5, 0.8);
    let r = ripple_uv(p, 0.0);
    assert_eq!(r.x, 0.5);
    assert!((r.y - (0.8 + (15.0f64).sin() * 0.2)).abs() < 1e-12);
}

#[test]
fn ripple_moves_with_time() {
    let p = Vec2::new(0.7, 0.9);
    assert_ne!(ripple_uv(p, 0.0), ripple_uv(p, 1.0));
}

#[test]
fn quantize_snaps_to_cell_centers() {
    let a = quantize_uv(Vec2::new(0.01, 0.01), 8.0);
    let b = quantize_uv(Vec2::new(0.015, 0.017), 8.0);
    assert_eq!(a, b);
    assert_eq!(a, Vec2::new(0.0625, 0.0625));

    let c = quantize_uv(Vec2::new(0.13, 0.01), 8.0);
    assert_ne!(a, c);
}
