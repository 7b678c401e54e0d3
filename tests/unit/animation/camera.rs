use super::*;

fn transform(m: &[f64; 16], p: DVec3) -> DVec3 {
    DMat4::from_cols_array(m).transform_point3(p)
}

#[test]
fn target_pans_within_limits() {
    let cam = CameraFollow::new(CameraConfig::default()).unwrap();
    assert_eq!(cam.target(Vec2::ZERO), DVec3::new(25.0, 30.0, 25.0));
    assert_eq!(cam.target(Vec2::new(1.0, 1.0)), DVec3::new(30.0, 30.0, 20.0));
    assert_eq!(cam.target(Vec2::new(-1.0, -1.0)), DVec3::new(20.0, 30.0, 30.0));
    assert_eq!(cam.target(Vec2::new(7.0, -9.0)), DVec3::new(30.0, 30.0, 30.0));
    assert_eq!(cam.target(Vec2::new(f64::NAN, 0.0)), DVec3::new(25.0, 30.0, 25.0));
}

#[test]
fn tick_moves_exponentially_toward_target() {
    let mut cam = CameraFollow::new(CameraConfig::default()).unwrap();
    let pointer = Vec2::new(1.0, 0.0);
    let pose = cam.tick(0.1, pointer);
    let expected = 25.0 + 5.0 * (1.0 - (-0.3f64).exp());
    assert!((pose.position.x - expected).abs() < 1e-12);
    assert_eq!(pose.position.y, 30.0);

    for _ in 0..600 {
        cam.tick(1.0 / 60.0, pointer);
    }
    assert!((cam.pose().position.x - 30.0).abs() < 1e-6);
}

#[test]
fn zero_or_bad_dt_does_not_move() {
    let mut cam = CameraFollow::new(CameraConfig::default()).unwrap();
    let p0 = cam.pose().position;
    cam.tick(0.0, Vec2::new(1.0, 1.0));
    cam.tick(f64::NAN, Vec2::new(1.0, 1.0));
    assert_eq!(cam.pose().position, p0);
}

#[test]
fn always_faces_look_at_point() {
    let mut cam = CameraFollow::new(CameraConfig::default()).unwrap();
    for (i, p) in [(-1.0, 0.5), (0.3, -0.8), (1.0, 1.0)].into_iter().enumerate() {
        let pose = cam.tick(0.05 * (i as f64 + 1.0), Vec2::new(p.0, p.1));
        let view = pose.view_matrix();
        let centre = transform(&view, pose.look_at);
        assert!(centre.x.abs() < 1e-9);
        assert!(centre.y.abs() < 1e-9);
        assert!(centre.z < 0.0);
        let eye = transform(&view, pose.position);
        assert!(eye.length() < 1e-9);
    }
}

#[test]
fn pointer_normalization_matches_window_convention() {
    let vp = Size::new(800.0, 600.0);
    assert_eq!(normalize_pointer(Point::new(0.0, 0.0), vp), Vec2::new(-1.0, 1.0));
    assert_eq!(normalize_pointer(Point::new(400.0, 300.0), vp), Vec2::ZERO);
    assert_eq!(normalize_pointer(Point::new(800.0, 600.0), vp), Vec2::new(1.0, -1.0));
    assert_eq!(normalize_pointer(Point::new(5.0, 5.0), Size::ZERO), Vec2::ZERO);
}

#[test]
fn invalid_rigs_are_rejected() {
    let mut cfg = CameraConfig::default();
    cfg.rate = 0.0;
    assert!(CameraFollow::new(cfg).is_err());

    let mut cfg = CameraConfig::default();
    cfg.base = cfg.look_at;
    assert!(CameraFollow::new(cfg).is_err());

    let mut cfg = CameraConfig::default();
    cfg.pan.x = -1.0;
    assert!(CameraFollow::new(cfg).is_err());
}

#[test]
fn rigs_that_pan_over_the_look_at_point_are_rejected() {
    let overhead = CameraConfig {
        base: DVec3::new(3.0, 30.0, 0.0),
        ..CameraConfig::default()
    };
    let err = CameraFollow::new(overhead).unwrap_err();
    assert!(err.to_string().contains("look_at"));

    let straight_down = CameraConfig {
        base: DVec3::new(0.0, 30.0, 0.0),
        pan: PanLimits { x: 0.0, z: 0.0 },
        ..CameraConfig::default()
    };
    assert!(CameraFollow::new(straight_down).is_err());

    let just_clear = CameraConfig {
        base: DVec3::new(5.5, 30.0, 0.0),
        ..CameraConfig::default()
    };
    assert!(CameraFollow::new(just_clear).is_ok());
}

#[test]
fn view_keeps_ground_axes_apart_at_every_pan_extreme() {
    let cfg = CameraConfig {
        base: DVec3::new(6.0, 30.0, 0.0),
        ..CameraConfig::default()
    };
    let mut cam = CameraFollow::new(cfg).unwrap();
    for p in [(-1.0, 0.0), (1.0, 0.0), (-1.0, 1.0), (-1.0, -1.0)] {
        cam.snap_to(Vec2::new(p.0, p.1));
        let view = cam.pose().view_matrix();
        assert!(view.iter().all(|v| v.is_finite()));
        let x = transform(&view, DVec3::X);
        let z = transform(&view, DVec3::Z);
        assert!(x.distance(z) > 1.0, "pointer {p:?}: {x} vs {z}");
    }
}
