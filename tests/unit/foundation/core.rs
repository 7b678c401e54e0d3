use super::*;

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(60, 1).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn rgb_hex_parses_long_and_short_forms() {
    let c = Rgb8::parse_hex("#ef4444").unwrap();
    assert_eq!((c.r, c.g, c.b), (0xef, 0x44, 0x44));
    assert_eq!(Rgb8::parse_hex("fff").unwrap().to_hex(), "#ffffff");
    assert!(Rgb8::parse_hex("#12345").is_err());
    assert!(Rgb8::parse_hex("#zzzzzz").is_err());
}

#[test]
fn rgb_serializes_as_hex_string() {
    let c: Rgb8 = serde_json::from_str("\"#3b82f6\"").unwrap();
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#3b82f6\"");
    assert!(serde_json::from_str::<Rgb8>("\"blue\"").is_err());
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D::translate(Vec2::new(10.0, -2.5));
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn transform_scales_and_rotates_about_layer_origin() {
    let t = Transform2D::translate(Vec2::new(5.0, 0.0))
        .with_uniform_scale(2.0)
        .with_rotation_deg(90.0);
    let p = t.to_affine() * Point::new(1.0, 0.0);
    assert!((p.x - 5.0).abs() < 1e-12);
    assert!((p.y - 2.0).abs() < 1e-12);
    assert_eq!(t.to_affine() * Point::ZERO, Point::new(5.0, 0.0));
}
