use super::*;

#[test]
fn half_turn_at_midpoint() {
    assert_eq!(map(0.5, Span::UNIT, Span::new(0.0, 360.0)), 180.0);
}

#[test]
fn endpoints_are_exact() {
    let out = Span::new(251.2, 0.0);
    assert_eq!(map(0.0, Span::UNIT, out), 251.2);
    assert_eq!(map(1.0, Span::UNIT, out), 0.0);

    let header = Span::new(0.0, 400.0);
    assert_eq!(map(0.0, header, Span::new(1.0, 1.1)), 1.0);
    assert_eq!(map(400.0, header, Span::new(1.0, 1.1)), 1.1);
}

#[test]
fn out_of_range_inputs_are_clamped() {
    let out = Span::new(0.0, 150.0);
    assert_eq!(map(-80.0, Span::new(0.0, 400.0), out), 0.0);
    assert_eq!(map(9000.0, Span::new(0.0, 400.0), out), 150.0);
    assert_eq!(map(f64::NAN, Span::UNIT, out), 0.0);
    assert_eq!(map(f64::INFINITY, Span::UNIT, out), 150.0);
}

#[test]
fn mapping_is_monotonic() {
    let mapper = CurveMapper::new(Span::new(0.0, 1.0)).unwrap();
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=1000 {
        let v = mapper.map(f64::from(i) / 1000.0, Span::new(-3.0, 42.0));
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn descending_input_range_is_supported() {
    let mapper = CurveMapper::new(Span::new(10.0, 0.0)).unwrap();
    assert_eq!(mapper.ratio(10.0).value(), 0.0);
    assert_eq!(mapper.ratio(0.0).value(), 1.0);
    assert_eq!(mapper.ratio(-5.0).value(), 1.0);
}

#[test]
fn degenerate_range_is_rejected_by_mapper_and_resolved_by_map() {
    assert!(CurveMapper::new(Span::new(3.0, 3.0)).is_err());
    assert!(CurveMapper::new(Span::new(0.0, f64::NAN)).is_err());
    assert_eq!(map(3.0, Span::new(3.0, 3.0), Span::new(7.0, 9.0)), 7.0);
}

#[test]
fn shared_ratio_keeps_paired_outputs_in_step() {
    let mapper = CurveMapper::new(Span::UNIT).unwrap();
    let path = std::f64::consts::TAU * 40.0;
    for i in 0..=20 {
        let r = mapper.ratio(f64::from(i) / 20.0);
        let offset = r.map(Span::new(path, 0.0));
        let angle = r.map(Span::new(0.0, 360.0));
        let drawn = 1.0 - offset / path;
        assert!((drawn - angle / 360.0).abs() < 1e-12);
    }
}
