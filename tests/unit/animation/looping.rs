use super::*;

fn circular_distance(a: f64, b: f64, track: f64) -> f64 {
    let d = (a - b).abs() % track;
    d.min(track - d)
}

#[test]
fn midpoint_scenario() {
    let m = LoopingMotion::new(5.0, 0.0, Direction::Forward, 100.0).unwrap();
    assert_eq!(m.raw(10.0), 50.0);
    assert_eq!(m.position(10.0), 0.0);
}

#[test]
fn backward_travel_wraps_into_range() {
    let m = LoopingMotion::new(5.0, 25.0, Direction::Backward, 100.0).unwrap();
    for i in 0..500 {
        let p = m.position(f64::from(i) * 0.37);
        assert!((-50.0..50.0).contains(&p), "{p} out of range");
    }
    assert_eq!(m.position(0.0), -25.0);
    assert_eq!(m.position(10.0), 25.0);
}

#[test]
fn position_is_continuous_on_the_loop() {
    let m = LoopingMotion::new(6.0, 15.0, Direction::Backward, 100.0).unwrap();
    let dt = 1.0 / 240.0;
    let max_step = 6.0 * dt + 1e-9;
    let mut prev = m.position(0.0);
    for i in 1..20_000 {
        let p = m.position(f64::from(i) * dt);
        assert!(circular_distance(p, prev, 100.0) <= max_step);
        prev = p;
    }
}

#[test]
fn wrap_boundary_is_continuous() {
    let a = wrap_centered(100.0 - 1e-9, 100.0);
    let b = wrap_centered(100.0 + 1e-9, 100.0);
    assert!(circular_distance(a, b, 100.0) < 1e-6);
    assert_eq!(wrap_centered(100.0, 100.0), -50.0);
}

#[test]
fn phase_is_a_lap_fraction() {
    let m = LoopingMotion::new(1.0, 0.0, Direction::Forward, 4.0).unwrap();
    assert_eq!(m.phase(1.0), 0.25);
    assert_eq!(m.phase(4.0), 0.0);
}

#[test]
fn independent_instances_do_not_interact() {
    let a = LoopingMotion::new(4.0, 0.0, Direction::Forward, 100.0).unwrap();
    let b = LoopingMotion::new(5.0, 25.0, Direction::Backward, 100.0).unwrap();
    let before = a.position(3.0);
    let _ = b.position(3.0);
    assert_eq!(a.position(3.0), before);
}

#[test]
fn invalid_tracks_are_rejected() {
    assert!(LoopingMotion::new(1.0, 0.0, Direction::Forward, 0.0).is_err());
    assert!(LoopingMotion::new(1.0, 0.0, Direction::Forward, -5.0).is_err());
    assert!(LoopingMotion::new(f64::NAN, 0.0, Direction::Forward, 10.0).is_err());
}

#[test]
fn direction_serializes_in_snake_case() {
    assert_eq!(
        serde_json::to_string(&Direction::Backward).unwrap(),
        "\"backward\""
    );
}
