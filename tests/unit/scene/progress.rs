use super::*;

#[test]
fn bar_scale_follows_smoothed_progress() {
    let bar = ProgressBar::new(7, 5).unwrap();
    let f = bar.frame(0.25, 0.0);
    assert_eq!(f.scale_x, 0.25);
    assert_eq!(f.smoke.len(), 5);
}

#[test]
fn smoke_is_deterministic_per_seed() {
    let a = ProgressBar::new(42, 5).unwrap();
    let b = ProgressBar::new(42, 5).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.frame(0.5, 1.3), b.frame(0.5, 1.3));
}

#[test]
fn smoke_parameters_stay_in_range() {
    let bar = ProgressBar::new(3, 5).unwrap();
    for puff in bar.puffs() {
        assert!((0.8..=1.3).contains(&puff.duration()));
    }
    for f in bar.frame(0.0, 2.345).smoke {
        assert!((-60.0..=-10.0).contains(&f.x), "x={}", f.x);
        assert!((-15.0..=15.0).contains(&f.y), "y={}", f.y);
        assert!((1.0..=3.0).contains(&f.scale), "scale={}", f.scale);
        assert!((0.0..=0.8).contains(&f.opacity), "opacity={}", f.opacity);
    }
}

#[test]
fn puffs_hold_first_keyframe_until_their_delay() {
    let bar = ProgressBar::new(1, 5).unwrap();
    let f = bar.frame(0.0, 0.5);
    // Puff 3 starts at 0.6 s.
    assert_eq!(f.smoke[3].x, -10.0);
    assert_eq!(f.smoke[3].opacity, 0.8);
    assert!(f.smoke[0].opacity < 0.8);
}

#[test]
fn ring_empty_and_full() {
    let ring = ProgressRing::new(RingConfig::default()).unwrap();
    let empty = ring.frame(0.0, 0.0);
    assert!((empty.path_length - 251.327).abs() < 1e-3);
    assert_eq!(empty.stroke_dash_offset, empty.path_length);
    assert_eq!(empty.rotation_deg, 0.0);
    assert_eq!(empty.percent, 0);

    let full = ring.frame(1.0, 0.0);
    assert_eq!(full.stroke_dash_offset, 0.0);
    assert_eq!(full.rotation_deg, 360.0);
    assert_eq!(full.percent, 100);
}

#[test]
fn ring_offset_and_rotation_share_one_ratio() {
    let ring = ProgressRing::new(RingConfig::default()).unwrap();
    let f = ring.frame(0.5, 0.0);
    assert_eq!(f.rotation_deg, 180.0);
    assert!((f.stroke_dash_offset - ring.path_length() / 2.0).abs() < 1e-9);
    assert_eq!(f.percent, 50);
}

#[test]
fn ring_overshoot_is_clamped() {
    let ring = ProgressRing::new(RingConfig::default()).unwrap();
    let f = ring.frame(1.02, 0.0);
    assert_eq!(f.rotation_deg, 360.0);
    assert_eq!(f.percent, 100);
}

#[test]
fn glow_and_flame_pulse() {
    let ring = ProgressRing::new(RingConfig::default()).unwrap();
    let rest = ring.frame(0.0, 0.0);
    assert_eq!(rest.glow_scale, 1.0);
    assert_eq!(rest.flame_height_px, 10.0);

    let peak = ring.frame(0.0, 1.0);
    assert!((peak.glow_scale - 1.2).abs() < 1e-9);
    assert!((peak.glow_opacity - 0.8).abs() < 1e-9);

    let flame_peak = ring.frame(0.0, 0.05);
    assert!((flame_peak.flame_height_px - 16.0).abs() < 1e-6);
}

#[test]
fn ring_rejects_non_positive_radius() {
    let cfg = RingConfig {
        enabled: true,
        radius: 0.0,
    };
    assert!(ProgressRing::new(cfg).is_err());
}

#[test]
fn glow_and_flame_follow_the_default_keyframe_curve() {
    let ring = ProgressRing::new(RingConfig::default()).unwrap();
    let f = ring.frame(0.0, 0.25);
    let expected = 1.0 + 0.2 * Ease::EASE_IN_OUT.apply(0.25);
    assert!((f.glow_scale - expected).abs() < 1e-12);
    assert!(f.glow_scale < 1.0 + 0.2 * 0.25, "eases in from rest");

    let f = ring.frame(0.0, 0.0125);
    let expected = 10.0 + 6.0 * Ease::EASE_IN_OUT.apply(0.25);
    assert!((f.flame_height_px - expected).abs() < 1e-6);
}
