use super::*;

fn card() -> GlassCard {
    GlassCard::new(&GlassConfig::default()).unwrap()
}

fn run(card: &mut GlassCard, secs: f64) -> GlassFrame {
    let mut frame = card.tick(0.0, 0.0);
    let steps = (secs * 60.0) as usize;
    for i in 1..=steps {
        frame = card.tick(1.0 / 60.0, i as f64 / 60.0);
    }
    frame
}

#[test]
fn blobs_follow_the_pointer_with_their_factors() {
    let mut c = card();
    c.set_pointer(Some(Vec2::new(100.0, -50.0)));
    let f = run(&mut c, 5.0);
    assert_eq!(f.pointer, Vec2::new(100.0, -50.0));
    assert_eq!(f.blobs[0].offset, Vec2::new(80.0, -40.0));
    assert_eq!(f.blobs[1].offset, Vec2::new(-50.0, 25.0));
    assert!((f.blobs[2].offset.x - 30.0).abs() < 1e-9);
}

#[test]
fn pointer_is_filtered_not_copied() {
    let mut c = card();
    c.set_pointer(Some(Vec2::new(100.0, 0.0)));
    let f = c.tick(1.0 / 60.0, 0.0);
    assert!(f.pointer.x > 0.0 && f.pointer.x < 100.0);
}

#[test]
fn leaving_returns_blobs_to_centre() {
    let mut c = card();
    c.set_pointer(Some(Vec2::new(40.0, 40.0)));
    run(&mut c, 2.0);
    c.set_pointer(None);
    assert_eq!(c.target(), Vec2::ZERO);
    let f = run(&mut c, 5.0);
    assert_eq!(f.pointer, Vec2::ZERO);
}

#[test]
fn blobs_spin_and_pulse() {
    let mut c = card();
    let start = c.tick(0.0, 0.0);
    assert!(start.blobs.iter().all(|b| b.rotation_deg == 0.0 && b.scale == 1.0));

    // Quarter turn of the 20 s blob, counter-rotating 25 s blob.
    let f = c.tick(0.0, 5.0);
    assert!((f.blobs[0].rotation_deg - 90.0).abs() < 1e-9);
    assert!((f.blobs[1].rotation_deg + 72.0).abs() < 1e-9);

    // Pulse peaks at half period.
    let f = c.tick(0.0, 4.0);
    assert!((f.blobs[0].scale - 1.1).abs() < 1e-9);
    let f = c.tick(0.0, 6.0);
    assert!((f.blobs[2].scale - 1.3).abs() < 1e-9);
}

#[test]
fn default_palette_matches_pastels() {
    let cfg = GlassConfig::default();
    let hex: Vec<_> = cfg.blobs.iter().map(|b| b.color.to_hex()).collect();
    assert_eq!(hex, ["#d2e8fe", "#fff4d2", "#ffe4e8"]);
}

#[test]
fn empty_blob_table_is_rejected() {
    let cfg = GlassConfig {
        blobs: Vec::new(),
        ..GlassConfig::default()
    };
    assert!(GlassCard::new(&cfg).is_err());
}
