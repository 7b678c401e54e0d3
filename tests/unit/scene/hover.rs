use super::*;

fn settle(h: &mut HoverResponse) -> HoverFrame {
    let mut f = h.tick(0.0);
    for _ in 0..600 {
        f = h.tick(1.0 / 60.0);
    }
    f
}

#[test]
fn card_lifts_on_hover_and_returns_on_leave() {
    let mut card = HoverResponse::new(HoverConfig::card()).unwrap();
    assert_eq!(card.tick(1.0 / 60.0).scale, 1.0);

    card.set_hovered(true);
    let f = settle(&mut card);
    assert_eq!(f.scale, 1.01);
    assert_eq!(f.lift, -8.0);

    card.set_hovered(false);
    let f = settle(&mut card);
    assert_eq!(f.scale, 1.0);
    assert_eq!(f.lift, 0.0);
}

#[test]
fn press_takes_precedence_over_hover() {
    let mut button = HoverResponse::new(HoverConfig::button()).unwrap();
    button.set_hovered(true);
    button.set_pressed(true);
    assert_eq!(button.goal().scale, 0.95);
    assert_eq!(settle(&mut button).scale, 0.95);

    button.set_pressed(false);
    assert_eq!(settle(&mut button).scale, 1.05);
}

#[test]
fn press_without_press_pose_uses_hover_pose() {
    let mut heading = HoverResponse::new(HoverConfig::heading(2.0)).unwrap();
    heading.set_pressed(true);
    assert_eq!(heading.goal().rotate_deg, 2.0);
}

#[test]
fn hover_motion_is_smooth() {
    let mut card = HoverResponse::new(HoverConfig::card()).unwrap();
    card.set_hovered(true);
    let first = card.tick(1.0 / 60.0);
    assert!(first.lift < 0.0 && first.lift > -8.0);
}

#[test]
fn transform_carries_scale_and_offsets() {
    let f = HoverFrame {
        scale: 1.1,
        lift: -2.0,
        shift_x: 3.0,
        rotate_deg: 0.0,
    };
    let t = f.transform();
    assert_eq!(t.translate, Vec2::new(3.0, -2.0));
    assert_eq!(t.scale, Vec2::new(1.1, 1.1));
}

#[test]
fn underdamped_heading_overshoots() {
    let mut heading = HoverResponse::new(HoverConfig::raised_heading(10.0)).unwrap();
    heading.set_hovered(true);
    let mut peak = 1.0_f64;
    for _ in 0..120 {
        peak = peak.max(heading.tick(1.0 / 60.0).scale);
    }
    assert!(peak > 1.05);
}

#[test]
fn invalid_pose_is_rejected() {
    let mut cfg = HoverConfig::card();
    cfg.hover.lift = f64::NAN;
    assert!(HoverResponse::new(cfg).is_err());
}
