use super::*;

#[test]
fn toggle_only_requests_and_never_writes_state() {
    let mut host = HeadlessHost::accepting();
    let mut toggle = FullscreenToggle::new();

    toggle.toggle(&mut host);
    assert!(!toggle.is_active(), "state waits for the host notification");
    assert_eq!(host.requests(), 1);

    let change = host.take_change().unwrap();
    toggle.on_change(change);
    assert!(toggle.is_active());
    assert_eq!(toggle.icon(), FullscreenIcon::Minimize);

    toggle.toggle(&mut host);
    toggle.on_change(host.take_change().unwrap());
    assert!(!toggle.is_active());
    assert_eq!(toggle.icon(), FullscreenIcon::Maximize);
    assert_eq!(host.take_change(), None);
}

#[test]
fn rejected_request_leaves_state_unchanged() {
    let mut host = HeadlessHost::rejecting();
    let toggle = FullscreenToggle::new();
    toggle.toggle(&mut host);
    assert!(!toggle.is_active());
    assert_eq!(host.take_change(), None);
    assert!(host.request_fullscreen().is_err());
}

#[test]
fn external_exit_is_honoured() {
    let mut toggle = FullscreenToggle::new();
    toggle.on_change(true);
    // e.g. the user pressed Escape.
    toggle.on_change(false);
    assert!(!toggle.is_active());
}
