use super::*;

fn state(pairs: &[(&str, f64)]) -> RenderState {
    let mut s = RenderState::new();
    for (k, v) in pairs {
        s.set(*k, *v);
    }
    s
}

#[test]
fn first_commit_reports_everything() {
    let mut r = Retained::default();
    let d = r.commit(state(&[("a", 1.0), ("b", 2.0)]));
    assert_eq!(d.len(), 2);
    assert_eq!(d["a"], PropChange::Set(PropValue::Scalar(1.0)));
    assert_eq!(r.commits(), 1);
}

#[test]
fn unchanged_and_tiny_changes_are_skipped() {
    let mut r = Retained::new(1e-3);
    r.commit(state(&[("a", 1.0), ("b", 2.0)]));
    let d = r.commit(state(&[("a", 1.0004), ("b", 2.5)]));
    assert_eq!(d.len(), 1);
    assert_eq!(d["b"], PropChange::Set(PropValue::Scalar(2.5)));
    assert_eq!(r.state().scalar("a"), Some(1.0004));
}

#[test]
fn removed_keys_are_reported() {
    let mut r = Retained::default();
    r.commit(state(&[("a", 1.0), ("gone", 0.0)]));
    let d = r.commit(state(&[("a", 1.0)]));
    assert_eq!(d.len(), 1);
    assert_eq!(d["gone"], PropChange::Removed);
}

#[test]
fn kind_changes_count_as_changes() {
    let mut prev = RenderState::new();
    prev.set("x", 1.0);
    let mut next = RenderState::new();
    next.set("x", "one");
    let d = diff(&prev, &next, 10.0);
    assert_eq!(d["x"], PropChange::Set(PropValue::Text("one".into())));
}

#[test]
fn matrices_compare_elementwise() {
    let mut prev = RenderState::new();
    prev.set("m", PropValue::Matrix([0.0; 16]));
    let mut m = [0.0; 16];
    m[15] = 1e-9;
    let mut next = RenderState::new();
    next.set("m", PropValue::Matrix(m));
    assert!(diff(&prev, &next, 1e-6).is_empty());
    m[3] = 0.5;
    next.set("m", PropValue::Matrix(m));
    assert_eq!(diff(&prev, &next, 1e-6).len(), 1);
}

#[test]
fn diff_serializes_removals_as_null() {
    let mut r = Retained::default();
    r.commit(state(&[("a", 1.0)]));
    let d = r.commit(RenderState::new());
    assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"a":null}"#);
}
