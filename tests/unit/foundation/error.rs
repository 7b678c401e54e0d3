use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KinemaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        KinemaError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(KinemaError::host("x").to_string().contains("host error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KinemaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: KinemaError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, KinemaError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error:"));
}
