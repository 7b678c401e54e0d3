use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = PageConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.city.cars.len(), 10);
    assert_eq!(cfg.videos, ["jggrSjc1if0", "YshnFne48pw"]);
    assert_eq!(cfg.progress_spring.rest_delta, 0.001);
}

#[test]
fn empty_json_yields_defaults() {
    let cfg = PageConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, PageConfig::default());
}

#[test]
fn json_roundtrip_keeps_colours_as_hex() {
    let json = serde_json::to_string(&PageConfig::default()).unwrap();
    assert!(json.contains("\"#ef4444\""));
    assert_eq!(PageConfig::from_json_str(&json).unwrap(), PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = PageConfig::from_json_str(r#"{"ring":{"enabled":false},"smoke_seed":9}"#).unwrap();
    assert!(!cfg.ring.enabled);
    assert_eq!(cfg.ring.radius, 40.0);
    assert_eq!(cfg.smoke_seed, 9);
    assert_eq!(cfg.city, CityConfig::default());
}

#[test]
fn invalid_tables_are_rejected() {
    let err = PageConfig::from_json_str(r#"{"city":{"track_length":-1}}"#).unwrap_err();
    assert!(matches!(err, KinemaError::Validation(_)), "{err}");

    let err = PageConfig::from_json_str(r#"{"progress_spring":{"stiffness":0,"damping":1}}"#)
        .unwrap_err();
    assert!(matches!(err, KinemaError::Validation(_)));

    let err = PageConfig::from_json_str(
        r##"{"city":{"cars":[{"offset":0,"speed":1,"color":"#zzz","lane_z":0,"direction":"forward"}]}}"##,
    )
    .unwrap_err();
    assert!(matches!(err, KinemaError::Serde(_)), "{err}");
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PageConfig::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, KinemaError::Serde(_)));
}
