use super::*;

const MINIMAL: &str = r#"{
  "surface": { "width": 1280, "height": 720 },
  "current": "a.png",
  "next": "b.png"
}"#;

#[test]
fn minimal_config_gets_defaults() {
    let cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.effect, EffectSelector::Name("fade".to_string()));
    assert_eq!(cfg.effect.resolve().unwrap(), 0);
    assert_eq!(cfg.progress, 0.0);
    assert_eq!(cfg.filter, FilterMode::Linear);
    assert!(cfg.threading.parallel);
    assert_eq!(cfg.image_size, None);
    assert_eq!(cfg.mask, None);
    assert_eq!(cfg.frame_size().unwrap(), (1280, 720));
}

#[test]
fn effect_accepts_names_and_raw_ids() {
    let named = TransitionConfig::from_json_str(
        r#"{ "surface": { "width": 10, "height": 10 }, "current": "a.png", "next": "b.png",
             "effect": "pixelate_coarse", "filter": "nearest", "mask": "m.png" }"#,
    )
    .unwrap();
    assert_eq!(named.effect.resolve().unwrap(), 29);
    assert_eq!(named.filter, FilterMode::Nearest);

    let raw = TransitionConfig::from_json_str(
        r#"{ "surface": { "width": 10, "height": 10 }, "current": "a.png", "next": "b.png",
             "effect": 999 }"#,
    )
    .unwrap();
    assert_eq!(raw.effect, EffectSelector::Id(999));
    assert_eq!(raw.effect.resolve().unwrap(), 999);
    raw.validate().unwrap();
}

#[test]
fn validate_rejects_bad_values() {
    let mut cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
    cfg.surface.width = 0.0;
    assert!(matches!(cfg.validate(), Err(SlideFxError::Validation(_))));

    let mut cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
    cfg.effect = EffectSelector::Name("wobble".to_string());
    assert!(cfg.validate().is_err());

    let mut cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
    cfg.progress = f64::NAN;
    assert!(cfg.validate().is_err());

    let mut cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
    cfg.threading.threads = Some(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn out_of_range_progress_is_allowed() {
    let mut cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
    cfg.progress = 1.5;
    cfg.validate().unwrap();
}

#[test]
fn unknown_fields_are_rejected() {
    let err = TransitionConfig::from_json_str(
        r#"{ "surface": { "width": 10, "height": 10 }, "current": "a.png", "next": "b.png",
             "speed": 2 }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SlideFxError::Serde(_)));
}

#[test]
fn relative_paths_resolve_against_base() {
    let mut cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
    cfg.mask = Some(PathBuf::from("m.png"));
    cfg.resolve_paths(Path::new("assets"));
    assert_eq!(cfg.current, Path::new("assets").join("a.png"));
    assert_eq!(cfg.next, Path::new("assets").join("b.png"));
    assert_eq!(cfg.mask, Some(Path::new("assets").join("m.png")));
}

#[test]
fn json_round_trip_preserves_config() {
    let cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
    let again = TransitionConfig::from_json_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(cfg, again);
}

#[test]
fn oversized_numeric_ids_pass_through() {
    for id in [i64::from(i32::MAX) + 1, i64::from(i32::MIN) - 1, i64::MAX, i64::MIN] {
        let mut cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
        cfg.effect = EffectSelector::Id(id);
        cfg.validate().unwrap();
        assert_eq!(cfg.effect.resolve().unwrap(), PASSTHROUGH_ID);
        assert!(TransitionKind::from_id(i64::from(PASSTHROUGH_ID)).is_none());
    }

    let json = TransitionConfig::from_json_str(
        r#"{ "surface": { "width": 10, "height": 10 }, "current": "a.png", "next": "b.png",
             "effect": 9999999999 }"#,
    )
    .unwrap();
    assert_eq!(json.effect.resolve().unwrap(), PASSTHROUGH_ID);
}

#[test]
fn mask_effect_without_mask_still_validates() {
    let mut cfg = TransitionConfig::from_json_str(MINIMAL).unwrap();
    cfg.effect = EffectSelector::Name("mask_center_out".to_string());
    assert!(TransitionKind::MaskCenterOut.uses_mask());
    cfg.validate().unwrap();
}
