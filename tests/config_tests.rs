use showreel::config::{Action, Configuration};
use std::time::Duration;

#[test]
fn parse_empty_config_uses_defaults() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    assert!(cfg.slideshow.slides.is_empty());
    assert_eq!(cfg.slideshow.advance_interval, Duration::from_secs(5));
    assert!(cfg.counters.is_empty());
    assert!(cfg.session.is_empty());
}

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
slideshow:
  slides: [Atelier, Harbor, Studio]
  advance-interval: 3s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.slideshow.slides.len(), 3);
    assert_eq!(cfg.slideshow.slides[1], "Harbor");
    assert_eq!(cfg.slideshow.advance_interval, Duration::from_secs(3));
}

#[test]
fn parse_counter_defaults() {
    let yaml = r#"
counters:
  - id: projects
    target: 150
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let counter = &cfg.counters[0];
    assert_eq!(counter.id, "projects");
    assert!((counter.target - 150.0).abs() < f64::EPSILON);
    assert_eq!(counter.duration, Duration::from_secs(2));
    assert_eq!(counter.suffix, "");
    assert!((counter.threshold - 0.5).abs() < f32::EPSILON);
}

#[test]
fn parse_counter_with_all_fields() {
    let yaml = r#"
counters:
  - id: satisfaction
    target: 95
    duration: 1s 800ms
    suffix: "%"
    threshold: 0.7
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let counter = &cfg.counters[0];
    assert_eq!(counter.duration, Duration::from_millis(1800));
    assert_eq!(counter.suffix, "%");
    assert!((counter.threshold - 0.7).abs() < f32::EPSILON);
}

#[test]
fn parse_session_actions() {
    let yaml = r#"
session:
  - { at: 1s, action: next }
  - { at: 2s, action: go-to, index: 2 }
  - { at: 3s, action: pointer-enter }
  - { at: 4s, action: reveal, id: projects, fraction: 0.8 }
  - { at: 5s, action: reveal, id: clients }
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.session.len(), 5);
    assert_eq!(cfg.session[0].at, Duration::from_secs(1));
    assert_eq!(cfg.session[0].action, Action::Next);
    assert_eq!(cfg.session[1].action, Action::GoTo { index: 2 });
    assert_eq!(cfg.session[2].action, Action::PointerEnter);
    assert_eq!(
        cfg.session[3].action,
        Action::Reveal {
            id: "projects".into(),
            fraction: 0.8
        }
    );
    // Fraction defaults to fully visible.
    assert_eq!(
        cfg.session[4].action,
        Action::Reveal {
            id: "clients".into(),
            fraction: 1.0
        }
    );
}

#[test]
fn from_yaml_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("showreel.yaml");
    std::fs::write(
        &path,
        "slideshow:\n  slides: [One, Two]\n  advance-interval: 2s\n",
    )
    .unwrap();
    let cfg = Configuration::from_yaml_file(&path).unwrap();
    assert_eq!(cfg.slideshow.slides, vec!["One", "Two"]);
    assert_eq!(cfg.slideshow.advance_interval, Duration::from_secs(2));
}

#[test]
fn validate_rejects_zero_advance_interval() {
    let yaml = r#"
slideshow:
  slides: [A]
  advance-interval: 0s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("advance-interval"));
}

#[test]
fn validate_rejects_zero_counter_duration() {
    let yaml = r#"
counters:
  - id: projects
    target: 150
    duration: 0s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("duration"));
}

#[test]
fn validate_rejects_out_of_range_threshold() {
    let yaml = r#"
counters:
  - id: projects
    target: 150
    threshold: 1.5
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn validate_rejects_negative_target() {
    let yaml = r#"
counters:
  - id: projects
    target: -1
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn validate_rejects_duplicate_counter_ids() {
    let yaml = r#"
counters:
  - id: projects
    target: 150
  - id: projects
    target: 12
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn interval_override_replaces_config_value() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    let cfg = cfg
        .validated()
        .unwrap()
        .with_advance_interval(Some(Duration::from_millis(2000)))
        .unwrap();
    assert_eq!(cfg.slideshow.advance_interval, Duration::from_secs(2));
}

#[test]
fn absent_interval_override_keeps_config_value() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    let cfg = cfg.validated().unwrap().with_advance_interval(None).unwrap();
    assert_eq!(cfg.slideshow.advance_interval, Duration::from_secs(5));
}

#[test]
fn zero_interval_override_is_rejected() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    let err = cfg
        .validated()
        .unwrap()
        .with_advance_interval(Some(Duration::ZERO))
        .unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn empty_slide_list_is_valid() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    assert!(cfg.validated().is_ok());
}
