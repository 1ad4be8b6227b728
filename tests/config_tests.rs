use std::io::Write;
use std::time::Duration;

use carousel::config::{
    Configuration, DEFAULT_AUTOPLAY_INTERVAL_MS, KeyBindingsConfig, SlideConfig,
};

#[test]
fn empty_document_uses_builtin_deck() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.slides.len(), 6);
    assert_eq!(cfg.autoplay_interval_ms, DEFAULT_AUTOPLAY_INTERVAL_MS);
    assert_eq!(cfg.autoplay_interval(), Duration::from_millis(2000));
    assert!(!cfg.autoplay_on_start);
    assert!(cfg.toolbar_visible);
    assert_eq!(cfg.random_seed, None);
    assert_eq!(cfg.key_bindings, KeyBindingsConfig::default());
}

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
autoplay-interval-ms: 750
autoplay-on-start: true
random-seed: 7
toolbar-visible: false
key-bindings:
  previous: 65
  next: 68
slides:
  - image: "img/a.png"
    caption: "First"
  - image: "img/b.png"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.autoplay_interval(), Duration::from_millis(750));
    assert!(cfg.autoplay_on_start);
    assert_eq!(cfg.random_seed, Some(7));
    assert!(!cfg.toolbar_visible);
    assert_eq!(cfg.key_bindings.previous, 65);
    assert_eq!(cfg.key_bindings.next, 68);
    assert_eq!(cfg.key_bindings.toggle_autoplay, 32);
    assert_eq!(
        cfg.slides,
        vec![
            SlideConfig::new("img/a.png", "First"),
            SlideConfig::new("img/b.png", ""),
        ]
    );

    let deck = cfg.slide_deck();
    assert_eq!(deck[0].image, "img/a.png");
    assert_eq!(deck[0].caption, "First");
}

#[test]
fn empty_slide_list_is_rejected() {
    let cfg: Configuration = serde_yaml::from_str("slides: []").unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(
        err.to_string().contains("at least one"),
        "unexpected error: {err}"
    );
}

#[test]
fn blank_image_is_rejected() {
    let yaml = r#"
slides:
  - image: "ok.jpg"
  - image: "  "
    caption: "missing"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("slides[1].image"), "{err}");
}

#[test]
fn zero_interval_is_rejected() {
    let cfg: Configuration = serde_yaml::from_str("autoplay-interval-ms: 0").unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn colliding_key_bindings_are_rejected() {
    let yaml = r#"
key-bindings:
  toggle-autoplay: 39
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(format!("{err:#}").contains("key-bindings"), "{err:#}");
}

#[test]
fn unknown_keys_are_rejected() {
    let yaml = r#"
autoplay-interval: 2000
"#;
    assert!(serde_yaml::from_str::<Configuration>(yaml).is_err());

    let yaml = r#"
slides:
  - image: "a.jpg"
    legend: "old field name"
"#;
    assert!(serde_yaml::from_str::<Configuration>(yaml).is_err());
}

#[test]
fn loads_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "autoplay-interval-ms: 1500\nslides:\n  - image: one.jpg\n    caption: One"
    )
    .unwrap();

    let cfg = Configuration::from_yaml_file(file.path())
        .unwrap()
        .validated()
        .unwrap();
    assert_eq!(cfg.autoplay_interval_ms, 1500);
    assert_eq!(cfg.slides, vec![SlideConfig::new("one.jpg", "One")]);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Configuration::from_yaml_file(dir.path().join("absent.yaml")).is_err());
}
