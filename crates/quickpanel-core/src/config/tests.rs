use super::*;

#[test]
fn test_panel_config_default() {
    let panel = PanelConfig::default();
    assert_eq!(panel.language, "en");
    assert_eq!(panel.log_level, "info");
}

#[test]
fn test_panel_config_from_toml() {
    let toml_str = r#"
        [panel]
        language = "ru"
        log_level = "debug"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.panel.language, "ru");
    assert_eq!(cfg.panel.log_level, "debug");
}

#[test]
fn test_panel_config_default_when_missing() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.panel.language, "en");
    assert_eq!(cfg.panel.log_level, "info");

    let cfg: Config = toml::from_str("[panel]\nlanguage = \"cs\"\n").unwrap();
    assert_eq!(cfg.panel.language, "cs");
    assert_eq!(cfg.panel.log_level, "info");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let tmp = std::env::temp_dir().join("__quickpanel_test_missing_config__.toml");
    let _ = std::fs::remove_file(&tmp);

    let (cfg, source) = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(cfg.panel.language, "en");
    assert_eq!(cfg.panel.log_level, "info");
}

#[test]
fn test_load_reads_file() {
    let tmp = std::env::temp_dir().join("__quickpanel_test_load_config__.toml");
    std::fs::write(&tmp, "[panel]\nlanguage = \"ru\"\n").unwrap();

    let (cfg, source) = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(source, ConfigSource::File);
    assert_eq!(cfg.panel.language, "ru");
    assert_eq!(cfg.panel.log_level, "info");

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_load_malformed_file_is_config_error() {
    let tmp = std::env::temp_dir().join("__quickpanel_test_bad_config__.toml");
    std::fs::write(&tmp, "[panel\nlanguage = ").unwrap();

    let err = load(tmp.to_str().unwrap()).unwrap_err();
    assert!(
        matches!(err, QuickpanelError::Config(ref msg) if msg.contains("failed to parse")),
        "unexpected error: {err}"
    );

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_load_unreadable_path_is_io_error() {
    let tmp = std::env::temp_dir().join("__quickpanel_test_config_dir__");
    let _ = std::fs::create_dir_all(&tmp);

    // A directory exists but cannot be read as a file.
    let err = load(tmp.to_str().unwrap()).unwrap_err();
    assert!(
        matches!(err, QuickpanelError::Io(_)),
        "unexpected error: {err}"
    );
    assert!(err.to_string().starts_with("io error:"));

    let _ = std::fs::remove_dir_all(&tmp);
}
