//! Tests for layered Settings loading

use orgchart::config::Settings;
use tempfile::TempDir;

#[test]
fn given_no_sources_when_defaulting_then_report_is_unbounded() {
    let settings = Settings::default();

    assert_eq!(settings.report.max_levels, None);
}

#[test]
fn given_config_file_when_loading_then_level_bound_is_applied() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("orgchart.toml");
    std::fs::write(&path, "[report]\nmax_levels = 2\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.report.max_levels, Some(2));
}

#[test]
fn given_config_file_without_report_section_when_loading_then_defaults_apply() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("orgchart.toml");
    std::fs::write(&path, "").unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_default_settings_when_serializing_then_toml_has_report_table() {
    let rendered = Settings::default().to_toml().unwrap();

    assert!(rendered.contains("[report]"));
    // unset bound is omitted, not serialized as a null
    assert!(!rendered.contains("max_levels"));
}

#[test]
fn given_bounded_settings_when_serializing_then_bound_roundtrips() {
    let mut settings = Settings::default();
    settings.report.max_levels = Some(3);

    let rendered = settings.to_toml().unwrap();

    assert!(rendered.contains("max_levels = 3"));
    let parsed: Settings = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, settings);
}
