// SPDX-License-Identifier: MPL-2.0
use ephemerides::app::config;
use ephemerides::i18n::{self, Language};
use ephemerides::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn settings_file_drives_startup_language() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"es\"\ntheme_mode = \"Dark\"\n",
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);

    let language = i18n::resolve_language(None, config.general.language.as_deref());
    assert_eq!(language, Language::Spanish);

    // The command line wins over the file.
    let language = i18n::resolve_language(Some("en"), config.general.language.as_deref());
    assert_eq!(language, Language::English);
}

#[test]
fn unsupported_language_in_settings_falls_back_to_catalan() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\n",
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(
        i18n::resolve_language(None, config.general.language.as_deref()),
        Language::Catalan
    );
}

#[test]
fn broken_settings_file_yields_defaults_and_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, config::Config::default());
    assert!(warning.is_some_and(|w| w.contains("settings.toml")));
    assert_eq!(
        i18n::resolve_language(Some("xx-YY"), config.general.language.as_deref()),
        Language::Catalan
    );
}

#[test]
fn api_url_from_cli_beats_settings() {
    let config: config::Config =
        toml::from_str("[api]\nbase_url = \"http://ephemerides.example:8080\"\n")
            .expect("valid toml");

    assert_eq!(
        config::resolve_api_url(Some("http://localhost:9000"), &config),
        "http://localhost:9000"
    );
}
