// SPDX-License-Identifier: MPL-2.0
use tempfile::tempdir;
use uitrio::config::{self, Config};
use uitrio::i18n::fluent::I18n;
use uitrio::ui::theming::ThemeMode;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
        reduced_motion: Some(false),
    };
    config::save_to_path(&initial_config, &config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_file_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
        reduced_motion: Some(false),
    };
    config::save_to_path(&french_config, &config_file_path)
        .expect("Failed to write french config file");

    let loaded = config::load_from_path(&config_file_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config() {
    let config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
        reduced_motion: Some(false),
    };
    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn every_locale_translates_the_core_keys() {
    // Keys every screen depends on; a missing one renders as "MISSING: …".
    let keys = [
        "window-title",
        "nav-home",
        "comparison-before-label",
        "comparison-after-label",
        "comparison-drag-hint",
        "games-new-game-button",
        "contact-sent-toast",
        "settings-title",
    ];

    let config = Config::default();
    let base = I18n::new(None, &config);
    for locale in base.available_locales.clone() {
        let mut i18n = I18n::new(None, &config);
        i18n.set_locale(locale.clone());
        for key in keys {
            let value = i18n.tr(key);
            assert!(
                !value.starts_with("MISSING:"),
                "locale {locale} is missing {key}"
            );
        }
    }
}

#[test]
fn theme_mode_round_trips_through_toml() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
        let config = Config {
            language: None,
            theme_mode: mode,
            reduced_motion: Some(true),
        };
        config::save_to_path(&config, &path).expect("save");
        let loaded = config::load_from_path(&path).expect("load");
        assert_eq!(loaded.theme_mode, mode);
    }
}
