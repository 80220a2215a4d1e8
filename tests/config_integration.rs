// SPDX-License-Identifier: MPL-2.0
use sticker_smash::config::{self, Config, ExportMode, MAX_JPEG_QUALITY};
use sticker_smash::i18n::fluent::I18n;
use sticker_smash::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("button-save"), i18n_en.tr("button-save"));
}

#[test]
fn cli_language_wins_over_config() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn export_section_round_trips_through_disk() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.export.mode = ExportMode::Download;
    config.export.jpeg_quality = 70;
    config.export.download_dir = Some(dir.path().join("downloads"));
    config::save_to_path(&config, &config_path).expect("save");

    assert_eq!(config::load_from_path(&config_path).expect("load"), config);
}

#[test]
fn out_of_range_quality_is_clamped() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(&config_path, "[export]\njpeg_quality = 250\n").expect("write");

    let config = config::load_from_path(&config_path).expect("load");
    assert_eq!(config.export.clamped_jpeg_quality(), MAX_JPEG_QUALITY);
}

#[test]
fn broken_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("settings.toml"), "this is = = not toml").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn notice_keys_are_translated() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    for key in [
        "notice-no-image-picked",
        "notice-saved-to-gallery",
        "notice-save-failed",
        "sticker-picker-title",
    ] {
        let text = i18n.tr(key);
        assert!(!text.is_empty());
        assert_ne!(text, key, "missing translation for {key}");
    }
    let downloaded = i18n.tr_with_args("notice-downloaded", &[("path", "/tmp/x.jpeg")]);
    assert!(downloaded.contains("/tmp/x.jpeg"));
}
