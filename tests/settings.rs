mod common;

use common::utf8_tempdir;
use mc_installer_lib::config::settings::{MinecraftSettings, SettingsPreferences};
use mc_installer_lib::config::{InstallerConfig, GENERATED_FILE_LIMIT};
use mc_installer_lib::core::preferences::{resolve_extraction, UserPreferenceProvider};

#[test]
fn test_missing_settings_file_means_undecided() {
    let (_tmp, root) = utf8_tempdir();
    let path = root.join("settings.toml");

    let prefs = SettingsPreferences::open(&path, || panic!("should not prompt on open")).unwrap();
    assert_eq!(prefs.resource_pack_extraction_preference(), None);
    assert_eq!(prefs.settings(), MinecraftSettings::default());
}

#[test]
fn test_prompt_answer_is_persisted() {
    let (_tmp, root) = utf8_tempdir();
    let path = root.join("nested/settings.toml");

    let prefs = SettingsPreferences::open(&path, || true).unwrap();
    assert!(resolve_extraction(&prefs).unwrap());
    assert_eq!(prefs.resource_pack_extraction_preference(), Some(true));

    // A fresh provider reads the stored answer and never prompts.
    let reopened = SettingsPreferences::open(&path, || panic!("already decided")).unwrap();
    assert_eq!(reopened.resource_pack_extraction_preference(), Some(true));
    assert!(resolve_extraction(&reopened).unwrap());
}

#[test]
fn test_toggle_overrides_previous_choice() {
    let (_tmp, root) = utf8_tempdir();
    let path = root.join("settings.toml");

    let prefs = SettingsPreferences::open(&path, || true).unwrap();
    prefs.set_resource_pack_extraction(false).unwrap();

    let stored = MinecraftSettings::load(&path).unwrap();
    assert_eq!(stored.resource_pack_extraction, Some(false));
}

#[test]
fn test_installer_config_round_trips_through_file() {
    let (_tmp, root) = utf8_tempdir();
    let path = root.join("installer.toml");

    let defaults = InstallerConfig::load_path(&path).unwrap();
    assert_eq!(defaults, InstallerConfig::default());
    assert_eq!(defaults.generated_file_limit, GENERATED_FILE_LIMIT);
    assert_eq!(defaults.supported_game_id, "minecraft");

    let custom = InstallerConfig {
        pack_archive_ext: "mcpack".to_string(),
        ..InstallerConfig::default()
    };
    custom.store_path(&path).unwrap();
    assert_eq!(InstallerConfig::load_path(&path).unwrap(), custom);
}
