use std::fs;

use indoc::indoc;

use crate::{MAX_CONFIG_SIZE, Settings, SettingsError, SettingsPaths, SettingsStore};

fn store_in(app_data: &tempfile::TempDir, exe_dir: &tempfile::TempDir) -> SettingsStore {
    SettingsStore::new(SettingsPaths::new(Some(app_data.path()), exe_dir.path()))
}

#[test]
fn save_creates_directory_and_loads_back() {
    let app_data = tempfile::tempdir().unwrap();
    let exe_dir = tempfile::tempdir().unwrap();
    let store = store_in(&app_data, &exe_dir);
    let settings = Settings {
        reconnect: true,
        show_notification: false,
        last_devices: vec!["dev-1".into()],
    };

    store.save(&settings).unwrap();

    assert!(store.paths().preferred.is_file());
    assert_eq!(store.load().unwrap(), settings);
}

#[test]
fn load_reads_legacy_file() {
    let app_data = tempfile::tempdir().unwrap();
    let exe_dir = tempfile::tempdir().unwrap();
    let store = store_in(&app_data, &exe_dir);
    let json = indoc! {r#"
        { "reconnect": true, "lastDevices": ["old"] }
    "#};
    fs::write(&store.paths().legacy, json).unwrap();

    let settings = store.load().unwrap();

    assert!(settings.reconnect);
    assert_eq!(settings.last_devices, ["old"]);
}

#[test]
fn save_after_legacy_load_writes_preferred() {
    let app_data = tempfile::tempdir().unwrap();
    let exe_dir = tempfile::tempdir().unwrap();
    let store = store_in(&app_data, &exe_dir);
    fs::write(
        &store.paths().legacy,
        r#"{ "reconnect": false, "lastDevices": [] }"#,
    )
    .unwrap();

    let settings = store.load().unwrap();
    store.save(&settings).unwrap();

    assert!(store.paths().preferred.is_file());
    assert_eq!(store.paths().resolve_load_path(), store.paths().preferred);
}

#[test]
fn missing_file_is_read_error() {
    let app_data = tempfile::tempdir().unwrap();
    let exe_dir = tempfile::tempdir().unwrap();
    let store = store_in(&app_data, &exe_dir);

    let err = store.load().unwrap_err();

    assert!(matches!(err, SettingsError::Read { .. }), "{err:?}");
}

#[test]
fn malformed_json_is_json_error() {
    let app_data = tempfile::tempdir().unwrap();
    let exe_dir = tempfile::tempdir().unwrap();
    let store = store_in(&app_data, &exe_dir);
    fs::write(&store.paths().legacy, "{ not json").unwrap();

    let err = store.load().unwrap_err();

    assert!(matches!(err, SettingsError::Json { .. }), "{err:?}");
}

#[test]
fn oversized_file_is_rejected() {
    let app_data = tempfile::tempdir().unwrap();
    let exe_dir = tempfile::tempdir().unwrap();
    let store = store_in(&app_data, &exe_dir);
    fs::write(&store.paths().legacy, vec![b' '; MAX_CONFIG_SIZE]).unwrap();

    let err = store.load().unwrap_err();

    assert!(
        matches!(err, SettingsError::TooLarge { limit, .. } if limit == MAX_CONFIG_SIZE),
        "{err:?}"
    );
}

#[test]
fn just_under_limit_is_parsed() {
    let app_data = tempfile::tempdir().unwrap();
    let exe_dir = tempfile::tempdir().unwrap();
    let store = store_in(&app_data, &exe_dir);
    let json = r#"{ "reconnect": true, "lastDevices": [] }"#;
    let mut bytes = json.as_bytes().to_vec();
    bytes.resize(MAX_CONFIG_SIZE - 1, b' ');
    fs::write(&store.paths().legacy, bytes).unwrap();

    assert!(store.load().unwrap().reconnect);
}

#[test]
fn load_or_default_on_failure() {
    let app_data = tempfile::tempdir().unwrap();
    let exe_dir = tempfile::tempdir().unwrap();
    let store = store_in(&app_data, &exe_dir);
    fs::write(&store.paths().legacy, r#"{ "reconnect": true }"#).unwrap();

    assert_eq!(store.load_or_default(), Settings::default());
}

#[test]
fn saved_file_is_pretty_printed() {
    let app_data = tempfile::tempdir().unwrap();
    let exe_dir = tempfile::tempdir().unwrap();
    let store = store_in(&app_data, &exe_dir);

    store.save(&Settings::default()).unwrap();

    let text = fs::read_to_string(&store.paths().preferred).unwrap();
    let expected = indoc! {r#"
        {
          "reconnect": false,
          "showNotification": true,
          "lastDevices": []
        }
    "#};
    assert_eq!(text, expected);
}
