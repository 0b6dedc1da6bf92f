use indoc::indoc;

use crate::Settings;

#[test]
fn defaults() {
    let settings = Settings::default();
    assert!(!settings.reconnect);
    assert!(settings.show_notification);
    assert!(settings.last_devices.is_empty());
}

#[test]
fn parse_full() {
    let json = indoc! {r#"
        {
          "reconnect": true,
          "showNotification": false,
          "lastDevices": ["dev-a", "dev-b"]
        }
    "#};

    let settings = Settings::from_json(json.as_bytes()).unwrap();

    assert!(settings.reconnect);
    assert!(!settings.show_notification);
    assert_eq!(settings.last_devices, ["dev-a", "dev-b"]);
}

#[test]
fn show_notification_is_optional() {
    let json = r#"{ "reconnect": false, "lastDevices": [] }"#;
    let settings = Settings::from_json(json.as_bytes()).unwrap();
    assert!(settings.show_notification);
}

#[test]
fn missing_reconnect_is_error() {
    let json = r#"{ "lastDevices": [] }"#;
    let err = Settings::from_json(json.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("reconnect"), "{err}");
}

#[test]
fn missing_last_devices_is_error() {
    let json = r#"{ "reconnect": true }"#;
    let err = Settings::from_json(json.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("lastDevices"), "{err}");
}

#[test]
fn non_string_devices_are_skipped() {
    let json = r#"{ "reconnect": true, "lastDevices": ["a", 1, null, {"x": 2}, "b"] }"#;
    let settings = Settings::from_json(json.as_bytes()).unwrap();
    assert_eq!(settings.last_devices, ["a", "b"]);
}

#[test]
fn wrong_type_is_error() {
    let json = r#"{ "reconnect": "yes", "lastDevices": [] }"#;
    assert!(Settings::from_json(json.as_bytes()).is_err());
}

#[test]
fn pretty_json_layout() {
    let settings = Settings {
        reconnect: true,
        show_notification: false,
        last_devices: vec!["dev-a".into()],
    };

    let expected = indoc! {r#"
        {
          "reconnect": true,
          "showNotification": false,
          "lastDevices": [
            "dev-a"
          ]
        }
    "#};
    assert_eq!(settings.to_json_pretty(), expected);
}

#[test]
fn pretty_json_parses_back() {
    let settings = Settings {
        reconnect: true,
        show_notification: true,
        last_devices: vec!["x".into(), "y".into()],
    };
    let parsed = Settings::from_json(settings.to_json_pretty().as_bytes()).unwrap();
    assert_eq!(parsed, settings);
}
